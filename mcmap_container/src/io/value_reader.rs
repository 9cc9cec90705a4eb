//! The `ValueReader` trait: typed reads of fixed-width values in a chosen byte order.
//!
//! ```rust
//! use mcmap_container::io::{ValueReader, ValueReaderSlice};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut reader = ValueReaderSlice::new_be(&[0x01, 0x02, 0xFF]);
//!     assert_eq!(reader.read_u16()?, 0x0102);
//!     assert_eq!(reader.read_i8()?, -1);
//!     assert!(!reader.has_remaining());
//!     Ok(())
//! }
//! ```

use anyhow::{Context, Result, ensure};
use byteorder::{ByteOrder, ReadBytesExt};
use cesu8::from_java_cesu8;
use mcmap_core::Blob;
use std::io::{Read, Seek};

/// A simple alias for types implementing both `Seek` and `Read`.
pub trait SeekRead: Seek + Read {}

/// Reads values from a byte source with byte order `E`.
pub trait ValueReader<'a, E: ByteOrder + 'a> {
	/// Returns the underlying reader.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Total length of the readable data.
	fn len(&self) -> u64;

	/// Current read position.
	fn position(&mut self) -> u64;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Number of bytes left to read.
	fn remaining(&mut self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	fn read_i8(&mut self) -> Result<i8> {
		Ok(self.get_reader().read_i8()?)
	}

	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.get_reader().read_u8()?)
	}

	fn read_i16(&mut self) -> Result<i16> {
		Ok(self.get_reader().read_i16::<E>()?)
	}

	fn read_u16(&mut self) -> Result<u16> {
		Ok(self.get_reader().read_u16::<E>()?)
	}

	fn read_i32(&mut self) -> Result<i32> {
		Ok(self.get_reader().read_i32::<E>()?)
	}

	fn read_i64(&mut self) -> Result<i64> {
		Ok(self.get_reader().read_i64::<E>()?)
	}

	fn read_f32(&mut self) -> Result<f32> {
		Ok(self.get_reader().read_f32::<E>()?)
	}

	fn read_f64(&mut self) -> Result<f64> {
		Ok(self.get_reader().read_f64::<E>()?)
	}

	/// Reads `length` raw bytes.
	///
	/// Fails without allocating if fewer than `length` bytes remain.
	fn read_blob(&mut self, length: u64) -> Result<Blob> {
		let remaining = self.remaining();
		ensure!(
			length <= remaining,
			"cannot read {length} bytes, only {remaining} remaining"
		);
		let mut blob = Blob::new_sized(length as usize);
		self.get_reader().read_exact(blob.as_mut_slice())?;
		Ok(blob)
	}

	/// Reads a string of `length` bytes in Java's modified UTF-8.
	///
	/// NUL is encoded as `C0 80` and characters outside the BMP as surrogate pairs.
	fn read_string(&mut self, length: u64) -> Result<String> {
		let blob = self.read_blob(length)?;
		Ok(from_java_cesu8(blob.as_slice())
			.context("invalid modified UTF-8 string")?
			.into_owned())
	}
}

use super::ValueWriter;
use anyhow::Result;
use byteorder::{BigEndian, ByteOrder};
use mcmap_core::Blob;
use std::io::{Cursor, Write};
use std::marker::PhantomData;

/// A [`ValueWriter`] collecting into an in-memory [`Blob`].
///
/// ```rust
/// use mcmap_container::io::{ValueWriter, ValueWriterBlob};
///
/// let mut writer = ValueWriterBlob::new_be();
/// writer.write_i16(-2).unwrap();
/// assert_eq!(writer.into_blob().as_slice(), &[0xFF, 0xFE]);
/// ```
pub struct ValueWriterBlob<E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<Vec<u8>>,
}

impl<E: ByteOrder> ValueWriterBlob<E> {
	#[must_use]
	pub fn new() -> ValueWriterBlob<E> {
		ValueWriterBlob {
			_phantom: PhantomData,
			cursor: Cursor::new(Vec::new()),
		}
	}

	#[must_use]
	pub fn into_blob(self) -> Blob {
		Blob::from(self.cursor.into_inner())
	}
}

impl ValueWriterBlob<BigEndian> {
	#[must_use]
	pub fn new_be() -> ValueWriterBlob<BigEndian> {
		ValueWriterBlob::new()
	}
}

impl<E: ByteOrder> ValueWriter<E> for ValueWriterBlob<E> {
	fn get_writer(&mut self) -> &mut dyn Write {
		&mut self.cursor
	}

	fn position(&mut self) -> Result<u64> {
		Ok(self.cursor.position())
	}
}

impl<E: ByteOrder> Default for ValueWriterBlob<E> {
	fn default() -> Self {
		Self::new()
	}
}

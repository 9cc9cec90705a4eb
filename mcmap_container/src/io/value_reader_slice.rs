use super::{SeekRead, ValueReader};
use byteorder::{BigEndian, ByteOrder};
use std::{io::Cursor, marker::PhantomData};

/// A [`ValueReader`] over a borrowed byte slice.
pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}
}

impl<'a> ValueReaderSlice<'a, BigEndian> {
	#[must_use]
	pub fn new_be(slice: &'a [u8]) -> ValueReaderSlice<'a, BigEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl SeekRead for Cursor<&[u8]> {}

impl<'a, E: ByteOrder + 'a> ValueReader<'a, E> for ValueReaderSlice<'a, E> {
	fn get_reader(&mut self) -> &mut dyn SeekRead {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;

	#[test]
	fn reads_big_endian_values() -> Result<()> {
		let data = [
			0x7F, 0xFF, 0xFE, 0x00, 0x00, 0x01, 0x00, 0x3F, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
			0x2A,
		];
		let mut reader = ValueReaderSlice::new_be(&data);
		assert_eq!(reader.read_i8()?, 127);
		assert_eq!(reader.read_i16()?, -2);
		assert_eq!(reader.read_i32()?, 256);
		assert_eq!(reader.read_f32()?, 1.0);
		assert_eq!(reader.read_i64()?, 42);
		assert_eq!(reader.remaining(), 0);
		Ok(())
	}

	#[test]
	fn reads_strings_and_blobs() -> Result<()> {
		let mut reader = ValueReaderSlice::new_be(b"colors\x01\x02");
		assert_eq!(reader.read_string(6)?, "colors");
		assert_eq!(reader.read_blob(2)?.as_slice(), &[1, 2]);
		assert!(!reader.has_remaining());
		Ok(())
	}

	#[test]
	fn rejects_reads_past_the_end() {
		let mut reader = ValueReaderSlice::new_be(&[0x00, 0x01]);
		assert_eq!(
			reader.read_blob(3).unwrap_err().to_string(),
			"cannot read 3 bytes, only 2 remaining"
		);
		assert!(reader.read_i32().is_err());
	}

	#[test]
	fn reads_modified_utf8() -> Result<()> {
		let mut reader = ValueReaderSlice::new_be(&[0x61, 0xC0, 0x80, 0x62, 0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80]);
		assert_eq!(reader.read_string(4)?, "a\0b");
		assert_eq!(reader.read_string(6)?, "\u{1F600}");
		Ok(())
	}

	#[test]
	fn rejects_invalid_utf8() {
		let mut reader = ValueReaderSlice::new_be(&[0xC3, 0x28]);
		assert!(reader.read_string(2).is_err());
		// four-byte sequences are not part of modified UTF-8
		let mut reader = ValueReaderSlice::new_be(&[0xF0, 0x9F, 0x98, 0x80]);
		assert!(reader.read_string(4).is_err());
	}
}

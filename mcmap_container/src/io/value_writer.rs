//! The `ValueWriter` trait: typed writes of fixed-width values in a chosen byte order.

use anyhow::Result;
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// Writes values to a destination with byte order `E`.
pub trait ValueWriter<E: ByteOrder> {
	/// Returns the underlying writer.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Current write position.
	fn position(&mut self) -> Result<u64>;

	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	fn write_i8(&mut self, value: i8) -> Result<()> {
		Ok(self.get_writer().write_i8(value)?)
	}

	fn write_u8(&mut self, value: u8) -> Result<()> {
		Ok(self.get_writer().write_u8(value)?)
	}

	fn write_i16(&mut self, value: i16) -> Result<()> {
		Ok(self.get_writer().write_i16::<E>(value)?)
	}

	fn write_u16(&mut self, value: u16) -> Result<()> {
		Ok(self.get_writer().write_u16::<E>(value)?)
	}

	fn write_i32(&mut self, value: i32) -> Result<()> {
		Ok(self.get_writer().write_i32::<E>(value)?)
	}

	fn write_i64(&mut self, value: i64) -> Result<()> {
		Ok(self.get_writer().write_i64::<E>(value)?)
	}

	fn write_f32(&mut self, value: f32) -> Result<()> {
		Ok(self.get_writer().write_f32::<E>(value)?)
	}

	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		Ok(self.get_writer().write_all(buf)?)
	}
}

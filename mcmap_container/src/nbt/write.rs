use super::{Compound, Tag, TagType};
use crate::io::{ValueWriter, ValueWriterBlob};
use anyhow::{Context, Result};
use byteorder::BigEndian;
use cesu8::to_java_cesu8;
use mcmap_core::Blob;

/// Serializes a named root compound into an uncompressed NBT blob.
pub fn write_root(name: &str, root: &Compound) -> Result<Blob> {
	let mut writer = ValueWriterBlob::new_be();
	writer.write_u8(TagType::Compound.id())?;
	write_string(&mut writer, name).context("writing root tag name")?;
	write_compound(&mut writer, root).with_context(|| format!("writing root compound '{name}'"))?;
	Ok(writer.into_blob())
}

/// Writes a u16-prefixed string in Java's modified UTF-8; the prefix counts encoded bytes.
fn write_string(writer: &mut impl ValueWriter<BigEndian>, value: &str) -> Result<()> {
	let bytes = to_java_cesu8(value);
	let length = u16::try_from(bytes.len()).with_context(|| format!("string of {} bytes is too long", bytes.len()))?;
	writer.write_u16(length)?;
	writer.write_slice(&bytes)
}

fn write_length(writer: &mut impl ValueWriter<BigEndian>, length: usize) -> Result<()> {
	let length = i32::try_from(length).with_context(|| format!("{length} elements are too many"))?;
	writer.write_i32(length)
}

fn write_compound(writer: &mut impl ValueWriter<BigEndian>, compound: &Compound) -> Result<()> {
	for (name, tag) in compound.iter() {
		writer.write_u8(tag.tag_type().id())?;
		write_string(writer, name)?;
		write_payload(writer, tag).with_context(|| format!("writing {} '{name}'", tag.tag_type()))?;
	}
	writer.write_u8(TagType::End.id())
}

fn write_payload(writer: &mut impl ValueWriter<BigEndian>, tag: &Tag) -> Result<()> {
	match tag {
		Tag::Byte(v) => writer.write_i8(*v),
		Tag::Short(v) => writer.write_i16(*v),
		Tag::Int(v) => writer.write_i32(*v),
		Tag::Long(v) => writer.write_i64(*v),
		Tag::Float(v) => writer.write_f32(*v),
		Tag::Double(v) => writer.write_f64(*v),
		Tag::ByteArray(v) => {
			write_length(writer, v.len())?;
			writer.write_slice(v)
		}
		Tag::String(v) => write_string(writer, v),
		Tag::List(list) => {
			writer.write_u8(list.element_type().id())?;
			write_length(writer, list.len())?;
			for item in list.iter() {
				write_payload(writer, item)?;
			}
			Ok(())
		}
		Tag::Compound(compound) => write_compound(writer, compound),
		Tag::IntArray(v) => {
			write_length(writer, v.len())?;
			v.iter().try_for_each(|value| writer.write_i32(*value))
		}
		Tag::LongArray(v) => {
			write_length(writer, v.len())?;
			v.iter().try_for_each(|value| writer.write_i64(*value))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::{List, read_root};
	use super::*;
	use pretty_assertions::assert_eq;

	fn every_tag_type() -> Compound {
		let nested: Compound = [("inner", Tag::Byte(-1))].into_iter().collect();
		[
			("byte", Tag::Byte(-128)),
			("short", Tag::Short(-300)),
			("int", Tag::Int(123_456)),
			("long", Tag::Long(-9_000_000_000)),
			("float", Tag::Float(0.5)),
			("double", Tag::Double(-2.25)),
			("bytes", Tag::ByteArray(vec![0, 127, 128, 255])),
			("string", Tag::String("minecraft:the_nether".into())),
			("list", Tag::List(List::from_tags(vec![Tag::Short(1), Tag::Short(2)]).unwrap())),
			("empty", Tag::List(List::new(TagType::Compound))),
			("compound", Tag::Compound(nested)),
			("ints", Tag::IntArray(vec![i32::MIN, 0, i32::MAX])),
			("longs", Tag::LongArray(vec![i64::MIN, i64::MAX])),
		]
		.into_iter()
		.collect()
	}

	#[test]
	fn writes_named_root() -> Result<()> {
		let root: Compound = [("n", Tag::Short(300))].into_iter().collect();
		assert_eq!(
			write_root("hi", &root)?.into_vec(),
			vec![10, 0, 2, b'h', b'i', 2, 0, 1, b'n', 0x01, 0x2C, 0]
		);
		Ok(())
	}

	#[test]
	fn every_tag_type_survives_a_round_trip() -> Result<()> {
		let root = every_tag_type();
		let blob = write_root("", &root)?;
		let (name, decoded) = read_root(&blob)?;
		assert_eq!(name, "");
		assert_eq!(decoded, root);
		assert_eq!(write_root("", &decoded)?, blob);
		Ok(())
	}

	#[test]
	fn writes_modified_utf8_strings() -> Result<()> {
		let root: Compound = [("n", Tag::String("a\0b\u{1F600}".into()))].into_iter().collect();
		let blob = write_root("", &root)?;
		assert_eq!(
			blob.into_vec(),
			vec![
				10, 0, 0, 8, 0, 1, b'n', 0, 10, 0x61, 0xC0, 0x80, 0x62, 0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80, 0
			]
		);
		Ok(())
	}

	#[test]
	fn modified_utf8_strings_survive_a_round_trip() -> Result<()> {
		let banner: Compound = [("Name", Tag::String("\u{1F3F3}\0flag".into()))].into_iter().collect();
		let root: Compound = [
			("banners", Tag::List(List::from_tags(vec![Tag::Compound(banner)])?)),
			("\u{1F5FA}", Tag::Byte(1)),
		]
		.into_iter()
		.collect();
		let blob = write_root("", &root)?;
		let (_, decoded) = read_root(&blob)?;
		assert_eq!(decoded, root);
		assert_eq!(write_root("", &decoded)?, blob);
		Ok(())
	}

	#[test]
	fn string_length_counts_encoded_bytes() {
		// 12000 emoji fit as 48000 UTF-8 bytes, but take 72000 bytes in modified UTF-8
		let root: Compound = [("s", Tag::String("\u{1F600}".repeat(12_000)))].into_iter().collect();
		let error = format!("{:#}", write_root("", &root).unwrap_err());
		assert!(error.contains("string of 72000 bytes is too long"), "{error}");
	}

	#[test]
	fn rejects_overlong_strings() {
		let root: Compound = [("s", Tag::String("x".repeat(70_000)))].into_iter().collect();
		let error = format!("{:#}", write_root("", &root).unwrap_err());
		assert!(error.contains("string of 70000 bytes is too long"), "{error}");
	}
}

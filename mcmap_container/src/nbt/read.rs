use super::{Compound, List, Tag, TagType};
use crate::io::{ValueReader, ValueReaderSlice};
use anyhow::{Context, Result, bail, ensure};
use byteorder::BigEndian;
use log::debug;
use mcmap_core::Blob;

/// Nesting limit for lists and compounds.
pub const MAX_DEPTH: usize = 512;

/// Parses an uncompressed NBT blob into the name and contents of its root compound.
pub fn read_root(blob: &Blob) -> Result<(String, Compound)> {
	let mut reader = ValueReaderSlice::new_be(blob.as_slice());

	let tag_type = TagType::try_from_id(reader.read_u8().context("reading root tag type")?)?;
	ensure!(
		tag_type == TagType::Compound,
		"root tag must be a {}, found {tag_type}",
		TagType::Compound
	);
	let name = read_string(&mut reader).context("reading root tag name")?;
	let root = read_compound(&mut reader, 1).with_context(|| format!("reading root compound '{name}'"))?;

	if reader.has_remaining() {
		debug!("ignoring {} trailing bytes after the root compound", reader.remaining());
	}

	Ok((name, root))
}

fn read_string<'a>(reader: &mut impl ValueReader<'a, BigEndian>) -> Result<String> {
	let length = reader.read_u16()?;
	reader.read_string(u64::from(length))
}

/// Reads an array length and checks that `length * element_size` bytes are left.
fn read_length<'a>(reader: &mut impl ValueReader<'a, BigEndian>, element_size: u64) -> Result<usize> {
	let length = reader.read_i32()?;
	ensure!(length >= 0, "negative length {length}");
	let bytes = length as u64 * element_size;
	let remaining = reader.remaining();
	ensure!(
		bytes <= remaining,
		"length {length} needs at least {bytes} bytes, only {remaining} remaining"
	);
	Ok(length as usize)
}

fn read_compound<'a>(reader: &mut impl ValueReader<'a, BigEndian>, depth: usize) -> Result<Compound> {
	let mut compound = Compound::new();
	loop {
		let tag_type = TagType::try_from_id(reader.read_u8()?)?;
		if tag_type == TagType::End {
			return Ok(compound);
		}
		let name = read_string(reader)?;
		let tag = read_payload(reader, tag_type, depth).with_context(|| format!("reading {tag_type} '{name}'"))?;
		compound.insert(&name, tag);
	}
}

fn read_payload<'a>(reader: &mut impl ValueReader<'a, BigEndian>, tag_type: TagType, depth: usize) -> Result<Tag> {
	Ok(match tag_type {
		TagType::End => bail!("unexpected {tag_type}"),
		TagType::Byte => Tag::Byte(reader.read_i8()?),
		TagType::Short => Tag::Short(reader.read_i16()?),
		TagType::Int => Tag::Int(reader.read_i32()?),
		TagType::Long => Tag::Long(reader.read_i64()?),
		TagType::Float => Tag::Float(reader.read_f32()?),
		TagType::Double => Tag::Double(reader.read_f64()?),
		TagType::ByteArray => {
			let length = read_length(reader, 1)?;
			Tag::ByteArray(reader.read_blob(length as u64)?.into_vec())
		}
		TagType::String => Tag::String(read_string(reader)?),
		TagType::List => {
			ensure!(depth < MAX_DEPTH, "nesting deeper than {MAX_DEPTH} levels");
			let element_type = TagType::try_from_id(reader.read_u8()?)?;
			let length = read_length(reader, 0)?;
			let mut list = List::new(element_type);
			for index in 0..length {
				let item = read_payload(reader, element_type, depth + 1)
					.with_context(|| format!("reading list item {index}"))?;
				list.push(item)?;
			}
			Tag::List(list)
		}
		TagType::Compound => {
			ensure!(depth < MAX_DEPTH, "nesting deeper than {MAX_DEPTH} levels");
			Tag::Compound(read_compound(reader, depth + 1)?)
		}
		TagType::IntArray => {
			let length = read_length(reader, 4)?;
			Tag::IntArray((0..length).map(|_| reader.read_i32()).collect::<Result<_>>()?)
		}
		TagType::LongArray => {
			let length = read_length(reader, 8)?;
			Tag::LongArray((0..length).map(|_| reader.read_i64()).collect::<Result<_>>()?)
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_named_root() -> Result<()> {
		// TAG_Compound "hi" { TAG_Short "n": 300, TAG_String "s": "ok" }
		let blob = Blob::from(&[
			10, 0, 2, b'h', b'i', 2, 0, 1, b'n', 0x01, 0x2C, 8, 0, 1, b's', 0, 2, b'o', b'k', 0,
		]);
		let (name, root) = read_root(&blob)?;
		assert_eq!(name, "hi");
		assert_eq!(root.get("n"), Some(&Tag::Short(300)));
		assert_eq!(root.get("s"), Some(&Tag::String("ok".into())));
		assert_eq!(root.len(), 2);
		Ok(())
	}

	#[test]
	fn reads_modified_utf8_strings() -> Result<()> {
		// TAG_String "n": "a\0b", TAG_String "e": U+1F600 as a surrogate pair
		let blob = Blob::from(&[
			10, 0, 0, 8, 0, 1, b'n', 0, 4, 0x61, 0xC0, 0x80, 0x62, 8, 0, 1, b'e', 0, 6, 0xED, 0xA0, 0xBD, 0xED,
			0xB8, 0x80, 0,
		]);
		let (_, root) = read_root(&blob)?;
		assert_eq!(root.get("n"), Some(&Tag::String("a\0b".into())));
		assert_eq!(root.get("e"), Some(&Tag::String("\u{1F600}".into())));
		Ok(())
	}

	#[test]
	fn reads_empty_list_with_declared_type() -> Result<()> {
		let blob = Blob::from(&[10, 0, 0, 9, 0, 1, b'l', 3, 0, 0, 0, 0, 0]);
		let (_, root) = read_root(&blob)?;
		let Some(Tag::List(list)) = root.get("l") else {
			panic!("expected a list")
		};
		assert!(list.is_empty());
		assert_eq!(list.element_type(), TagType::Int);
		Ok(())
	}

	#[test]
	fn rejects_non_compound_root() {
		let blob = Blob::from(&[1, 0, 0, 5]);
		assert_eq!(
			read_root(&blob).unwrap_err().to_string(),
			"root tag must be a TAG_Compound, found TAG_Byte"
		);
	}

	#[test]
	fn rejects_unknown_tag_type() {
		let blob = Blob::from(&[10, 0, 0, 42, 0, 0]);
		let error = read_root(&blob).unwrap_err();
		assert_eq!(format!("{:#}", error), "reading root compound '': Unknown NBT tag type: 42");
	}

	#[test]
	fn rejects_oversized_arrays() {
		// byte array claiming 1000 bytes with only 2 available
		let blob = Blob::from(&[10, 0, 0, 7, 0, 1, b'c', 0, 0, 0x03, 0xE8, 1, 2]);
		let error = format!("{:#}", read_root(&blob).unwrap_err());
		assert!(error.contains("length 1000 needs at least 1000 bytes, only 2 remaining"), "{error}");
	}

	#[test]
	fn rejects_negative_lengths() {
		let blob = Blob::from(&[10, 0, 0, 11, 0, 1, b'a', 0xFF, 0xFF, 0xFF, 0xFF, 0]);
		let error = format!("{:#}", read_root(&blob).unwrap_err());
		assert!(error.contains("negative length -1"), "{error}");
	}

	#[test]
	fn rejects_truncated_input() {
		let blob = Blob::from(&[10, 0, 0, 3, 0, 1, b'i', 0, 0]);
		assert!(read_root(&blob).is_err());
		assert!(read_root(&Blob::new_empty()).is_err());
	}

	#[test]
	fn rejects_excessive_nesting() {
		let mut bytes = vec![10, 0, 0];
		for _ in 0..MAX_DEPTH {
			bytes.extend_from_slice(&[10, 0, 0]);
		}
		bytes.extend(std::iter::repeat_n(0, MAX_DEPTH + 1));
		let error = format!("{:#}", read_root(&Blob::from(bytes)).unwrap_err());
		assert!(error.contains("nesting deeper than 512 levels"), "{error}");
	}
}

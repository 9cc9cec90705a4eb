//! Reading and writing Minecraft `map_<n>.dat` files.
//!
//! A map file is an NBT tree whose root compound holds a `data` compound with the map fields.
//! [`MapFile`] keeps the whole tree, so tags it does not know about are written back untouched.
//!
//! ```rust
//! use mcmap_container::MapFile;
//! use mcmap_core::TileDocument;
//!
//! let mut document = TileDocument::default();
//! document.set_point(0, 0, 5).unwrap();
//!
//! let blob = MapFile::from_document(&document).unwrap().to_blob().unwrap();
//! assert!(blob.starts_with(&[0x1f, 0x8b]));
//!
//! let map = MapFile::from_blob(blob).unwrap();
//! assert_eq!(map.to_document().unwrap(), document);
//! ```

use crate::{
	compression::{compress_gzip, decompress_auto},
	nbt::{Compound, Nbt, Tag, TagType},
};
use anyhow::{Context, Result, bail};
use log::{debug, info};
use mcmap_core::{Blob, TileDocument};
use std::path::Path;

const DATA: &str = "data";
const DEFAULT_SIZE: u16 = 128;

/// A map file: the full NBT tree plus whether it is stored gzip-compressed.
#[derive(Clone, Debug, PartialEq)]
pub struct MapFile {
	nbt: Nbt,
	compressed: bool,
}

impl MapFile {
	/// Builds a new gzip-compressed map file holding `document`.
	pub fn from_document(document: &TileDocument) -> Result<MapFile> {
		let mut map = MapFile {
			nbt: Nbt::default(),
			compressed: true,
		};
		map.write_fields(document, true)?;
		Ok(map)
	}

	/// Parses a map file; gzip compression is detected from the magic bytes.
	pub fn from_blob(blob: Blob) -> Result<MapFile> {
		let (blob, compressed) = decompress_auto(blob)?;
		let nbt = Nbt::from_blob(&blob)?;
		if !nbt.root.get(DATA).is_some_and(|tag| tag.as_compound().is_some()) {
			bail!("map file has no '{DATA}' compound");
		}
		debug!("parsed map file with {} root tags, compressed: {compressed}", nbt.root.len());
		Ok(MapFile { nbt, compressed })
	}

	pub fn open_path(path: &Path) -> Result<MapFile> {
		info!("reading map file {path:?}");
		let blob = Blob::load_from_file(path)?;
		MapFile::from_blob(blob).with_context(|| format!("parsing map file {path:?}"))
	}

	/// Serializes the tree, gzip-compressed unless compression was switched off.
	pub fn to_blob(&self) -> Result<Blob> {
		let blob = self.nbt.to_blob()?;
		if self.compressed { compress_gzip(&blob) } else { Ok(blob) }
	}

	pub fn write_path(&self, path: &Path) -> Result<()> {
		info!("writing map file {path:?}");
		self.to_blob()?.save_to_file(path)
	}

	#[must_use]
	pub fn is_compressed(&self) -> bool {
		self.compressed
	}

	pub fn set_compressed(&mut self, compressed: bool) {
		self.compressed = compressed;
	}

	#[must_use]
	pub fn nbt(&self) -> &Nbt {
		&self.nbt
	}

	fn data(&self) -> Result<&Compound> {
		self
			.nbt
			.root
			.get(DATA)
			.and_then(Tag::as_compound)
			.with_context(|| format!("map file has no '{DATA}' compound"))
	}

	/// The dimension as stored: a number in older files, a resource name in newer ones.
	pub fn dimension(&self) -> Result<String> {
		Ok(match self.data()?.get("dimension") {
			None => String::from("0"),
			Some(Tag::Byte(v)) => v.to_string(),
			Some(Tag::Int(v)) => v.to_string(),
			Some(Tag::String(v)) => v.clone(),
			Some(tag) => bail!("field 'dimension' is a {}", tag.tag_type()),
		})
	}

	/// Extracts the map fields.
	///
	/// Missing fields take the [`TileDocument`] defaults; fields of the wrong type are an error.
	pub fn to_document(&self) -> Result<TileDocument> {
		let data = self.data()?;

		let width = read_size(data, "width")?;
		let height = read_size(data, "height")?;
		let mut document = TileDocument::new(width, height);

		if let Some(colors) = field(data, "colors", TagType::ByteArray, Tag::as_byte_array)? {
			document
				.set_colors(colors.to_vec())
				.context("reading field 'colors'")?;
		}
		if let Some(x_center) = field(data, "xCenter", TagType::Int, Tag::as_int)? {
			document.x_center = x_center;
		}
		if let Some(z_center) = field(data, "zCenter", TagType::Int, Tag::as_int)? {
			document.z_center = z_center;
		}
		if let Some(scale) = field(data, "scale", TagType::Byte, Tag::as_byte)? {
			document.zoom_level = u8::try_from(scale).with_context(|| format!("field 'scale' is negative: {scale}"))?;
		}
		if let Some(Tag::Byte(dimension)) = data.get("dimension") {
			document.dimension = *dimension;
		}
		if let Some(tracking_position) = field(data, "trackingPosition", TagType::Byte, Tag::as_byte)? {
			document.tracking_position = tracking_position;
		}

		Ok(document)
	}

	/// Writes the fields of `document` into the tree and leaves every other tag as it was.
	///
	/// `width` and `height` are only added when the file already has them or the map is not
	/// 128x128. A `dimension` stored as a resource name is kept.
	pub fn update(&mut self, document: &TileDocument) -> Result<()> {
		self.write_fields(document, false)
	}

	fn write_fields(&mut self, document: &TileDocument, with_size: bool) -> Result<()> {
		let root = &mut self.nbt.root;
		if root.get(DATA).and_then(Tag::as_compound).is_none() {
			root.insert(DATA, Tag::Compound(Compound::new()));
		}
		let Some(data) = root.get_mut(DATA).and_then(Tag::as_compound_mut) else {
			bail!("map file has no '{DATA}' compound");
		};

		data.insert("zCenter", Tag::Int(document.z_center));
		data.insert("trackingPosition", Tag::Byte(document.tracking_position));
		write_size(data, "width", document.width(), with_size)?;
		data.insert(
			"scale",
			Tag::Byte(i8::try_from(document.zoom_level).context("zoom level does not fit into a byte")?),
		);
		if matches!(data.get("dimension"), None | Some(Tag::Byte(_))) {
			data.insert("dimension", Tag::Byte(document.dimension));
		}
		data.insert("xCenter", Tag::Int(document.x_center));
		data.insert("colors", Tag::ByteArray(document.colors().to_vec()));
		write_size(data, "height", document.height(), with_size)?;

		debug!("updated map data for a {}x{} map", document.width(), document.height());
		Ok(())
	}
}

/// Returns a typed field, `None` if it is missing.
fn field<'a, T>(
	data: &'a Compound,
	name: &str,
	expected: TagType,
	extract: impl Fn(&'a Tag) -> Option<T>,
) -> Result<Option<T>> {
	match data.get(name) {
		None => Ok(None),
		Some(tag) => match extract(tag) {
			Some(value) => Ok(Some(value)),
			None => bail!("field '{name}' is a {}, expected a {expected}", tag.tag_type()),
		},
	}
}

fn read_size(data: &Compound, name: &str) -> Result<u16> {
	match field(data, name, TagType::Short, Tag::as_short)? {
		None => Ok(DEFAULT_SIZE),
		Some(size) => u16::try_from(size).with_context(|| format!("field '{name}' is negative: {size}")),
	}
}

fn write_size(data: &mut Compound, name: &str, size: u16, force: bool) -> Result<()> {
	if force || data.contains_key(name) || size != DEFAULT_SIZE {
		let size = i16::try_from(size).with_context(|| format!("{name} {size} does not fit into a short"))?;
		data.insert(name, Tag::Short(size));
	}
	Ok(())
}

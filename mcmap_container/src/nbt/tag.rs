//! The NBT value model: [`TagType`], [`Tag`], typed [`List`]s and ordered [`Compound`]s.

use anyhow::{Result, bail, ensure};
use std::fmt::{Display, Formatter};

/// The type id written in front of every NBT value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagType {
	End,
	Byte,
	Short,
	Int,
	Long,
	Float,
	Double,
	ByteArray,
	String,
	List,
	Compound,
	IntArray,
	LongArray,
}

impl TagType {
	#[must_use]
	pub fn id(&self) -> u8 {
		match self {
			TagType::End => 0,
			TagType::Byte => 1,
			TagType::Short => 2,
			TagType::Int => 3,
			TagType::Long => 4,
			TagType::Float => 5,
			TagType::Double => 6,
			TagType::ByteArray => 7,
			TagType::String => 8,
			TagType::List => 9,
			TagType::Compound => 10,
			TagType::IntArray => 11,
			TagType::LongArray => 12,
		}
	}

	pub fn try_from_id(id: u8) -> Result<Self> {
		Ok(match id {
			0 => TagType::End,
			1 => TagType::Byte,
			2 => TagType::Short,
			3 => TagType::Int,
			4 => TagType::Long,
			5 => TagType::Float,
			6 => TagType::Double,
			7 => TagType::ByteArray,
			8 => TagType::String,
			9 => TagType::List,
			10 => TagType::Compound,
			11 => TagType::IntArray,
			12 => TagType::LongArray,
			_ => bail!("Unknown NBT tag type: {id}"),
		})
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			TagType::End => "TAG_End",
			TagType::Byte => "TAG_Byte",
			TagType::Short => "TAG_Short",
			TagType::Int => "TAG_Int",
			TagType::Long => "TAG_Long",
			TagType::Float => "TAG_Float",
			TagType::Double => "TAG_Double",
			TagType::ByteArray => "TAG_Byte_Array",
			TagType::String => "TAG_String",
			TagType::List => "TAG_List",
			TagType::Compound => "TAG_Compound",
			TagType::IntArray => "TAG_Int_Array",
			TagType::LongArray => "TAG_Long_Array",
		}
	}
}

impl Display for TagType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One NBT value.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
	Byte(i8),
	Short(i16),
	Int(i32),
	Long(i64),
	Float(f32),
	Double(f64),
	ByteArray(Vec<u8>),
	String(String),
	List(List),
	Compound(Compound),
	IntArray(Vec<i32>),
	LongArray(Vec<i64>),
}

impl Tag {
	#[must_use]
	pub fn tag_type(&self) -> TagType {
		match self {
			Tag::Byte(_) => TagType::Byte,
			Tag::Short(_) => TagType::Short,
			Tag::Int(_) => TagType::Int,
			Tag::Long(_) => TagType::Long,
			Tag::Float(_) => TagType::Float,
			Tag::Double(_) => TagType::Double,
			Tag::ByteArray(_) => TagType::ByteArray,
			Tag::String(_) => TagType::String,
			Tag::List(_) => TagType::List,
			Tag::Compound(_) => TagType::Compound,
			Tag::IntArray(_) => TagType::IntArray,
			Tag::LongArray(_) => TagType::LongArray,
		}
	}

	#[must_use]
	pub fn as_byte(&self) -> Option<i8> {
		match self {
			Tag::Byte(v) => Some(*v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_short(&self) -> Option<i16> {
		match self {
			Tag::Short(v) => Some(*v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_int(&self) -> Option<i32> {
		match self {
			Tag::Int(v) => Some(*v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_byte_array(&self) -> Option<&[u8]> {
		match self {
			Tag::ByteArray(v) => Some(v.as_slice()),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Tag::String(v) => Some(v.as_str()),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_compound(&self) -> Option<&Compound> {
		match self {
			Tag::Compound(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
		match self {
			Tag::Compound(v) => Some(v),
			_ => None,
		}
	}
}

/// A homogeneous list of tags.
///
/// Empty lists keep their declared element type so they are written back as they were read.
#[derive(Clone, Debug, PartialEq)]
pub struct List {
	element_type: TagType,
	items: Vec<Tag>,
}

impl List {
	#[must_use]
	pub fn new(element_type: TagType) -> List {
		List {
			element_type,
			items: Vec::new(),
		}
	}

	/// Builds a list from tags that must all share one type; an empty input yields a
	/// `TAG_End` list.
	pub fn from_tags(items: Vec<Tag>) -> Result<List> {
		let mut list = List::new(items.first().map_or(TagType::End, Tag::tag_type));
		for item in items {
			list.push(item)?;
		}
		Ok(list)
	}

	pub fn push(&mut self, item: Tag) -> Result<()> {
		if self.items.is_empty() && self.element_type == TagType::End {
			self.element_type = item.tag_type();
		}
		ensure!(
			item.tag_type() == self.element_type,
			"cannot add {} to a list of {}",
			item.tag_type(),
			self.element_type
		);
		self.items.push(item);
		Ok(())
	}

	#[must_use]
	pub fn element_type(&self) -> TagType {
		self.element_type
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Tag> {
		self.items.iter()
	}
}

/// Named tags in insertion order.
///
/// Order is kept so that rewriting a file only changes the values that were updated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Compound {
	entries: Vec<(String, Tag)>,
}

impl Compound {
	#[must_use]
	pub fn new() -> Compound {
		Compound::default()
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&Tag> {
		self.entries.iter().find(|(key, _)| key == name).map(|(_, tag)| tag)
	}

	pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
		self.entries.iter_mut().find(|(key, _)| key == name).map(|(_, tag)| tag)
	}

	#[must_use]
	pub fn contains_key(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Inserts a tag, replacing an existing tag of the same name in place.
	///
	/// Returns the replaced tag.
	pub fn insert(&mut self, name: &str, tag: Tag) -> Option<Tag> {
		match self.get_mut(name) {
			Some(existing) => Some(std::mem::replace(existing, tag)),
			None => {
				self.entries.push((name.to_string(), tag));
				None
			}
		}
	}

	pub fn remove(&mut self, name: &str) -> Option<Tag> {
		let position = self.entries.iter().position(|(key, _)| key == name)?;
		Some(self.entries.remove(position).1)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
		self.entries.iter().map(|(key, tag)| (key.as_str(), tag))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(key, _)| key.as_str())
	}
}

impl<S: Into<String>> FromIterator<(S, Tag)> for Compound {
	fn from_iter<T: IntoIterator<Item = (S, Tag)>>(iter: T) -> Self {
		let mut compound = Compound::new();
		for (name, tag) in iter {
			let name: String = name.into();
			compound.insert(&name, tag);
		}
		compound
	}
}

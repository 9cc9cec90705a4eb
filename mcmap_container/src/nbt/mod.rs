//! A self-contained NBT codec: big-endian named binary tags with a named root compound.
//!
//! ```rust
//! use mcmap_container::nbt::{Compound, Nbt, Tag};
//!
//! let mut root = Compound::new();
//! root.insert("scale", Tag::Byte(2));
//! let blob = Nbt::new("", root).to_blob().unwrap();
//!
//! let nbt = Nbt::from_blob(&blob).unwrap();
//! assert_eq!(nbt.root.get("scale"), Some(&Tag::Byte(2)));
//! ```

mod read;
mod tag;
mod write;

pub use read::*;
pub use tag::*;
pub use write::*;

use anyhow::Result;
use mcmap_core::Blob;

/// A parsed NBT file: the name of the root compound and its contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Nbt {
	pub name: String,
	pub root: Compound,
}

impl Nbt {
	#[must_use]
	pub fn new(name: &str, root: Compound) -> Nbt {
		Nbt {
			name: name.to_string(),
			root,
		}
	}

	/// Parses uncompressed NBT data.
	pub fn from_blob(blob: &Blob) -> Result<Nbt> {
		let (name, root) = read_root(blob)?;
		Ok(Nbt { name, root })
	}

	/// Serializes to uncompressed NBT data.
	pub fn to_blob(&self) -> Result<Blob> {
		write_root(&self.name, &self.root)
	}
}

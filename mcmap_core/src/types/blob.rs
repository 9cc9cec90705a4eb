//! This module provides the [`Blob`] struct, a wrapper around [`Vec<u8>`] used for raw file contents
//! (compressed or uncompressed NBT, encoded images).
//!
//! # Examples
//!
//! ```rust
//! use mcmap_core::Blob;
//!
//! let blob = Blob::from(vec![0x1f, 0x8b, 0x08]);
//! assert_eq!(blob.len(), 3);
//! assert!(blob.starts_with(&[0x1f, 0x8b]));
//! assert_eq!(blob.as_hex(), "1f 8b 08");
//! ```

use anyhow::{Context, Result};
use std::fmt::Debug;
use std::path::Path;

/// A simple wrapper around [`Vec<u8>`] that provides additional methods for working with byte data.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Creates a `Blob` with the specified size, filled with zeros.
	#[must_use]
	pub fn new_sized(length: usize) -> Blob {
		Blob(vec![0u8; length])
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	pub fn as_mut_slice(&mut self) -> &mut [u8] {
		self.0.as_mut()
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns `true` if the blob begins with `prefix`.
	#[must_use]
	pub fn starts_with(&self, prefix: &[u8]) -> bool {
		self.0.starts_with(prefix)
	}

	/// Returns the bytes as space separated lowercase hex pairs.
	#[must_use]
	pub fn as_hex(&self) -> String {
		self
			.0
			.iter()
			.map(|byte| format!("{byte:02x}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn save_to_file(&self, path: &Path) -> Result<()> {
		std::fs::write(path, &self.0).with_context(|| format!("Failed to write {}", path.display()))
	}

	pub fn load_from_file(path: &Path) -> Result<Self> {
		let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
		Ok(Blob::from(bytes))
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		const PREVIEW: usize = 16;
		let head = Blob::from(&self.0[..self.0.len().min(PREVIEW)]).as_hex();
		if self.0.len() > PREVIEW {
			write!(f, "Blob({}): {head} ...", self.0.len())
		} else {
			write!(f, "Blob({}): {head}", self.0.len())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_sized_is_zero_filled() {
		let blob = Blob::new_sized(4);
		assert_eq!(blob.as_slice(), &[0, 0, 0, 0]);
		assert!(!blob.is_empty());
		assert!(Blob::new_empty().is_empty());
	}

	#[test]
	fn debug_truncates_long_content() {
		let blob = Blob::from((0u8..20).collect::<Vec<u8>>());
		assert_eq!(
			format!("{blob:?}"),
			"Blob(20): 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f ..."
		);
		assert_eq!(format!("{:?}", Blob::from(&[1, 2])), "Blob(2): 01 02");
	}

	#[test]
	fn file_round_trip() -> Result<()> {
		let path = std::env::temp_dir().join(format!("mcmap_blob_{}.bin", std::process::id()));
		let blob = Blob::from(vec![9, 8, 7]);
		blob.save_to_file(&path)?;
		assert_eq!(Blob::load_from_file(&path)?, blob);
		std::fs::remove_file(&path)?;
		Ok(())
	}

	#[test]
	fn load_missing_file_reports_path() {
		let error = Blob::load_from_file(Path::new("/definitely/not/here.dat")).unwrap_err();
		assert!(error.to_string().contains("/definitely/not/here.dat"));
	}
}

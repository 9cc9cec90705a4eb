//! The raster file formats maps can be rendered to and imported from.
//!
//! ```rust
//! use mcmap_image::ImageFormat;
//! use std::path::Path;
//!
//! assert_eq!(ImageFormat::from_path(Path::new("map_12.PNG")).unwrap(), ImageFormat::PNG);
//! assert_eq!(ImageFormat::try_from_str("jpeg").unwrap(), ImageFormat::JPG);
//! assert!(ImageFormat::from_path(Path::new("map_12.dat")).is_err());
//! ```

use anyhow::{Context, Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use std::fmt::{Display, Formatter};
use std::path::Path;

#[allow(clippy::upper_case_acronyms)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImageFormat {
	BMP,
	JPG,
	PNG,
}

impl ImageFormat {
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			ImageFormat::BMP => "bmp",
			ImageFormat::JPG => "jpg",
			ImageFormat::PNG => "png",
		}
	}

	#[must_use]
	pub fn as_extension(&self) -> &str {
		match self {
			ImageFormat::BMP => ".bmp",
			ImageFormat::JPG => ".jpg",
			ImageFormat::PNG => ".png",
		}
	}

	/// Returns `true` if decoding an encoded image gives back the exact pixels.
	#[must_use]
	pub fn is_lossless(&self) -> bool {
		!matches!(self, ImageFormat::JPG)
	}

	pub fn try_from_str(value: &str) -> Result<Self> {
		Ok(match value.to_lowercase().trim() {
			"bmp" => ImageFormat::BMP,
			"jpeg" | "jpg" => ImageFormat::JPG,
			"png" => ImageFormat::PNG,
			_ => bail!("Unknown image format: '{}'", value),
		})
	}

	/// Detects the format from the file extension.
	pub fn from_path(path: &Path) -> Result<Self> {
		let extension = path
			.extension()
			.and_then(|e| e.to_str())
			.with_context(|| format!("{path:?} has no file extension"))?;
		ImageFormat::try_from_str(extension).with_context(|| format!("can not detect the image format of {path:?}"))
	}
}

impl Display for ImageFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("out.bmp", ImageFormat::BMP)]
	#[case("out.jpeg", ImageFormat::JPG)]
	#[case("dir.d/out.JPG", ImageFormat::JPG)]
	#[case("out.png", ImageFormat::PNG)]
	fn detects_format(#[case] path: &str, #[case] format: ImageFormat) {
		assert_eq!(ImageFormat::from_path(Path::new(path)).unwrap(), format);
	}

	#[rstest]
	#[case("out")]
	#[case("out.webp")]
	#[case("map.dat")]
	fn rejects_unknown(#[case] path: &str) {
		assert!(ImageFormat::from_path(Path::new(path)).is_err());
	}

	#[test]
	fn names() {
		assert_eq!(ImageFormat::PNG.to_string(), "png");
		assert_eq!(ImageFormat::BMP.as_extension(), ".bmp");
		assert!(ImageFormat::BMP.is_lossless());
		assert!(!ImageFormat::JPG.is_lossless());
	}
}

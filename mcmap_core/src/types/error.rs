use super::Rgb;
use std::fmt::{Display, Formatter};

/// Errors raised by the palette, the approximation engine and the tile document.
///
/// These are plain values so the hot per-pixel paths stay allocation free. Higher layers wrap
/// them into [`anyhow::Error`] with additional context; the original kind stays reachable via
/// `error.downcast_ref::<MapError>()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapError {
	/// The color has no palette index under the active approximation mode.
	ColorNotMappable { color: Rgb },
	/// No coarse bucket table was built for the requested resolution.
	LookupTableUnavailable { lookup_index: u8 },
	/// A buffer byte does not address one of the canonical palette entries.
	IndexOutOfPalette { index: u8 },
	/// A buffer write outside the buffer extent.
	OutOfBounds { index: usize, len: usize },
	/// Pixel mapping with a scale multiplier of zero (zoom level 0).
	DegenerateScale,
	/// A coordinate transform whose result does not fit into an `i64`.
	CoordinateOverflow,
}

impl Display for MapError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			MapError::ColorNotMappable { color } => write!(f, "could not map color {color} to a palette index"),
			MapError::LookupTableUnavailable { lookup_index } => {
				write!(f, "no bucket lookup table was built for resolution {lookup_index}")
			}
			MapError::IndexOutOfPalette { index } => write!(f, "byte {index} is not a palette index"),
			MapError::OutOfBounds { index, len } => write!(f, "index {index} is outside the buffer of length {len}"),
			MapError::DegenerateScale => write!(f, "scale multiplier is zero, pixels cannot be mapped"),
			MapError::CoordinateOverflow => write!(f, "coordinate is outside the representable range"),
		}
	}
}

impl std::error::Error for MapError {}

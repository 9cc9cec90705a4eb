use std::fmt::{Display, Formatter};

/// A pixel position on a map raster; `x` grows to the east, `y` to the south.
///
/// Signed, because world coordinates outside the map extent map to pixels outside the raster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelCoord {
	pub x: i64,
	pub y: i64,
}

impl PixelCoord {
	#[must_use]
	pub const fn new(x: i64, y: i64) -> PixelCoord {
		PixelCoord { x, y }
	}
}

impl Display for PixelCoord {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}]", self.x, self.y)
	}
}

/// A block position in the world; `x` grows to the east, `z` to the south.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WorldCoord {
	pub x: i64,
	pub z: i64,
}

impl WorldCoord {
	#[must_use]
	pub const fn new(x: i64, z: i64) -> WorldCoord {
		WorldCoord { x, z }
	}
}

impl Display for WorldCoord {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[x: {}, z: {}]", self.x, self.z)
	}
}

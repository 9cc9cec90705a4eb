use crate::{MapError, PixelCoord, WorldCoord};

/// Converts between world block coordinates and pixels of one map.
///
/// One pixel covers `scale_multiplier` blocks along each axis, and the world center of the map
/// sits on pixel `(width / 2, height / 2)`.
///
/// The mapping is lossy when `scale_multiplier > 1`: many world coordinates fall into the same
/// pixel. `to_pixel(to_coord(p)) == p` always holds, but `to_coord(to_pixel(c))` only returns
/// the north-west corner of the pixel that contains `c`.
///
/// ```rust
/// use mcmap_core::{CoordinateMapper, PixelCoord, WorldCoord};
///
/// let mapper = CoordinateMapper::new(128, 128, WorldCoord::new(64, 0), 2);
/// assert_eq!(mapper.to_pixel(WorldCoord::new(64, 0)).unwrap(), PixelCoord::new(64, 64));
/// assert_eq!(mapper.to_pixel(WorldCoord::new(60, -1)).unwrap(), PixelCoord::new(63, 63));
/// assert_eq!(mapper.to_coord(PixelCoord::new(63, 63)).unwrap(), WorldCoord::new(60, -4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateMapper {
	pixel_center: PixelCoord,
	center: WorldCoord,
	scale_multiplier: i64,
}

impl CoordinateMapper {
	/// Creates a mapper for a `width` x `height` map; the scale multiplier is `zoom_level²`.
	#[must_use]
	pub fn new(width: u16, height: u16, center: WorldCoord, zoom_level: u8) -> CoordinateMapper {
		CoordinateMapper {
			pixel_center: PixelCoord::new(i64::from(width) / 2, i64::from(height) / 2),
			center,
			scale_multiplier: i64::from(zoom_level) * i64::from(zoom_level),
		}
	}

	#[must_use]
	pub fn pixel_center(&self) -> PixelCoord {
		self.pixel_center
	}

	#[must_use]
	pub fn center(&self) -> WorldCoord {
		self.center
	}

	/// Blocks per pixel along each axis.
	#[must_use]
	pub fn scale_multiplier(&self) -> i64 {
		self.scale_multiplier
	}

	/// Returns the pixel containing the world coordinate.
	///
	/// Uses floor division, so coordinates west or north of the center round away from it.
	/// Fails with [`MapError::DegenerateScale`] for zoom level 0 and with
	/// [`MapError::CoordinateOverflow`] when the pixel does not fit into an `i64`.
	pub fn to_pixel(&self, world: WorldCoord) -> Result<PixelCoord, MapError> {
		if self.scale_multiplier == 0 {
			return Err(MapError::DegenerateScale);
		}
		Ok(PixelCoord::new(
			self.world_to_pixel(world.x, self.center.x, self.pixel_center.x)?,
			self.world_to_pixel(world.z, self.center.z, self.pixel_center.y)?,
		))
	}

	/// Returns the world coordinate of the north-west corner of a pixel.
	///
	/// Fails with [`MapError::CoordinateOverflow`] when the block does not fit into an `i64`.
	pub fn to_coord(&self, pixel: PixelCoord) -> Result<WorldCoord, MapError> {
		Ok(WorldCoord::new(
			self.pixel_to_world(pixel.x, self.pixel_center.x, self.center.x)?,
			self.pixel_to_world(pixel.y, self.pixel_center.y, self.center.z)?,
		))
	}

	fn world_to_pixel(&self, world: i64, center: i64, pixel_center: i64) -> Result<i64, MapError> {
		world
			.checked_sub(center)
			.map(|offset| offset.div_euclid(self.scale_multiplier))
			.and_then(|offset| offset.checked_add(pixel_center))
			.ok_or(MapError::CoordinateOverflow)
	}

	fn pixel_to_world(&self, pixel: i64, pixel_center: i64, center: i64) -> Result<i64, MapError> {
		pixel
			.checked_sub(pixel_center)
			.and_then(|offset| offset.checked_mul(self.scale_multiplier))
			.and_then(|offset| offset.checked_add(center))
			.ok_or(MapError::CoordinateOverflow)
	}
}

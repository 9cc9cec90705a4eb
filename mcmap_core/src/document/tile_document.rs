use super::CoordinateMapper;
use crate::{ApproximationEngine, ApproximationMode, MapError, Palette, PixelCoord, Rgb, WorldCoord};
use anyhow::{Context, Result, ensure};
use image::RgbImage;
use log::{debug, warn};
use rayon::prelude::*;

/// In-memory model of one map item.
///
/// Holds the map metadata and a row-major buffer of palette indices with
/// `index = x + y * width`. The buffer length always equals `width * height`.
///
/// `dimension` and `tracking_position` are not interpreted here; they are carried so a map file
/// can be written back unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDocument {
	width: u16,
	height: u16,
	pub x_center: i32,
	pub z_center: i32,
	pub zoom_level: u8,
	pub dimension: i8,
	pub tracking_position: i8,
	colors: Vec<u8>,
}

impl TileDocument {
	/// Creates a zero-filled document with the default metadata.
	#[must_use]
	pub fn new(width: u16, height: u16) -> TileDocument {
		TileDocument {
			width,
			height,
			x_center: 64,
			z_center: 0,
			zoom_level: 1,
			dimension: 0,
			tracking_position: 1,
			colors: vec![0; usize::from(width) * usize::from(height)],
		}
	}

	/// Creates a document from an existing index buffer.
	pub fn from_colors(width: u16, height: u16, colors: Vec<u8>) -> Result<TileDocument> {
		let mut document = TileDocument::new(width, height);
		document.set_colors(colors)?;
		Ok(document)
	}

	#[must_use]
	pub fn width(&self) -> u16 {
		self.width
	}

	#[must_use]
	pub fn height(&self) -> u16 {
		self.height
	}

	#[must_use]
	pub fn colors(&self) -> &[u8] {
		&self.colors
	}

	/// Replaces the index buffer; its length must be `width * height`.
	pub fn set_colors(&mut self, colors: Vec<u8>) -> Result<()> {
		ensure!(
			colors.len() == self.colors.len(),
			"color buffer has {} bytes, expected {} for a {}x{} map",
			colors.len(),
			self.colors.len(),
			self.width,
			self.height
		);
		self.colors = colors;
		Ok(())
	}

	#[must_use]
	pub fn center(&self) -> WorldCoord {
		WorldCoord::new(i64::from(self.x_center), i64::from(self.z_center))
	}

	/// Blocks per pixel along each axis, `zoom_level²`.
	#[must_use]
	pub fn scale_multiplier(&self) -> i64 {
		i64::from(self.zoom_level) * i64::from(self.zoom_level)
	}

	#[must_use]
	pub fn mapper(&self) -> CoordinateMapper {
		CoordinateMapper::new(self.width, self.height, self.center(), self.zoom_level)
	}

	#[must_use]
	pub fn get_byte(&self, index: usize) -> Option<u8> {
		self.colors.get(index).copied()
	}

	pub fn set_byte(&mut self, index: usize, value: u8) -> Result<(), MapError> {
		let len = self.colors.len();
		let slot = self.colors.get_mut(index).ok_or(MapError::OutOfBounds { index, len })?;
		*slot = value;
		Ok(())
	}

	/// Reads the index at `(x, y)`.
	///
	/// Only the linear offset `x + y * width` is checked, so an `x` beyond the row wraps into the
	/// next one.
	#[must_use]
	pub fn get_point(&self, x: usize, y: usize) -> Option<u8> {
		self.get_byte(self.offset(x, y)?)
	}

	pub fn set_point(&mut self, x: usize, y: usize, value: u8) -> Result<(), MapError> {
		let index = self.offset(x, y).ok_or(MapError::OutOfBounds {
			index: usize::MAX,
			len: self.colors.len(),
		})?;
		self.set_byte(index, value)
	}

	fn offset(&self, x: usize, y: usize) -> Option<usize> {
		y.checked_mul(usize::from(self.width))?.checked_add(x)
	}

	/// Renders the document as an RGB raster using `palette`.
	///
	/// Fails on the first index that is not part of the palette.
	pub fn to_raster(&self, palette: &Palette) -> Result<RgbImage> {
		let width = usize::from(self.width).max(1);
		let mut buffer = Vec::with_capacity(self.colors.len() * 3);
		for (offset, index) in self.colors.iter().enumerate() {
			let color = palette
				.color(*index)
				.with_context(|| format!("rendering pixel {}", PixelCoord::new((offset % width) as i64, (offset / width) as i64)))?;
			buffer.extend_from_slice(&color.to_array());
		}

		debug!("rendered {}x{} map to raster", self.width, self.height);

		RgbImage::from_raw(u32::from(self.width), u32::from(self.height), buffer)
			.context("raster buffer does not match the map dimensions")
	}

	/// Quantizes `raster` into the index buffer.
	///
	/// Rows are resolved in parallel. If any pixel fails, the error names its position and color
	/// and the document is left unchanged.
	pub fn from_raster(&mut self, raster: &RgbImage, engine: &ApproximationEngine, mode: ApproximationMode) -> Result<()> {
		ensure!(
			raster.width() == u32::from(self.width) && raster.height() == u32::from(self.height),
			"raster is {}x{}, but the map is {}x{}",
			raster.width(),
			raster.height(),
			self.width,
			self.height
		);
		if self.colors.is_empty() {
			return Ok(());
		}

		let palette = engine.palette();
		let rows = raster
			.as_raw()
			.par_chunks(usize::from(self.width) * 3)
			.enumerate()
			.map(|(y, row)| -> Result<(Vec<u8>, usize)> {
				let mut approximated = 0usize;
				let indexes = row
					.chunks_exact(3)
					.enumerate()
					.map(|(x, pixel)| -> Result<u8> {
						let color = Rgb(pixel[0], pixel[1], pixel[2]);
						let index = engine
							.resolve(color, mode)
							.with_context(|| format!("quantizing pixel {} with color {color}", PixelCoord::new(x as i64, y as i64)))?;
						if palette.exact_index(color).is_none() {
							approximated += 1;
						}
						Ok(index)
					})
					.collect::<Result<Vec<u8>>>()?;
				Ok((indexes, approximated))
			})
			.collect::<Result<Vec<(Vec<u8>, usize)>>>()?;

		let approximated: usize = rows.iter().map(|(_, count)| count).sum();
		self.colors = rows.into_iter().flat_map(|(indexes, _)| indexes).collect();

		if approximated > 0 {
			warn!("{approximated} of {} pixels are not palette colors and were approximated ({mode})", self.colors.len());
		}
		debug!("quantized {}x{} raster with mode {mode}", self.width, self.height);

		Ok(())
	}
}

impl Default for TileDocument {
	fn default() -> Self {
		TileDocument::new(128, 128)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::sync::Arc;

	fn engine() -> ApproximationEngine {
		ApproximationEngine::new(Arc::new(Palette::default()))
	}

	fn gradient(width: u32, height: u32) -> RgbImage {
		RgbImage::from_fn(width, height, |x, y| image::Rgb([(x * 37) as u8, (y * 53) as u8, ((x + y) * 11) as u8]))
	}

	#[test]
	fn default_document() {
		let document = TileDocument::default();
		assert_eq!(document.width(), 128);
		assert_eq!(document.height(), 128);
		assert_eq!(document.center(), WorldCoord::new(64, 0));
		assert_eq!(document.zoom_level, 1);
		assert_eq!(document.scale_multiplier(), 1);
		assert_eq!(document.dimension, 0);
		assert_eq!(document.tracking_position, 1);
		assert_eq!(document.colors().len(), 16384);
		assert!(document.colors().iter().all(|c| *c == 0));
		assert_eq!(document.get_point(0, 0), Some(0));
	}

	#[test]
	fn set_and_get_point() {
		let mut document = TileDocument::default();
		document.set_point(0, 0, 5).unwrap();
		assert_eq!(document.get_point(0, 0), Some(5));

		document.set_point(3, 2, 77).unwrap();
		assert_eq!(document.get_byte(3 + 2 * 128), Some(77));
	}

	#[test]
	fn out_of_bounds_access() {
		let mut document = TileDocument::new(4, 4);
		assert_eq!(document.get_point(0, 4), None);
		assert_eq!(document.get_byte(16), None);
		assert_eq!(document.get_point(usize::MAX, usize::MAX), None);
		assert_eq!(document.set_byte(16, 1), Err(MapError::OutOfBounds { index: 16, len: 16 }));
		assert_eq!(document.set_point(1, 4, 1), Err(MapError::OutOfBounds { index: 17, len: 16 }));
		assert!(document.set_point(usize::MAX, usize::MAX, 1).is_err());
		assert!(document.colors().iter().all(|c| *c == 0));
	}

	#[test]
	fn point_offset_wraps_rows() {
		let mut document = TileDocument::new(4, 4);
		document.set_byte(4, 9).unwrap();
		assert_eq!(document.get_point(4, 0), Some(9));
		assert_eq!(document.get_point(0, 1), Some(9));
	}

	#[test]
	fn from_colors_checks_length() {
		assert!(TileDocument::from_colors(2, 2, vec![1, 2, 3, 4]).is_ok());
		let error = TileDocument::from_colors(2, 2, vec![1, 2, 3]).unwrap_err();
		assert_eq!(error.to_string(), "color buffer has 3 bytes, expected 4 for a 2x2 map");
	}

	#[test]
	fn scale_multiplier_is_zoom_squared() {
		let mut document = TileDocument::default();
		document.zoom_level = 3;
		assert_eq!(document.scale_multiplier(), 9);
		assert_eq!(document.mapper().scale_multiplier(), 9);
		assert_eq!(document.mapper().to_pixel(WorldCoord::new(64, 0)), Ok(PixelCoord::new(64, 64)));
	}

	#[test]
	fn to_raster_uses_palette_colors() {
		let document = TileDocument::from_colors(3, 1, vec![5, 3, 143]).unwrap();
		let raster = document.to_raster(&Palette::default()).unwrap();
		assert_eq!(raster.dimensions(), (3, 1));
		assert_eq!(raster.get_pixel(0, 0).0, [110, 154, 48]);
		assert_eq!(raster.get_pixel(1, 0).0, [0, 0, 0]);
		assert_eq!(raster.get_pixel(2, 0).0, [59, 1, 0]);
	}

	#[test]
	fn to_raster_rejects_indexes_outside_palette() {
		let mut document = TileDocument::new(2, 2);
		document.set_point(1, 1, 144).unwrap();
		let error = document.to_raster(&Palette::default()).unwrap_err();
		assert_eq!(error.to_string(), "rendering pixel [1, 1]");
		assert_eq!(
			error.downcast_ref::<MapError>(),
			Some(&MapError::IndexOutOfPalette { index: 144 })
		);
	}

	#[test]
	fn from_raster_exact_colors() {
		let raster = RgbImage::from_fn(2, 1, |x, _| if x == 0 { image::Rgb([110, 154, 48]) } else { image::Rgb([0, 0, 0]) });
		let mut document = TileDocument::new(2, 1);
		document.from_raster(&raster, &engine(), ApproximationMode::ExactOnly).unwrap();
		assert_eq!(document.colors(), &[5, 3]);
	}

	#[test]
	fn from_raster_is_all_or_nothing() {
		let mut document = TileDocument::new(8, 8);
		document.set_point(0, 0, 42).unwrap();
		let before = document.clone();

		let error = document
			.from_raster(&gradient(8, 8), &engine(), ApproximationMode::ExactOnly)
			.unwrap_err();
		assert!(error.to_string().starts_with("quantizing pixel ["), "{error}");
		assert!(matches!(
			error.downcast_ref::<MapError>(),
			Some(MapError::ColorNotMappable { .. })
		));
		assert_eq!(document, before);
	}

	#[test]
	fn from_raster_without_bucket_table_fails() {
		let mut document = TileDocument::new(8, 8);
		let error = document
			.from_raster(&gradient(8, 8), &engine(), ApproximationMode::ExactThenBucket(15))
			.unwrap_err();
		assert_eq!(
			error.downcast_ref::<MapError>(),
			Some(&MapError::LookupTableUnavailable { lookup_index: 15 })
		);
	}

	#[test]
	fn from_raster_rejects_dimension_mismatch() {
		let mut document = TileDocument::new(4, 4);
		let error = document
			.from_raster(&gradient(4, 5), &engine(), ApproximationMode::ExactThenBrute)
			.unwrap_err();
		assert_eq!(error.to_string(), "raster is 4x5, but the map is 4x4");
	}

	#[test]
	fn brute_round_trip_matches_per_pixel_approximation() {
		let engine = engine();
		let raster = gradient(16, 12);
		let mut document = TileDocument::new(16, 12);
		document.from_raster(&raster, &engine, ApproximationMode::ExactThenBrute).unwrap();

		let rendered = document.to_raster(engine.palette()).unwrap();
		for (x, y, pixel) in raster.enumerate_pixels() {
			let expected = engine.approximate(Rgb::from(*pixel), ApproximationMode::ExactThenBrute).unwrap();
			assert_eq!(Rgb::from(*rendered.get_pixel(x, y)), expected, "pixel [{x}, {y}]");
		}
	}

	#[test]
	fn bucket_round_trip_uses_table() {
		let engine = engine().with_bucket_table(15);
		let raster = gradient(10, 10);
		let mut document = TileDocument::new(10, 10);
		document.from_raster(&raster, &engine, ApproximationMode::ExactThenBucket(15)).unwrap();
		for (x, y, pixel) in raster.enumerate_pixels() {
			let expected = engine.resolve(Rgb::from(*pixel), ApproximationMode::ExactThenBucket(15)).unwrap();
			assert_eq!(document.get_point(x as usize, y as usize), Some(expected));
		}
	}

	#[test]
	fn empty_document_converts() {
		let mut document = TileDocument::new(0, 0);
		document.from_raster(&RgbImage::new(0, 0), &engine(), ApproximationMode::ExactOnly).unwrap();
		assert_eq!(document.to_raster(&Palette::default()).unwrap().dimensions(), (0, 0));
	}
}

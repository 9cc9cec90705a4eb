//! Conversions between decoded images, map rasters and image files.

use crate::{ImageFormat, decode, encode};
use anyhow::{Context, Result};
use image::{DynamicImage, RgbImage, RgbaImage};
use log::{debug, info};
use mcmap_core::{ALPHA_INDEX, Blob, Palette, Rgb, TileDocument};
use std::path::Path;

/// Pixels with an alpha value below this count as transparent.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Flattens an image to RGB; transparent pixels become `alpha_color`.
///
/// Quantizing the result maps every transparent pixel to the transparent palette entry, as long
/// as the palette was built with the same alpha color.
#[must_use]
pub fn image_to_raster(image: &DynamicImage, alpha_color: Rgb) -> RgbImage {
	if !image.color().has_alpha() {
		return image.to_rgb8();
	}

	let rgba = image.to_rgba8();
	let mut transparent = 0usize;
	let raster = RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
		let [r, g, b, a] = rgba.get_pixel(x, y).0;
		if a < ALPHA_THRESHOLD {
			transparent += 1;
			image::Rgb::from(alpha_color)
		} else {
			image::Rgb([r, g, b])
		}
	});
	debug!("replaced {transparent} transparent pixels with {alpha_color}");
	raster
}

/// Renders a map document.
///
/// With `transparent`, pixels of the transparent base color get an alpha of 0.
pub fn render_document(document: &TileDocument, palette: &Palette, transparent: bool) -> Result<DynamicImage> {
	let raster = document.to_raster(palette)?;
	if !transparent {
		return Ok(DynamicImage::ImageRgb8(raster));
	}

	let mut rgba = RgbaImage::new(raster.width(), raster.height());
	for ((target, source), index) in rgba.pixels_mut().zip(raster.pixels()).zip(document.colors()) {
		let [r, g, b] = source.0;
		let alpha = if *index <= ALPHA_INDEX { 0 } else { 255 };
		*target = image::Rgba([r, g, b, alpha]);
	}
	Ok(DynamicImage::ImageRgba8(rgba))
}

/// Reads an image file; the format comes from the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
	info!("reading image {path:?}");
	let format = ImageFormat::from_path(path)?;
	let blob = Blob::load_from_file(path)?;
	decode(&blob, format).with_context(|| format!("decoding {format} image {path:?}"))
}

/// Writes an image file; the format comes from the extension.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
	info!("writing image {path:?}");
	let format = ImageFormat::from_path(path)?;
	encode(image, format)
		.with_context(|| format!("encoding {format} image {path:?}"))?
		.save_to_file(path)
}

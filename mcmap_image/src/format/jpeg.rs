use anyhow::{Result, anyhow, bail};
use image::{DynamicImage, ImageEncoder, ImageFormat, codecs::jpeg::JpegEncoder, load_from_memory_with_format};
use mcmap_core::Blob;

/// Encodes as JPEG; `quality` is 1..=99 and defaults to 95.
///
/// JPEG is lossy, so a map imported from a JPEG is almost never made of exact palette colors.
pub fn encode(image: &DynamicImage, quality: Option<u8>) -> Result<Blob> {
	let quality = quality.unwrap_or(95);
	if quality >= 100 {
		bail!("JPEG does not support lossless compression, use a quality < 100");
	}

	match image {
		DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => {}
		_ => bail!("JPEG only supports 8-bit Grey or RGB images without alpha channel"),
	}

	let mut buffer: Vec<u8> = Vec::new();
	JpegEncoder::new_with_quality(&mut buffer, quality).write_image(
		image.as_bytes(),
		image.width(),
		image.height(),
		image.color().into(),
	)?;

	Ok(Blob::from(buffer))
}

pub fn decode(blob: &Blob) -> Result<DynamicImage> {
	load_from_memory_with_format(blob.as_slice(), ImageFormat::Jpeg).map_err(|e| anyhow!("Failed to decode JPEG image: {e}"))
}

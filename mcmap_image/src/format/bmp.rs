use anyhow::{Result, anyhow, bail};
use image::{DynamicImage, ImageEncoder, ImageFormat, codecs::bmp::BmpEncoder, load_from_memory_with_format};
use mcmap_core::Blob;

pub fn encode(image: &DynamicImage) -> Result<Blob> {
	let image = match image {
		DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) | DynamicImage::ImageLuma8(_) => image,
		_ => bail!("bmp only supports 8-bit Grey, RGB or RGBA images"),
	};

	let mut buffer: Vec<u8> = Vec::new();
	BmpEncoder::new(&mut buffer).write_image(
		image.as_bytes(),
		image.width(),
		image.height(),
		image.color().into(),
	)?;

	Ok(Blob::from(buffer))
}

pub fn decode(blob: &Blob) -> Result<DynamicImage> {
	load_from_memory_with_format(blob.as_slice(), ImageFormat::Bmp).map_err(|e| anyhow!("Failed to decode BMP image: {e}"))
}

use anyhow::{Result, anyhow, bail};
use image::{DynamicImage, ImageEncoder, ImageFormat, codecs::png::PngEncoder, load_from_memory_with_format};
use mcmap_core::Blob;

pub fn encode(image: &DynamicImage) -> Result<Blob> {
	if image.color().bytes_per_pixel() / image.color().channel_count() != 1 {
		bail!("png only supports 8-bit images");
	}

	let mut buffer: Vec<u8> = Vec::new();
	PngEncoder::new(&mut buffer).write_image(
		image.as_bytes(),
		image.width(),
		image.height(),
		image.color().into(),
	)?;

	Ok(Blob::from(buffer))
}

pub fn decode(blob: &Blob) -> Result<DynamicImage> {
	load_from_memory_with_format(blob.as_slice(), ImageFormat::Png).map_err(|e| anyhow!("Failed to decode PNG image: {e}"))
}

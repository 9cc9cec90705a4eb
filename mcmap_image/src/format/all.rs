use crate::{ImageFormat, bmp, jpeg, png};
use anyhow::Result;
use image::DynamicImage;
use mcmap_core::Blob;

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Blob> {
	match format {
		ImageFormat::BMP => bmp::encode(image),
		ImageFormat::JPG => jpeg::encode(image, None),
		ImageFormat::PNG => png::encode(image),
	}
}

pub fn decode(blob: &Blob, format: ImageFormat) -> Result<DynamicImage> {
	match format {
		ImageFormat::BMP => bmp::decode(blob),
		ImageFormat::JPG => jpeg::decode(blob),
		ImageFormat::PNG => png::decode(blob),
	}
}

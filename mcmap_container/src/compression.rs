//! Gzip handling for map files.

use anyhow::{Context, Result};
use flate2::bufread::{GzDecoder, GzEncoder};
use mcmap_core::Blob;
use std::io::Read;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Returns `true` if the blob starts with the gzip magic bytes.
#[must_use]
pub fn is_gzip(blob: &Blob) -> bool {
	blob.starts_with(&GZIP_MAGIC)
}

pub fn compress_gzip(blob: &Blob) -> Result<Blob> {
	let mut encoder = GzEncoder::new(blob.as_slice(), flate2::Compression::default());
	let mut compressed_data = Vec::new();
	encoder
		.read_to_end(&mut compressed_data)
		.context("Failed to compress data using Gzip")?;
	Ok(Blob::from(compressed_data))
}

pub fn decompress_gzip(blob: &Blob) -> Result<Blob> {
	let mut decoder = GzDecoder::new(blob.as_slice());
	let mut decompressed_data = Vec::new();
	decoder
		.read_to_end(&mut decompressed_data)
		.context("Failed to decompress data using Gzip")?;
	Ok(Blob::from(decompressed_data))
}

/// Decompresses gzip data and passes anything else through unchanged.
pub fn decompress_auto(blob: Blob) -> Result<(Blob, bool)> {
	if is_gzip(&blob) {
		Ok((decompress_gzip(&blob)?, true))
	} else {
		Ok((blob, false))
	}
}

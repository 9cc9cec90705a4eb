//! Core model of Minecraft map items.
//!
//! * [`palette`]: the 144-entry map color palette and its inverse index
//! * [`approximation`]: mapping arbitrary RGB pixels onto palette indices
//! * [`document`]: the map document with its index buffer and coordinate mapping
//! * [`types`]: shared value types and the [`MapError`] kinds
//!
//! ```rust
//! use mcmap_core::{ApproximationEngine, ApproximationMode, Palette, TileDocument};
//! use std::sync::Arc;
//!
//! let engine = ApproximationEngine::new(Arc::new(Palette::default()));
//! let raster = image::RgbImage::from_pixel(128, 128, image::Rgb([126, 178, 56]));
//!
//! let mut document = TileDocument::default();
//! document.from_raster(&raster, &engine, ApproximationMode::ExactThenBrute).unwrap();
//! assert_eq!(document.get_point(10, 10), Some(6));
//! ```

pub mod approximation;
pub mod document;
pub mod palette;
pub mod types;

pub use approximation::*;
pub use document::*;
pub use palette::*;
pub use types::*;

//! # mcmap
//!
//! Read, write and convert Minecraft map item files (`map_<n>.dat`).
//!
//! - **Palette**: the 144 map colors and their exact inverse index ([`core::Palette`])
//! - **Quantization**: exact, bucket-table or brute-force nearest color ([`core::ApproximationEngine`])
//! - **Map files**: gzip-compressed NBT, unknown tags preserved ([`container::MapFile`])
//! - **Images**: PNG, BMP and JPEG ([`image::ImageFormat`])
//!
//! ## Usage Example
//!
//! ```rust
//! use mcmap::{config::Config, container::MapFile, core::*};
//!
//! let config = Config::from_string("mode: exact").unwrap();
//! let engine = config.engine(config.mode().unwrap()).unwrap();
//!
//! let raster = ::image::RgbImage::from_pixel(128, 128, ::image::Rgb([110, 154, 48]));
//! let mut document = TileDocument::default();
//! document.from_raster(&raster, &engine, config.mode().unwrap()).unwrap();
//!
//! let map = MapFile::from_document(&document).unwrap();
//! assert_eq!(map.to_document().unwrap().get_point(0, 0), Some(5));
//! ```

pub mod config;

pub use mcmap_container as container;
pub use mcmap_core as core;
pub use mcmap_image as image;

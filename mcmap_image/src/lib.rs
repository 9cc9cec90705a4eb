//! Image side of map conversion: PNG, BMP and JPEG codecs plus helpers that turn decoded images
//! into map rasters and rendered maps back into images.

mod format;
mod image_format;
mod raster;

pub use format::*;
pub use image_format::*;
pub use raster::*;

//! The map document and its coordinate system.

mod coordinate_mapper;
mod tile_document;

pub use coordinate_mapper::*;
pub use tile_document::*;

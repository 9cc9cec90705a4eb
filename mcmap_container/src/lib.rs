//! Storage layer for Minecraft map items.
//!
//! * [`nbt`]: the named binary tag codec
//! * [`compression`]: gzip detection and (de)compression
//! * [`MapFile`]: the adapter between a map file and a [`mcmap_core::TileDocument`]

pub mod compression;
pub mod io;
mod map_file;
pub mod nbt;

pub use map_file::*;

//! Encoders and decoders for the supported image formats.
//! The `all` module dispatches on [`crate::ImageFormat`].

mod all;

pub mod bmp;
pub mod jpeg;
pub mod png;
pub use all::*;

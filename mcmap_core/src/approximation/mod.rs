//! Nearest-color resolution from arbitrary RGB pixels to palette indices.
//!
//! [`ApproximationEngine::resolve`] tries the exact inverse index first and then, depending on the
//! [`ApproximationMode`], fails, consults a [`CoarseBucketTable`] or scans the whole palette.

mod bucket_table;
mod engine;
mod mode;

pub use bucket_table::*;
pub use engine::*;
pub use mode::*;

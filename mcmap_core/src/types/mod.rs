mod blob;
mod coord;
mod error;
mod rgb;

pub use blob::*;
pub use coord::*;
pub use error::*;
pub use rgb::*;

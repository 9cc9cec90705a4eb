//! The map color palette: 36 base colors, each in four brightness variants.
//!
//! [`Palette::build`] expands the base colors into the 144-entry forward table and the exact
//! inverse index used by the approximation engine. [`PaletteBuilder`] wraps it with defaults.

mod builder;
mod constants;
mod table;

pub use builder::*;
pub use constants::*;
pub use table::*;

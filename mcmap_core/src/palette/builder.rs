use super::{BASE_COLOR_COUNT, BASE_COLORS, Palette};
use crate::Rgb;
use anyhow::{Result, ensure};

/// Configures and builds a [`Palette`].
///
/// Defaults to the canonical base colors and a black alpha color, which reproduces the
/// unmodified map color table.
///
/// ```rust
/// use mcmap_core::{PaletteBuilder, Rgb};
///
/// let palette = PaletteBuilder::new().alpha_color(Rgb(255, 0, 255)).build();
/// assert_eq!(palette.exact_index(Rgb(255, 0, 255)), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteBuilder {
	base_colors: [Rgb; BASE_COLOR_COUNT],
	alpha_color: Rgb,
}

impl PaletteBuilder {
	#[must_use]
	pub fn new() -> PaletteBuilder {
		PaletteBuilder {
			base_colors: BASE_COLORS,
			alpha_color: Rgb::BLACK,
		}
	}

	/// Replaces the base color table. Exactly [`BASE_COLOR_COUNT`] colors are required.
	pub fn base_colors(mut self, colors: &[Rgb]) -> Result<PaletteBuilder> {
		ensure!(
			colors.len() == BASE_COLOR_COUNT,
			"expected {BASE_COLOR_COUNT} base colors, got {}",
			colors.len()
		);
		self.base_colors.copy_from_slice(colors);
		Ok(self)
	}

	/// Sets the color substituted for base color 0.
	#[must_use]
	pub fn alpha_color(mut self, color: Rgb) -> PaletteBuilder {
		self.alpha_color = color;
		self
	}

	#[must_use]
	pub fn build(&self) -> Palette {
		Palette::build(&self.base_colors, self.alpha_color)
	}
}

impl Default for PaletteBuilder {
	fn default() -> Self {
		PaletteBuilder::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_reproduce_canonical_table() {
		let palette = PaletteBuilder::default().build();
		assert_eq!(palette, Palette::build(&BASE_COLORS, Rgb::BLACK));
		assert_eq!(palette.alpha_color(), Rgb::BLACK);
	}

	#[test]
	fn custom_base_colors() -> Result<()> {
		let colors = vec![Rgb(255, 255, 255); BASE_COLOR_COUNT];
		let palette = PaletteBuilder::new().base_colors(&colors)?.build();
		assert_eq!(palette.color(4), Ok(Rgb(180, 180, 180)));
		assert_eq!(palette.color(143), Ok(Rgb(135, 135, 135)));
		assert_eq!(palette.exact_index(Rgb(135, 135, 135)), Some(143));
		Ok(())
	}

	#[test]
	fn rejects_wrong_base_color_count() {
		let error = PaletteBuilder::new().base_colors(&[Rgb::BLACK; 3]).unwrap_err();
		assert_eq!(error.to_string(), "expected 36 base colors, got 3");
	}
}

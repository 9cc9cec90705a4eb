use super::{ALPHA_INDEX, BASE_COLOR_COUNT, BRIGHTNESS_MULTIPLIERS, PALETTE_SIZE, PaletteBuilder};
use crate::{MapError, Rgb};
use log::debug;
use std::collections::HashMap;
use std::fmt::Debug;

/// The expanded map color table together with its exact-match inverse index.
///
/// A `Palette` is immutable once built. It is meant to be constructed once and shared
/// (`Arc<Palette>` or `&Palette`) by every document and approximation engine that needs it.
#[derive(Clone, PartialEq, Eq)]
pub struct Palette {
	colors: Vec<Rgb>,
	index: HashMap<Rgb, u8>,
	alpha_color: Rgb,
}

impl Palette {
	/// Expands `base_colors` by the four brightness multipliers.
	///
	/// Base color 0 is replaced by `alpha_color` in all four slots, and the inverse index maps
	/// `alpha_color` to [`ALPHA_INDEX`]. For every other base color the entry at
	/// `base * 4 + variant` is the scaled color. When two entries share the same RGB value the
	/// one inserted last owns the inverse-index slot.
	#[must_use]
	pub fn build(base_colors: &[Rgb; BASE_COLOR_COUNT], alpha_color: Rgb) -> Palette {
		let mut colors = Vec::with_capacity(PALETTE_SIZE);
		let mut index = HashMap::with_capacity(PALETTE_SIZE);

		for (base_index, base_color) in base_colors.iter().enumerate() {
			for (variant, multiplier) in BRIGHTNESS_MULTIPLIERS.iter().enumerate() {
				let palette_index = (base_index * BRIGHTNESS_MULTIPLIERS.len() + variant) as u8;
				if base_index == 0 {
					colors.push(alpha_color);
					index.insert(alpha_color, ALPHA_INDEX);
				} else {
					let color = base_color.scale(*multiplier);
					colors.push(color);
					index.insert(color, palette_index);
				}
			}
		}

		debug!(
			"built palette with {} entries, {} distinct colors, alpha color {alpha_color}",
			colors.len(),
			index.len()
		);

		Palette {
			colors,
			index,
			alpha_color,
		}
	}

	/// Number of palette entries, always [`PALETTE_SIZE`].
	#[must_use]
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Returns the color stored at `index`.
	///
	/// Bytes outside the canonical set are an error, never a default color.
	pub fn color(&self, index: u8) -> Result<Rgb, MapError> {
		self
			.colors
			.get(usize::from(index))
			.copied()
			.ok_or(MapError::IndexOutOfPalette { index })
	}

	/// Returns the palette index whose color equals `color` exactly, if any.
	#[must_use]
	pub fn exact_index(&self, color: Rgb) -> Option<u8> {
		self.index.get(&color).copied()
	}

	/// Returns the index of the entry closest to `color` by squared RGB distance.
	///
	/// Ties go to the lowest index.
	#[must_use]
	pub fn nearest_index(&self, color: Rgb) -> u8 {
		let mut best_index = 0;
		let mut best_distance = u32::MAX;
		for (index, entry) in self.colors.iter().enumerate() {
			let distance = color.distance_squared(*entry);
			if distance < best_distance {
				best_distance = distance;
				best_index = index;
				if distance == 0 {
					break;
				}
			}
		}
		best_index as u8
	}

	#[must_use]
	pub fn colors(&self) -> &[Rgb] {
		&self.colors
	}

	#[must_use]
	pub fn alpha_color(&self) -> Rgb {
		self.alpha_color
	}
}

impl Default for Palette {
	fn default() -> Self {
		PaletteBuilder::new().build()
	}
}

impl Debug for Palette {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Palette")
			.field("entries", &self.colors.len())
			.field("distinct", &self.index.len())
			.field("alpha_color", &self.alpha_color)
			.finish()
	}
}

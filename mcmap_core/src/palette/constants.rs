use crate::Rgb;

/// Number of base colors. Base color 0 is the transparent "no color" slot.
pub const BASE_COLOR_COUNT: usize = 36;

/// Brightness multipliers (in 1/255 units) for the four variants of each base color.
pub const BRIGHTNESS_MULTIPLIERS: [u8; 4] = [180, 220, 255, 135];

/// Number of addressable palette entries: every base color in every brightness variant.
pub const PALETTE_SIZE: usize = BASE_COLOR_COUNT * BRIGHTNESS_MULTIPLIERS.len();

/// Palette index the inverse lookup yields for the alpha color.
pub const ALPHA_INDEX: u8 = 3;

/// The canonical map base colors, in palette order.
pub const BASE_COLORS: [Rgb; BASE_COLOR_COUNT] = [
	Rgb(0, 0, 0),
	Rgb(127, 178, 56),
	Rgb(247, 233, 163),
	Rgb(199, 199, 199),
	Rgb(255, 0, 0),
	Rgb(160, 160, 255),
	Rgb(167, 167, 167),
	Rgb(0, 124, 0),
	Rgb(255, 255, 255),
	Rgb(164, 168, 184),
	Rgb(151, 109, 77),
	Rgb(112, 112, 112),
	Rgb(64, 64, 255),
	Rgb(143, 119, 72),
	Rgb(255, 252, 245),
	Rgb(216, 127, 51),
	Rgb(178, 76, 216),
	Rgb(102, 153, 216),
	Rgb(229, 229, 51),
	Rgb(127, 204, 25),
	Rgb(242, 127, 165),
	Rgb(76, 76, 76),
	Rgb(153, 153, 153),
	Rgb(76, 127, 153),
	Rgb(127, 63, 178),
	Rgb(51, 76, 178),
	Rgb(102, 76, 51),
	Rgb(102, 127, 51),
	Rgb(153, 51, 51),
	Rgb(25, 25, 25),
	Rgb(250, 238, 77),
	Rgb(92, 219, 213),
	Rgb(74, 128, 255),
	Rgb(0, 217, 58),
	Rgb(129, 86, 49),
	Rgb(112, 2, 0),
];

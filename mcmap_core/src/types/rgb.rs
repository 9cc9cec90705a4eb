//! The [`Rgb`] color triple used by the palette, the approximation engine and rasters.

use anyhow::{Result, anyhow, bail};
use std::fmt::{Display, Formatter};

/// An 8-bit-per-channel RGB color.
///
/// ```rust
/// use mcmap_core::Rgb;
///
/// let grass = Rgb(127, 178, 56);
/// assert_eq!(grass.scale(220), Rgb(110, 154, 48));
/// assert_eq!(Rgb::parse_hex("#7FB238").unwrap(), grass);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub const BLACK: Rgb = Rgb(0, 0, 0);

	#[must_use]
	pub const fn to_array(self) -> [u8; 3] {
		[self.0, self.1, self.2]
	}

	/// Multiplies every channel by `multiplier / 255`, rounding to the nearest integer.
	///
	/// The product `channel * multiplier` is never an odd multiple of 127.5, so there are no
	/// ties and round-half-up matches any other rounding rule.
	#[must_use]
	pub fn scale(self, multiplier: u8) -> Rgb {
		let channel = |c: u8| ((u32::from(c) * u32::from(multiplier) + 127) / 255) as u8;
		Rgb(channel(self.0), channel(self.1), channel(self.2))
	}

	/// Squared Euclidean distance in RGB space.
	#[must_use]
	pub fn distance_squared(self, other: Rgb) -> u32 {
		let delta = |a: u8, b: u8| {
			let d = i32::from(a) - i32::from(b);
			(d * d) as u32
		};
		delta(self.0, other.0) + delta(self.1, other.1) + delta(self.2, other.2)
	}

	/// Parses `RGB` or `RRGGBB` hex notation, with an optional leading `#`.
	pub fn parse_hex(hex: &str) -> Result<Rgb> {
		let hex = hex.trim().trim_start_matches('#');

		let expanded = match hex.len() {
			3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
			6 => hex.to_string(),
			_ => bail!("Invalid hex color '{hex}': expected 3 or 6 hex characters"),
		};

		let bytes = (0..6)
			.step_by(2)
			.map(|i| {
				expanded
					.get(i..i + 2)
					.ok_or_else(|| anyhow!("Invalid hex color '{hex}'"))
					.and_then(|pair| u8::from_str_radix(pair, 16).map_err(|e| anyhow!("Invalid hex color '{hex}': {e}")))
			})
			.collect::<Result<Vec<u8>>>()?;

		Ok(Rgb(bytes[0], bytes[1], bytes[2]))
	}
}

impl Display for Rgb {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {}, {})", self.0, self.1, self.2)
	}
}

impl From<[u8; 3]> for Rgb {
	fn from(value: [u8; 3]) -> Self {
		Rgb(value[0], value[1], value[2])
	}
}

impl From<Rgb> for [u8; 3] {
	fn from(value: Rgb) -> Self {
		value.to_array()
	}
}

impl From<image::Rgb<u8>> for Rgb {
	fn from(value: image::Rgb<u8>) -> Self {
		Rgb::from(value.0)
	}
}

impl From<Rgb> for image::Rgb<u8> {
	fn from(value: Rgb) -> Self {
		image::Rgb(value.to_array())
	}
}

use anyhow::{Context, Result, bail};
use std::fmt::{Display, Formatter};

/// Strategy used to turn an arbitrary RGB pixel into a palette index.
///
/// Every mode tries an exact match first.
///
/// ```rust
/// use mcmap_core::ApproximationMode;
///
/// assert_eq!(ApproximationMode::try_from_str("bucket:31").unwrap(), ApproximationMode::ExactThenBucket(31));
/// assert_eq!(ApproximationMode::default().to_string(), "brute");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApproximationMode {
	/// Only exact palette colors are accepted.
	ExactOnly,
	/// Fall back to the coarse bucket table of the given resolution.
	ExactThenBucket(u8),
	/// Fall back to an exhaustive nearest-color search.
	#[default]
	ExactThenBrute,
}

impl ApproximationMode {
	/// Parses `exact`, `brute` or `bucket:<resolution>` (case-insensitive).
	pub fn try_from_str(value: &str) -> Result<Self> {
		let value = value.trim().to_lowercase();
		Ok(match value.as_str() {
			"exact" => ApproximationMode::ExactOnly,
			"brute" => ApproximationMode::ExactThenBrute,
			_ => match value.strip_prefix("bucket:") {
				Some(resolution) => ApproximationMode::ExactThenBucket(
					resolution
						.parse::<u8>()
						.with_context(|| format!("invalid bucket resolution '{resolution}', expected 0-255"))?,
				),
				None => bail!("Unknown approximation mode: '{value}', expected 'exact', 'brute' or 'bucket:<n>'"),
			},
		})
	}
}

impl Display for ApproximationMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ApproximationMode::ExactOnly => write!(f, "exact"),
			ApproximationMode::ExactThenBucket(resolution) => write!(f, "bucket:{resolution}"),
			ApproximationMode::ExactThenBrute => write!(f, "brute"),
		}
	}
}

use super::{ApproximationMode, CoarseBucketTable};
use crate::{MapError, Palette, Rgb};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Maps RGB pixels to palette indices.
///
/// The engine owns a shared reference to the [`Palette`] and any number of prebuilt
/// [`CoarseBucketTable`]s, keyed by resolution. It is immutable after construction, so one
/// engine can serve any number of threads.
///
/// ```rust
/// use mcmap_core::{ApproximationEngine, ApproximationMode, Palette, Rgb};
/// use std::sync::Arc;
///
/// let engine = ApproximationEngine::new(Arc::new(Palette::default())).with_bucket_table(15);
/// assert_eq!(engine.resolve(Rgb(110, 154, 48), ApproximationMode::ExactOnly), Ok(5));
/// assert!(engine.resolve(Rgb(111, 154, 48), ApproximationMode::ExactOnly).is_err());
/// assert_eq!(engine.resolve(Rgb(111, 154, 48), ApproximationMode::ExactThenBrute), Ok(5));
/// assert!(engine.resolve(Rgb(111, 154, 48), ApproximationMode::ExactThenBucket(15)).is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ApproximationEngine {
	palette: Arc<Palette>,
	bucket_tables: BTreeMap<u8, CoarseBucketTable>,
}

impl ApproximationEngine {
	#[must_use]
	pub fn new(palette: Arc<Palette>) -> ApproximationEngine {
		ApproximationEngine {
			palette,
			bucket_tables: BTreeMap::new(),
		}
	}

	/// Builds and registers the bucket table for `lookup_index`, unless it already exists.
	#[must_use]
	pub fn with_bucket_table(mut self, lookup_index: u8) -> ApproximationEngine {
		self.add_bucket_table(lookup_index);
		self
	}

	/// Builds and registers the bucket table for `lookup_index`, unless it already exists.
	pub fn add_bucket_table(&mut self, lookup_index: u8) -> &CoarseBucketTable {
		let palette = &self.palette;
		self
			.bucket_tables
			.entry(lookup_index)
			.or_insert_with(|| CoarseBucketTable::build(palette, lookup_index))
	}

	#[must_use]
	pub fn palette(&self) -> &Arc<Palette> {
		&self.palette
	}

	#[must_use]
	pub fn bucket_table(&self, lookup_index: u8) -> Option<&CoarseBucketTable> {
		self.bucket_tables.get(&lookup_index)
	}

	/// Resolutions for which a bucket table is available, ascending.
	pub fn bucket_resolutions(&self) -> impl Iterator<Item = u8> + '_ {
		self.bucket_tables.keys().copied()
	}

	/// Returns the palette index for `pixel` under `mode`.
	///
	/// * [`ApproximationMode::ExactOnly`] fails with [`MapError::ColorNotMappable`] when `pixel` is
	///   not a palette color.
	/// * [`ApproximationMode::ExactThenBucket`] fails with [`MapError::LookupTableUnavailable`]
	///   when no table of that resolution was built and `pixel` is not a palette color.
	/// * [`ApproximationMode::ExactThenBrute`] never fails.
	pub fn resolve(&self, pixel: Rgb, mode: ApproximationMode) -> Result<u8, MapError> {
		if let Some(index) = self.palette.exact_index(pixel) {
			return Ok(index);
		}

		match mode {
			ApproximationMode::ExactOnly => Err(MapError::ColorNotMappable { color: pixel }),
			ApproximationMode::ExactThenBucket(lookup_index) => self
				.bucket_tables
				.get(&lookup_index)
				.map(|table| table.lookup(pixel))
				.ok_or(MapError::LookupTableUnavailable { lookup_index }),
			ApproximationMode::ExactThenBrute => Ok(self.palette.nearest_index(pixel)),
		}
	}

	/// Returns the palette color `pixel` would be rendered as after resolving.
	pub fn approximate(&self, pixel: Rgb, mode: ApproximationMode) -> Result<Rgb, MapError> {
		self.palette.color(self.resolve(pixel, mode)?)
	}
}

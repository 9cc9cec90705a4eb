use crate::{Palette, Rgb};
use log::debug;
use rayon::prelude::*;
use std::fmt::Debug;

/// A precomputed reduced-precision lookup from RGB to palette index.
///
/// Every channel is quantized to `lookup_index + 1` buckets with
/// `bucket = floor(channel * lookup_index / 255)`. Each bucket cube is represented by the
/// midpoint of its channel ranges and stores the palette entry nearest to that midpoint, so a
/// lookup is O(1) but may pick a slightly worse color than an exhaustive search would.
///
/// The table is read-only after [`CoarseBucketTable::build`] and can be shared across threads.
#[derive(Clone, PartialEq, Eq)]
pub struct CoarseBucketTable {
	lookup_index: u8,
	entries: Vec<u8>,
}

impl CoarseBucketTable {
	/// Builds the table for the given resolution.
	///
	/// Cost grows with the cube of the resolution: `(lookup_index + 1)^3` nearest-color searches.
	#[must_use]
	pub fn build(palette: &Palette, lookup_index: u8) -> CoarseBucketTable {
		let size = usize::from(lookup_index) + 1;
		let midpoints = bucket_midpoints(lookup_index);

		let mut entries = vec![0u8; size * size * size];
		entries.par_chunks_mut(size * size).enumerate().for_each(|(r, plane)| {
			for (g, row) in plane.chunks_mut(size).enumerate() {
				for (b, entry) in row.iter_mut().enumerate() {
					*entry = palette.nearest_index(Rgb(midpoints[r], midpoints[g], midpoints[b]));
				}
			}
		});

		debug!("built bucket table for resolution {lookup_index} with {} buckets", entries.len());

		CoarseBucketTable { lookup_index, entries }
	}

	#[must_use]
	pub fn lookup_index(&self) -> u8 {
		self.lookup_index
	}

	/// Number of buckets per channel.
	#[must_use]
	pub fn buckets_per_channel(&self) -> usize {
		usize::from(self.lookup_index) + 1
	}

	/// Number of stored bucket entries.
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Reduces a color to its bucket key.
	#[must_use]
	pub fn key(&self, color: Rgb) -> (u8, u8, u8) {
		(
			quantize(color.0, self.lookup_index),
			quantize(color.1, self.lookup_index),
			quantize(color.2, self.lookup_index),
		)
	}

	/// Returns the palette index stored for the bucket containing `color`.
	#[must_use]
	pub fn lookup(&self, color: Rgb) -> u8 {
		let size = self.buckets_per_channel();
		let (r, g, b) = self.key(color);
		self.entries[(usize::from(r) * size + usize::from(g)) * size + usize::from(b)]
	}
}

impl Debug for CoarseBucketTable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CoarseBucketTable")
			.field("lookup_index", &self.lookup_index)
			.field("entries", &self.entries.len())
			.finish()
	}
}

fn quantize(channel: u8, lookup_index: u8) -> u8 {
	(u32::from(channel) * u32::from(lookup_index) / 255) as u8
}

/// Midpoint of the channel values falling into each bucket.
fn bucket_midpoints(lookup_index: u8) -> Vec<u8> {
	let size = usize::from(lookup_index) + 1;
	let mut low = vec![u8::MAX; size];
	let mut high = vec![0u8; size];
	for channel in 0..=u8::MAX {
		let bucket = usize::from(quantize(channel, lookup_index));
		low[bucket] = low[bucket].min(channel);
		high[bucket] = high[bucket].max(channel);
	}
	low
		.iter()
		.zip(high.iter())
		.map(|(low, high)| ((u16::from(*low) + u16::from(*high)) / 2) as u8)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, vec![127])]
	#[case(1, vec![127, 255])]
	#[case(3, vec![42, 127, 212, 255])]
	fn midpoints(#[case] lookup_index: u8, #[case] expected: Vec<u8>) {
		assert_eq!(bucket_midpoints(lookup_index), expected);
	}

	#[test]
	fn every_bucket_is_reachable() {
		for lookup_index in [1u8, 2, 7, 15, 100, 255] {
			let mut seen = vec![false; usize::from(lookup_index) + 1];
			for channel in 0..=u8::MAX {
				seen[usize::from(quantize(channel, lookup_index))] = true;
			}
			assert!(seen.iter().all(|s| *s), "resolution {lookup_index}");
		}
	}

	#[test]
	fn key_uses_floor_quantization() {
		let palette = Palette::default();
		let table = CoarseBucketTable::build(&palette, 7);
		assert_eq!(table.buckets_per_channel(), 8);
		assert_eq!(table.len(), 512);
		assert_eq!(table.key(Rgb(0, 36, 37)), (0, 0, 1));
		assert_eq!(table.key(Rgb(255, 254, 128)), (7, 6, 3));
	}

	#[test]
	fn entries_are_nearest_to_bucket_midpoints() {
		let palette = Palette::default();
		let table = CoarseBucketTable::build(&palette, 3);
		let midpoints = bucket_midpoints(3);
		for r in 0..4 {
			for g in 0..4 {
				for b in 0..4 {
					let color = Rgb(midpoints[r], midpoints[g], midpoints[b]);
					assert_eq!(table.lookup(color), palette.nearest_index(color));
				}
			}
		}
	}

	#[test]
	fn single_bucket_maps_everything_to_one_index() {
		let palette = Palette::default();
		let table = CoarseBucketTable::build(&palette, 0);
		assert_eq!(table.len(), 1);
		let index = palette.nearest_index(Rgb(127, 127, 127));
		assert_eq!(table.lookup(Rgb(0, 0, 0)), index);
		assert_eq!(table.lookup(Rgb(255, 255, 255)), index);
	}

	#[test]
	fn debug_is_compact() {
		let table = CoarseBucketTable::build(&Palette::default(), 1);
		assert_eq!(format!("{table:?}"), "CoarseBucketTable { lookup_index: 1, entries: 8 }");
	}
}

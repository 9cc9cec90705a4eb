//! YAML configuration shared by all commands.
//!
//! ```yaml
//! # color substituted for the transparent base color
//! alpha_color: "#000000"
//! # exact, brute or bucket:<resolution>
//! mode: brute
//! # bucket tables to build up front
//! bucket_resolutions: [15, 31]
//! # optional replacement for the 36 base colors
//! base_colors: ["#000000", "#7fb238", ...]
//! ```

use anyhow::{Context, Result};
use log::debug;
use mcmap_core::{ApproximationEngine, ApproximationMode, Palette, PaletteBuilder, Rgb};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
	sync::Arc,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Hex color used for the transparent base color, e.g. `"#ff00ff"`. Defaults to black.
	#[serde(default)]
	pub alpha_color: Option<String>,

	/// Approximation mode: `exact`, `brute` or `bucket:<resolution>`. Defaults to `brute`.
	#[serde(default)]
	pub mode: Option<String>,

	/// Resolutions of the bucket tables that are built when the engine is created.
	#[serde(default)]
	pub bucket_resolutions: Vec<u8>,

	/// 36 hex colors replacing the built-in base colors.
	#[serde(default)]
	pub base_colors: Option<Vec<String>>,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		debug!("reading config {path:?}");
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}

	pub fn alpha_color(&self) -> Result<Rgb> {
		match &self.alpha_color {
			Some(hex) => Rgb::parse_hex(hex).context("parsing 'alpha_color'"),
			None => Ok(Rgb::BLACK),
		}
	}

	pub fn mode(&self) -> Result<ApproximationMode> {
		match &self.mode {
			Some(mode) => ApproximationMode::try_from_str(mode).context("parsing 'mode'"),
			None => Ok(ApproximationMode::default()),
		}
	}

	pub fn palette(&self) -> Result<Palette> {
		let mut builder = PaletteBuilder::new().alpha_color(self.alpha_color()?);
		if let Some(base_colors) = &self.base_colors {
			let colors = base_colors
				.iter()
				.enumerate()
				.map(|(index, hex)| Rgb::parse_hex(hex).with_context(|| format!("parsing base color {index}")))
				.collect::<Result<Vec<Rgb>>>()?;
			builder = builder.base_colors(&colors).context("parsing 'base_colors'")?;
		}
		Ok(builder.build())
	}

	/// Builds an engine with the configured bucket tables plus the one `mode` needs.
	pub fn engine(&self, mode: ApproximationMode) -> Result<ApproximationEngine> {
		let mut engine = ApproximationEngine::new(Arc::new(self.palette()?));
		for resolution in &self.bucket_resolutions {
			engine.add_bucket_table(*resolution);
		}
		if let ApproximationMode::ExactThenBucket(resolution) = mode {
			engine.add_bucket_table(resolution);
		}
		Ok(engine)
	}
}

use anyhow::Result;
use clap::Args;
use itertools::Itertools;
use mcmap::{
	config::Config,
	container::MapFile,
	core::{Palette, PixelCoord},
};
use std::{fmt::Write, path::PathBuf};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// map file you want to probe
	#[arg(required = true)]
	map: PathBuf,

	/// number of most frequent colors to list
	#[arg(long, default_value_t = 8)]
	top: usize,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let map = MapFile::open_path(&arguments.map)?;
	print!("{}", describe(&map, &config.palette()?, arguments.top)?);
	Ok(())
}

/// Summarizes metadata and the palette index histogram of a map.
fn describe(map: &MapFile, palette: &Palette, top: usize) -> Result<String> {
	let document = map.to_document()?;
	let mapper = document.mapper();
	let mut text = String::new();

	writeln!(text, "size: {}x{}", document.width(), document.height())?;
	writeln!(text, "center: {}", document.center())?;
	writeln!(
		text,
		"zoom level: {} ({} blocks per pixel)",
		document.zoom_level,
		document.scale_multiplier()
	)?;
	writeln!(text, "dimension: {}", map.dimension()?)?;
	writeln!(text, "tracking position: {}", document.tracking_position)?;
	writeln!(text, "compressed: {}", map.is_compressed())?;
	if document.width() > 0 && document.height() > 0 {
		let last = PixelCoord::new(i64::from(document.width()) - 1, i64::from(document.height()) - 1);
		writeln!(
			text,
			"covers: {} to {}",
			mapper.to_coord(PixelCoord::new(0, 0))?,
			mapper.to_coord(last)?
		)?;
	}

	let mut histogram = [0usize; 256];
	for index in document.colors() {
		histogram[usize::from(*index)] += 1;
	}
	let total = document.colors().len().max(1);
	let used = histogram.iter().filter(|count| **count > 0).count();
	let outside = histogram[palette.len()..].iter().sum::<usize>();

	writeln!(text, "distinct indexes: {used}")?;
	if outside > 0 {
		writeln!(text, "pixels outside the palette: {outside}")?;
	}
	writeln!(text, "most frequent:")?;
	for (index, count) in histogram
		.iter()
		.enumerate()
		.filter(|(_, count)| **count > 0)
		.sorted_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(&b.0)))
		.take(top)
	{
		let color = palette
			.color(index as u8)
			.map_or_else(|_| String::from("outside palette"), |c| c.to_string());
		writeln!(
			text,
			"  {index:>3} {color}: {count} ({:.1}%)",
			*count as f64 * 100.0 / total as f64
		)?;
	}

	Ok(text)
}

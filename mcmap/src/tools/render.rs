use anyhow::{Context, Result};
use clap::Args;
use log::info;
use mcmap::{
	config::Config,
	container::MapFile,
	image::{render_document, save_image},
};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// map file to render
	#[arg(required = true)]
	map: PathBuf,

	/// image to write; the format follows the extension: *.png, *.bmp, *.jpg
	#[arg(required = true)]
	image: PathBuf,

	/// make pixels of the transparent base color transparent (PNG and BMP only)
	#[arg(long, short)]
	transparent: bool,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let document = MapFile::open_path(&arguments.map)?.to_document()?;
	let palette = config.palette()?;

	let image = render_document(&document, &palette, arguments.transparent)
		.with_context(|| format!("rendering map {:?}", arguments.map))?;
	save_image(&image, &arguments.image)?;

	info!("rendered {:?} to {:?}", arguments.map, arguments.image);
	Ok(())
}

use anyhow::{Context, Result};
use clap::Args;
use image::imageops::FilterType;
use log::{debug, info};
use mcmap::{
	config::Config,
	container::MapFile,
	core::{ApproximationMode, TileDocument},
	image::{image_to_raster, load_image},
};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// image to import: *.png, *.bmp, *.jpg
	#[arg(required = true)]
	image: PathBuf,

	/// map file to write
	#[arg(required = true)]
	map: PathBuf,

	/// how to handle colors that are not in the palette:
	/// "exact" fails, "brute" searches the nearest color,
	/// "bucket:<n>" uses a lookup table with n+1 levels per channel
	#[arg(long, short, verbatim_doc_comment)]
	mode: Option<String>,

	/// existing map file whose metadata and unknown tags are kept
	#[arg(long, short)]
	template: Option<PathBuf>,

	/// scale the image to the map size instead of failing on a size mismatch
	#[arg(long)]
	resize: bool,

	/// write raw NBT instead of gzip
	#[arg(long)]
	uncompressed: bool,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let mode = match &arguments.mode {
		Some(mode) => ApproximationMode::try_from_str(mode)?,
		None => config.mode()?,
	};

	let (template, mut document) = match &arguments.template {
		Some(template) => {
			let map = MapFile::open_path(template)?;
			let document = map.to_document()?;
			(Some(map), document)
		}
		None => (None, TileDocument::default()),
	};

	let mut image = load_image(&arguments.image)?;
	let size = (u32::from(document.width()), u32::from(document.height()));
	if arguments.resize && (image.width(), image.height()) != size {
		debug!("resizing {}x{} image to {}x{}", image.width(), image.height(), size.0, size.1);
		image = image.resize_exact(size.0, size.1, FilterType::Triangle);
	}

	let engine = config.engine(mode)?;
	let raster = image_to_raster(&image, engine.palette().alpha_color());
	document
		.from_raster(&raster, &engine, mode)
		.with_context(|| format!("importing {:?}", arguments.image))?;

	let mut map = match template {
		Some(mut map) => {
			map.update(&document)?;
			map
		}
		None => MapFile::from_document(&document)?,
	};
	map.set_compressed(!arguments.uncompressed);
	map.write_path(&arguments.map)?;

	info!("imported {:?} into {:?} with mode {mode}", arguments.image, arguments.map);
	Ok(())
}

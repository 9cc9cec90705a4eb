use anyhow::Result;
use clap::Args;
use log::info;
use mcmap::{container::MapFile, core::TileDocument};
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// map file to create, e.g. map_0.dat
	#[arg(required = true)]
	map: PathBuf,

	/// world x coordinate of the map center
	#[arg(long, default_value_t = 64, allow_negative_numbers = true)]
	x_center: i32,

	/// world z coordinate of the map center
	#[arg(long, default_value_t = 0, allow_negative_numbers = true)]
	z_center: i32,

	/// zoom level; one pixel covers zoom² blocks
	#[arg(long, default_value_t = 1)]
	zoom: u8,

	/// width of the map in pixels
	#[arg(long, default_value_t = 128)]
	width: u16,

	/// height of the map in pixels
	#[arg(long, default_value_t = 128)]
	height: u16,

	/// write raw NBT instead of gzip
	#[arg(long)]
	uncompressed: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut document = TileDocument::new(arguments.width, arguments.height);
	document.x_center = arguments.x_center;
	document.z_center = arguments.z_center;
	document.zoom_level = arguments.zoom;

	let mut map = MapFile::from_document(&document)?;
	map.set_compressed(!arguments.uncompressed);
	map.write_path(&arguments.map)?;

	info!("created empty {}x{} map {:?}", arguments.width, arguments.height, arguments.map);
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use anyhow::Result;
	use mcmap::container::MapFile;

	#[test]
	fn creates_default_map() -> Result<()> {
		let dir = assert_fs::TempDir::new()?;
		let path = dir.path().join("map_0.dat");
		run_command(vec!["mcmap", "new", path.to_str().unwrap()])?;

		let map = MapFile::open_path(&path)?;
		assert!(map.is_compressed());
		let document = map.to_document()?;
		assert_eq!((document.width(), document.height()), (128, 128));
		assert_eq!((document.x_center, document.z_center, document.zoom_level), (64, 0, 1));
		assert!(document.colors().iter().all(|c| *c == 0));
		Ok(())
	}

	#[test]
	fn creates_custom_map() -> Result<()> {
		let dir = assert_fs::TempDir::new()?;
		let path = dir.path().join("map_1.dat");
		run_command(vec![
			"mcmap",
			"new",
			"--x-center=-512",
			"--z-center",
			"256",
			"--zoom",
			"3",
			"--uncompressed",
			path.to_str().unwrap(),
		])?;

		let map = MapFile::open_path(&path)?;
		assert!(!map.is_compressed());
		let document = map.to_document()?;
		assert_eq!((document.x_center, document.z_center, document.zoom_level), (-512, 256, 3));
		Ok(())
	}
}

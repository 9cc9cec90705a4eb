mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use mcmap::config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// YAML config file with alpha color, approximation mode, bucket tables and base colors
	#[arg(long, short, global = true)]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	#[clap(alias = "convert")]
	/// Quantize an image into a map file
	Import(tools::import::Subcommand),

	/// Create an empty map file
	New(tools::new::Subcommand),

	/// Show information about a map file
	Probe(tools::probe::Subcommand),

	#[clap(alias = "export")]
	/// Render a map file to an image
	Render(tools::render::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let config = match &cli.config {
		Some(path) => Config::from_path(path)?,
		None => Config::default(),
	};

	match &cli.command {
		Commands::Import(arguments) => tools::import::run(arguments, &config),
		Commands::New(arguments) => tools::new::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments, &config),
		Commands::Render(arguments) => tools::render::run(arguments, &config),
	}
}

#![cfg(feature = "cli")]

use assert_cmd::{Command, cargo};
use predicates::str;
use rstest::rstest;
use test_utilities::BINARY_NAME;

#[test]
fn command() -> Result<(), Box<dyn std::error::Error>> {
	let mut cmd = Command::new(cargo::cargo_bin!());
	cmd.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
	Ok(())
}

#[rstest]
#[case("import", "[OPTIONS] <IMAGE> <MAP>")]
#[case("new", "[OPTIONS] <MAP>")]
#[case("probe", "[OPTIONS] <MAP>")]
#[case("render", "[OPTIONS] <MAP> <IMAGE>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) -> Result<(), Box<dyn std::error::Error>> {
	Command::new(cargo::cargo_bin!())
		.args(sub_command.split(" "))
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
	Ok(())
}

#[test]
fn version() -> Result<(), Box<dyn std::error::Error>> {
	Command::new(cargo::cargo_bin!())
		.arg("--version")
		.assert()
		.success()
		.stdout(str::starts_with(format!("mcmap {}", env!("CARGO_PKG_VERSION"))));
	Ok(())
}

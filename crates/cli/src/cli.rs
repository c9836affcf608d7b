use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sdl_hints::Platform;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "sdl-hints")]
#[command(about = "Inspect and validate SDL hint configurations")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Log debug output to stderr
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// List known hints
	List {
		/// Only hints that have an effect on this platform
		#[arg(long, value_parser = parse_platform)]
		platform: Option<Platform>,
	},
	/// Show everything known about one hint
	Describe {
		/// Registry name or SDL key
		hint: String,
	},
	/// Print the effective value of a hint
	Get {
		/// Registry name or SDL key
		hint: String,
		/// Read from the loaded SDL library instead of the environment
		#[arg(long)]
		native: bool,
	},
	/// Validate a hint file
	Check {
		/// Path to the TOML hint file
		config: PathBuf,
	},
	/// Print a hint file as environment variable assignments
	Env {
		/// Path to the TOML hint file
		config: PathBuf,
		/// Prefix each line with `export`
		#[arg(long)]
		export: bool,
	},
}

fn parse_platform(s: &str) -> Result<Platform, String> {
	s.parse()
}

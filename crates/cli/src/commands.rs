//! Subcommand implementations. Output goes to the writer passed in so the
//! commands can be exercised without a terminal.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, bail};
use sdl_hints::{HintConfig, HintDef, HintStore, Hints, MemoryStore, Platform, catalog};

use crate::cli::Command;


pub fn run(command: Command, out: &mut impl Write) -> anyhow::Result<()> {
	match command {
		Command::List { platform } => list(platform, out),
		Command::Describe { hint } => describe(&hint, out),
		Command::Get { hint, native } => {
			if native {
				let hints = sdl_hints_native::open().context("cannot read hints from SDL")?;
				get(&hints, &hint, out)
			} else {
				get(&Hints::new(MemoryStore::from_process_env()), &hint, out)
			}
		}
		Command::Check { config } => check(&config, out),
		Command::Env { config, export } => env(&config, export, out),
	}
}

fn list(platform: Option<Platform>, out: &mut impl Write) -> anyhow::Result<()> {
	let defs: Vec<&'static HintDef> = catalog::all()
		.iter()
		.copied()
		.filter(|def| platform.is_none_or(|p| def.applies_to(p)))
		.collect();

	let name_width = defs.iter().map(|d| d.name.len()).max().unwrap_or(0);
	let key_width = defs.iter().map(|d| d.key.len()).max().unwrap_or(0);

	for def in defs {
		let default = def.default_value().unwrap_or_else(|| "-".to_string());
		writeln!(
			out,
			"{:name_width$}  {:key_width$}  {:6}  {default}",
			def.name,
			def.key,
			def.domain.type_name(),
		)?;
	}
	Ok(())
}

fn describe(name: &str, out: &mut impl Write) -> anyhow::Result<()> {
	let def = catalog::lookup(name)?;
	writeln!(out, "{}", def.key)?;
	writeln!(out, "  name:      {}", def.name)?;
	writeln!(out, "  values:    {}", def.domain.describe())?;
	match def.default_value() {
		Some(default) => writeln!(out, "  default:   {default}")?,
		None => writeln!(out, "  default:   (none)")?,
	}
	writeln!(out, "  timing:    {}", def.timing.describe())?;
	writeln!(out, "  platforms: {}", def.platforms_label())?;
	writeln!(out)?;
	writeln!(out, "  {}", def.description)?;
	Ok(())
}

fn get<S: HintStore>(hints: &Hints<S>, name: &str, out: &mut impl Write) -> anyhow::Result<()> {
	let def = catalog::lookup(name)?;
	match hints.get_raw(def.key)? {
		Some(value) => writeln!(out, "{}={value}", def.key)?,
		None => match def.default_value() {
			Some(default) => writeln!(out, "{}={default} (default)", def.key)?,
			None => writeln!(out, "{} is not set", def.key)?,
		},
	}
	Ok(())
}

fn check(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
	let config = HintConfig::load(path).with_context(|| format!("{} is not a valid hint file", path.display()))?;
	for warning in &config.warnings {
		writeln!(out, "warning: {warning}")?;
	}
	if config.entries.is_empty() {
		bail!("{} sets no hints", path.display());
	}
	writeln!(
		out,
		"{}: {} hint(s) ok, priority {:?}",
		path.display(),
		config.entries.len(),
		config.priority,
	)?;
	Ok(())
}

fn env(path: &Path, export: bool, out: &mut impl Write) -> anyhow::Result<()> {
	let config = HintConfig::load(path).with_context(|| format!("{} is not a valid hint file", path.display()))?;
	for warning in &config.warnings {
		tracing::warn!(path = %path.display(), "{warning}");
	}
	let prefix = if export { "export " } else { "" };
	for (key, value) in config.env_pairs() {
		writeln!(out, "{prefix}{key}={}", shell_quote(value))?;
	}
	Ok(())
}

/// Quotes `value` for a POSIX shell unless it is made only of safe characters.
fn shell_quote(value: &str) -> String {
	let safe = !value.is_empty()
		&& value
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ',' | ':' | '/' | '+' | '#'));
	if safe {
		return value.to_string();
	}
	format!("'{}'", value.replace('\'', r"'\''"))
}

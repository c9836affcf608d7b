//! Hint files.
//!
//! A hint file is TOML with an optional priority and a `[hints]` table keyed
//! by registry name or native key:
//!
//! ```toml
//! priority = "override"
//!
//! [hints]
//! render_scale_quality = "linear"
//! SDL_RENDER_VSYNC = true
//! mouse_double_click_radius = 16
//! ```
//!
//! Every entry is validated when the file is parsed, so applying a loaded
//! config never forwards an out-of-domain value.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog;
use crate::def::HintDef;
use crate::error::HintError;
use crate::parse;
use crate::registry::Hints;
use crate::store::{HintPriority, HintStore};

#[cfg(test)]
mod tests;

/// Errors from loading a hint file.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading the file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or structure.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// An entry names an unknown hint or holds an out-of-domain value.
	#[error(transparent)]
	Hint(#[from] HintError),

	/// The TOML value has a type hints cannot hold.
	#[error("unsupported value for hint '{key}': expected bool, integer or string, got {got}")]
	UnsupportedValue {
		/// Key as written in the file.
		key: String,
		/// TOML type name of the value.
		got: &'static str,
	},
}

/// Result type for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Non-fatal issue found while parsing a hint file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// The hint has no effect on the platform this binary targets.
	NotApplicable {
		/// Native hint key.
		key: &'static str,
		/// Platforms the hint applies to.
		platforms: String,
	},
	/// The same hint appeared under more than one spelling; the last one wins.
	Duplicate {
		/// Native hint key.
		key: &'static str,
	},
}

impl fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigWarning::NotApplicable { key, platforms } => {
				write!(f, "'{key}' has no effect on this platform (only {platforms})")
			}
			ConfigWarning::Duplicate { key } => write!(f, "'{key}' is set more than once; the last entry wins"),
		}
	}
}

/// One validated entry.
#[derive(Debug, Clone)]
pub struct ConfigEntry {
	pub def: &'static HintDef,
	/// Canonical wire value.
	pub value: String,
}

/// A parsed and validated hint file.
#[derive(Debug, Clone, Default)]
pub struct HintConfig {
	/// Priority every entry is applied with.
	pub priority: HintPriority,
	/// Entries in native key order.
	pub entries: Vec<ConfigEntry>,
	/// Non-fatal warnings encountered during parsing.
	pub warnings: Vec<ConfigWarning>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
	#[serde(default)]
	priority: HintPriority,
	#[serde(default)]
	hints: toml::Table,
}

impl HintConfig {
	/// Reads and validates a hint file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&input)?;
		tracing::debug!(
			domain = "hints",
			path = %path.display(),
			entries = config.entries.len(),
			warnings = config.warnings.len(),
			"hint file loaded",
		);
		Ok(config)
	}

	/// Parses and validates hint file contents.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Hint`] for unknown hints (with a suggestion) or
	/// out-of-domain values, and [`ConfigError::UnsupportedValue`] for TOML
	/// floats, arrays, tables and datetimes.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(input)?;
		let mut by_key: BTreeMap<&'static str, ConfigEntry> = BTreeMap::new();
		let mut warnings = Vec::new();

		for (name, value) in &raw.hints {
			let def = catalog::lookup(name)?;
			let text = match value {
				toml::Value::Boolean(b) => b.to_string(),
				toml::Value::Integer(i) => i.to_string(),
				toml::Value::String(s) => s.clone(),
				other => {
					return Err(ConfigError::UnsupportedValue {
						key: name.clone(),
						got: other.type_str(),
					});
				}
			};
			let value = parse::parse_value(def, &text)?;

			// Entries arrive in file order, so a later spelling replaces an earlier one.
			if by_key.insert(def.key, ConfigEntry { def, value }).is_some() {
				warnings.push(ConfigWarning::Duplicate { key: def.key });
			} else if !def.applies_here() {
				warnings.push(ConfigWarning::NotApplicable {
					key: def.key,
					platforms: def.platforms_label(),
				});
			}
		}

		Ok(Self {
			priority: raw.priority,
			entries: by_key.into_values().collect(),
			warnings,
		})
	}

	/// `(KEY, value)` pairs suitable for exporting as environment variables,
	/// which SDL reads as hints at startup.
	pub fn env_pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.entries.iter().map(|e| (e.def.key, e.value.as_str()))
	}
}

/// Outcome of [`Hints::apply`].
#[derive(Debug, Default)]
pub struct ApplyReport {
	/// Keys whose values were forwarded.
	pub applied: Vec<&'static str>,
	/// Entries the store refused.
	pub rejected: Vec<HintError>,
}

impl ApplyReport {
	pub fn is_complete(&self) -> bool {
		self.rejected.is_empty()
	}
}

impl<S: HintStore> Hints<S> {
	/// Forwards every entry of `config` at the config's priority.
	///
	/// Entries are already validated. Entries the store refuses (for example
	/// because an environment variable shadows them) are collected in the
	/// report rather than stopping the rest.
	pub fn apply(&self, config: &HintConfig) -> ApplyReport {
		let mut report = ApplyReport::default();
		for entry in &config.entries {
			match self.write(entry.def, &entry.value, config.priority) {
				Ok(()) => report.applied.push(entry.def.key),
				Err(err) => {
					tracing::warn!(domain = "hints", key = entry.def.key, error = %err, "hint not applied");
					report.rejected.push(err);
				}
			}
		}
		report
	}
}

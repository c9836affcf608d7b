//! Parsing and normalization of hint values.
//!
//! Shared by the typed setters, by-name access and config loading, so every
//! path writes the same canonical wire value.

use crate::def::{EnumVariant, HintDef, HintDomain};
use crate::error::HintError;


/// Validates `raw` against the hint's domain and returns the canonical wire value.
///
/// # Errors
///
/// Returns [`HintError::InvalidArgument`] if the value lies outside the domain
/// or fails the hint's validator.
pub fn parse_value(def: &HintDef, raw: &str) -> Result<String, HintError> {
	let invalid = |reason: String| HintError::InvalidArgument {
		key: def.key.to_string(),
		reason,
	};

	if raw.contains('\0') {
		return Err(invalid("value contains a NUL byte".to_string()));
	}

	let canonical = parse_value_for_domain(raw, def.domain).map_err(invalid)?;

	if let Some(validator) = def.validator {
		validator(&canonical).map_err(invalid)?;
	}

	Ok(canonical)
}

/// Normalizes a raw value for a known domain.
pub fn parse_value_for_domain(raw: &str, domain: HintDomain) -> Result<String, String> {
	match domain {
		HintDomain::Bool => parse_bool(raw).map(|b| String::from(if b { "1" } else { "0" })),
		HintDomain::Int => parse_int(raw).map(|i| i.to_string()),
		HintDomain::Enum(variants) => match_variant(variants, raw)
			.map(str::to_string)
			.ok_or_else(|| {
				let expected: Vec<_> = variants.iter().map(|v| v.value).collect();
				format!("'{raw}' is not one of {}", expected.join(", "))
			}),
		HintDomain::String => Ok(raw.to_string()),
	}
}

/// Reads a boolean as a user writes it in a hint file or on the command line.
pub fn parse_bool(value: &str) -> Result<bool, String> {
	const TRUE: &[&str] = &["1", "true", "yes", "on"];
	const FALSE: &[&str] = &["0", "false", "no", "off"];

	let word = value.trim();
	if TRUE.iter().any(|t| t.eq_ignore_ascii_case(word)) {
		Ok(true)
	} else if FALSE.iter().any(|f| f.eq_ignore_ascii_case(word)) {
		Ok(false)
	} else {
		Err(format!("'{value}' is neither on ({}) nor off ({})", TRUE.join("/"), FALSE.join("/")))
	}
}

/// Reads a decimal integer, ignoring surrounding whitespace.
pub fn parse_int(value: &str) -> Result<i64, String> {
	value
		.trim()
		.parse::<i64>()
		.map_err(|err| format!("'{value}' is not a whole number ({err})"))
}

/// Reads a boolean the way SDL does: `"0"` and `"false"` are false, anything
/// else is true, and an empty string counts as unset.
pub fn decode_bool(raw: &str) -> Option<bool> {
	if raw.is_empty() {
		return None;
	}
	Some(!(raw == "0" || raw.eq_ignore_ascii_case("false")))
}

/// Returns the canonical value of the variant `raw` names.
pub fn match_variant(variants: &[EnumVariant], raw: &str) -> Option<&'static str> {
	variants.iter().find(|v| v.matches(raw)).map(|v| v.value)
}

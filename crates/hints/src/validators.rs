//! Validators for hints whose domain is narrower than its wire type.

/// Orientation names UIKit accepts in `SDL_IOS_ORIENTATIONS`.
pub const IOS_ORIENTATIONS: &[&str] = &["LandscapeLeft", "LandscapeRight", "Portrait", "PortraitUpsideDown"];

/// Rejects negative integers.
pub fn non_negative(value: &str) -> Result<(), String> {
	match value.parse::<i64>() {
		Ok(n) if n >= 0 => Ok(()),
		Ok(n) => Err(format!("must be non-negative, got {n}")),
		Err(_) => Err(format!("'{value}' is not a whole number")),
	}
}

/// Requires a space-separated, non-empty list of iOS orientation names.
pub fn ios_orientations(value: &str) -> Result<(), String> {
	let mut seen = 0;
	for word in value.split_whitespace() {
		if !IOS_ORIENTATIONS.contains(&word) {
			return Err(format!(
				"unknown orientation '{word}' (expected {})",
				IOS_ORIENTATIONS.join(", ")
			));
		}
		seen += 1;
	}
	if seen == 0 {
		return Err("expected at least one orientation".to_string());
	}
	Ok(())
}

/// Requires a non-empty value.
pub fn non_empty(value: &str) -> Result<(), String> {
	if value.trim().is_empty() {
		Err("must not be empty".to_string())
	} else {
		Ok(())
	}
}

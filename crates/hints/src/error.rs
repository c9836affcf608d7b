use thiserror::Error;

use crate::store::StoreError;

/// Errors from reading or writing hints.
#[derive(Debug, Error)]
pub enum HintError {
	/// The value lies outside the hint's domain. Nothing was forwarded to the store.
	#[error("invalid value for hint '{key}': {reason}")]
	InvalidArgument {
		/// Native hint key.
		key: String,
		/// Why the value was rejected.
		reason: String,
	},

	/// The store reported failure.
	#[error("hint '{key}': {source}")]
	Native {
		/// Native hint key.
		key: String,
		/// The underlying store error.
		#[source]
		source: StoreError,
	},

	/// A by-name lookup did not match any known hint.
	#[error("unknown hint: {name}{}", suggestion.map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownHint {
		/// The name that was looked up.
		name: String,
		/// Closest known name, if one is close enough.
		suggestion: Option<&'static str>,
	},

	/// The hint has no value and SDL documents no default for it.
	#[error("hint '{key}' is not set and has no default")]
	Unset {
		/// Native hint key.
		key: String,
	},
}

impl HintError {
	/// Returns true if the error was raised before reaching the store.
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, HintError::InvalidArgument { .. })
	}
}

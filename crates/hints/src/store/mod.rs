//! The native hint store boundary.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

mod memory;


pub use memory::MemoryStore;

/// Priority of a hint value, matching `SDL_HintPriority`.
///
/// A value can only be replaced by one of equal or higher priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum HintPriority {
	/// Lowest priority, used for defaults an application may change later.
	Default = 0,
	/// Priority of a plain `SDL_SetHint`.
	#[default]
	Normal = 1,
	/// Wins over environment variables and all other values.
	Override = 2,
}

impl HintPriority {
	/// The `SDL_HintPriority` value passed across the native boundary.
	pub fn as_raw(self) -> i32 {
		self as i32
	}
}

/// Errors reported by a [`HintStore`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
	/// The store refused the value (an environment variable or a
	/// higher-priority value shadows it).
	#[error("value rejected: {0}")]
	Rejected(String),
	/// The native call failed.
	#[error("native call failed: {0}")]
	Call(String),
	/// The store does not implement the operation.
	#[error("operation not supported: {0}")]
	Unsupported(&'static str),
}

/// The external table mapping hint keys to string values.
///
/// Implementations forward each call straight to the underlying table. They
/// add no ordering between calls made on different threads.
pub trait HintStore: Send + Sync {
	/// Sets `key` to `value` with the given priority.
	fn set(&self, key: &str, value: &str, priority: HintPriority) -> Result<(), StoreError>;

	/// Returns the current value of `key`, or `None` if it is unset.
	fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

	/// Drops the explicit value of `key` so its environment value or default applies.
	fn reset(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: HintStore + ?Sized> HintStore for Arc<S> {
	fn set(&self, key: &str, value: &str, priority: HintPriority) -> Result<(), StoreError> {
		(**self).set(key, value, priority)
	}

	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		(**self).get(key)
	}

	fn reset(&self, key: &str) -> Result<(), StoreError> {
		(**self).reset(key)
	}
}

impl<S: HintStore + ?Sized> HintStore for &S {
	fn set(&self, key: &str, value: &str, priority: HintPriority) -> Result<(), StoreError> {
		(**self).set(key, value, priority)
	}

	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		(**self).get(key)
	}

	fn reset(&self, key: &str) -> Result<(), StoreError> {
		(**self).reset(key)
	}
}

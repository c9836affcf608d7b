use parking_lot::Mutex;
use rustc_hash::FxHashMap as HashMap;

use super::{HintPriority, HintStore, StoreError};

#[derive(Debug, Clone)]
struct Entry {
	value: String,
	priority: HintPriority,
}

/// In-process hint table following SDL2's precedence rules.
///
/// - A set at `Normal` or lower priority is refused while an environment
///   variable of the same name exists.
/// - A set below the priority of the current value is refused.
/// - A read prefers the environment unless the value was set at `Override`.
///
/// The environment is captured at construction; later changes to the
/// process environment are not seen.
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: Mutex<HashMap<String, Entry>>,
	env: HashMap<String, String>,
}

impl MemoryStore {
	/// Creates an empty store with no environment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty store whose environment is `vars`.
	pub fn with_env<I, K, V>(vars: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			entries: Mutex::default(),
			env: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}

	/// Creates an empty store seeded with the process's `SDL_*` environment variables.
	pub fn from_process_env() -> Self {
		Self::with_env(std::env::vars().filter(|(k, _)| k.starts_with("SDL_")))
	}

	/// Number of explicitly set hints.
	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}

	/// Environment value captured for `key`.
	pub fn env_value(&self, key: &str) -> Option<&str> {
		self.env.get(key).map(String::as_str)
	}
}

impl HintStore for MemoryStore {
	fn set(&self, key: &str, value: &str, priority: HintPriority) -> Result<(), StoreError> {
		if priority <= HintPriority::Normal && self.env.contains_key(key) {
			return Err(StoreError::Rejected(format!("environment variable {key} takes precedence")));
		}

		let mut entries = self.entries.lock();
		if let Some(existing) = entries.get(key)
			&& priority < existing.priority
		{
			return Err(StoreError::Rejected(format!(
				"current value was set with higher priority ({:?})",
				existing.priority
			)));
		}

		entries.insert(
			key.to_string(),
			Entry {
				value: value.to_string(),
				priority,
			},
		);
		Ok(())
	}

	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		let entries = self.entries.lock();
		let env = self.env.get(key);
		match entries.get(key) {
			Some(entry) if env.is_none() || entry.priority == HintPriority::Override => Ok(Some(entry.value.clone())),
			_ => Ok(env.cloned()),
		}
	}

	fn reset(&self, key: &str) -> Result<(), StoreError> {
		self.entries.lock().remove(key);
		Ok(())
	}
}

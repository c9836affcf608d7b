//! The hint registry and per-hint handles.

use std::fmt;

use crate::catalog;
use crate::def::HintDef;
use crate::error::HintError;
use crate::key::Hint;
use crate::parse;
use crate::store::{HintPriority, HintStore, MemoryStore};
use crate::value::HintType;

#[cfg(test)]
mod tests;

/// Every known hint over one store.
///
/// Each hint has an accessor method named after it, generated alongside its
/// definition:
///
/// ```ignore
/// let hints = Hints::in_memory();
/// hints.render_vsync().set(true)?;
/// assert!(hints.render_vsync().get()?);
/// ```
///
/// The set of hints is fixed at compile time. The registry holds no values of
/// its own: every read goes to the store.
pub struct Hints<S: HintStore = MemoryStore> {
	store: S,
}

impl Hints<MemoryStore> {
	/// Creates a registry over an empty in-process store.
	pub fn in_memory() -> Self {
		Self::new(MemoryStore::new())
	}
}

impl<S: HintStore + Default> Default for Hints<S> {
	fn default() -> Self {
		Self::new(S::default())
	}
}

impl<S: HintStore> fmt::Debug for Hints<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Hints").field("hints", &catalog::all().len()).finish_non_exhaustive()
	}
}

impl<S: HintStore> Hints<S> {
	/// Creates a registry over `store`.
	pub fn new(store: S) -> Self {
		Self { store }
	}

	/// The underlying store.
	pub fn store(&self) -> &S {
		&self.store
	}

	/// Consumes the registry, returning the store.
	pub fn into_store(self) -> S {
		self.store
	}

	/// Returns the handle for a typed hint key.
	pub fn hint<T: HintType>(&self, key: Hint<T>) -> HintHandle<'_, S, T> {
		HintHandle { hints: self, key }
	}

	/// Returns the explicit value of the hint named `name` (registry name or
	/// native key), without falling back to its default.
	pub fn get_raw(&self, name: &str) -> Result<Option<String>, HintError> {
		let def = catalog::lookup(name)?;
		self.read(def)
	}

	/// Returns the value of the hint named `name`, falling back to its default.
	pub fn get_effective_raw(&self, name: &str) -> Result<Option<String>, HintError> {
		let def = catalog::lookup(name)?;
		Ok(self.read(def)?.or_else(|| def.default_value()))
	}

	/// Validates `value` and sets the hint named `name` at normal priority.
	pub fn set_raw(&self, name: &str, value: &str) -> Result<(), HintError> {
		self.set_raw_with_priority(name, value, HintPriority::Normal)
	}

	/// Validates `value` and sets the hint named `name`.
	pub fn set_raw_with_priority(&self, name: &str, value: &str, priority: HintPriority) -> Result<(), HintError> {
		let def = catalog::lookup(name)?;
		let canonical = parse::parse_value(def, value)?;
		self.write(def, &canonical, priority)
	}

	/// Resets the hint named `name`.
	pub fn reset_raw(&self, name: &str) -> Result<(), HintError> {
		let def = catalog::lookup(name)?;
		self.clear(def)
	}

	/// Every known hint with its current explicit value.
	pub fn snapshot(&self) -> Result<Vec<(&'static HintDef, Option<String>)>, HintError> {
		catalog::all()
			.iter()
			.map(|&def| Ok((def, self.read(def)?)))
			.collect()
	}

	pub(crate) fn read(&self, def: &'static HintDef) -> Result<Option<String>, HintError> {
		self.store.get(def.key).map_err(|source| HintError::Native {
			key: def.key.to_string(),
			source,
		})
	}

	/// Forwards an already validated wire value.
	pub(crate) fn write(&self, def: &'static HintDef, value: &str, priority: HintPriority) -> Result<(), HintError> {
		if !def.applies_here() {
			tracing::debug!(
				domain = "hints",
				key = def.key,
				platforms = %def.platforms_label(),
				"hint has no effect on this platform",
			);
		}

		self.store
			.set(def.key, value, priority)
			.map_err(|source| HintError::Native {
				key: def.key.to_string(),
				source,
			})?;

		tracing::debug!(domain = "hints", key = def.key, value, ?priority, "hint set");
		Ok(())
	}

	pub(crate) fn clear(&self, def: &'static HintDef) -> Result<(), HintError> {
		self.store.reset(def.key).map_err(|source| HintError::Native {
			key: def.key.to_string(),
			source,
		})?;
		tracing::debug!(domain = "hints", key = def.key, "hint reset");
		Ok(())
	}
}

/// Access to one hint through a registry.
pub struct HintHandle<'a, S: HintStore, T: HintType> {
	hints: &'a Hints<S>,
	key: Hint<T>,
}

impl<S: HintStore, T: HintType> Clone for HintHandle<'_, S, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<S: HintStore, T: HintType> Copy for HintHandle<'_, S, T> {}

impl<S: HintStore, T: HintType> fmt::Debug for HintHandle<'_, S, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("HintHandle").field(&self.key.key()).finish()
	}
}

impl<S: HintStore, T: HintType> HintHandle<'_, S, T> {
	/// The hint's definition. The same instance for the life of the process.
	pub fn def(&self) -> &'static HintDef {
		self.key.def()
	}

	/// The typed key.
	pub fn key(&self) -> Hint<T> {
		self.key
	}

	/// Returns the current value, or the documented default if the hint is unset.
	///
	/// A stored value outside the domain (typically from an environment
	/// variable) is logged and treated as unset.
	///
	/// # Errors
	///
	/// Returns [`HintError::Unset`] when the hint is unset and has no default,
	/// or [`HintError::Native`] if the store fails.
	pub fn get(&self) -> Result<T, HintError> {
		if let Some(value) = self.get_explicit()? {
			return Ok(value);
		}
		self.default_value().ok_or_else(|| HintError::Unset {
			key: self.def().key.to_string(),
		})
	}

	/// Returns the current value, ignoring the default.
	///
	/// A stored value that does not decode, or that the hint's validator
	/// rejects, is logged and treated as unset.
	pub fn get_explicit(&self) -> Result<Option<T>, HintError> {
		let def = self.def();
		let Some(raw) = self.hints.read(def)? else {
			return Ok(None);
		};
		let Some(decoded) = T::decode(&raw) else {
			if !raw.is_empty() {
				tracing::warn!(
					domain = "hints",
					key = def.key,
					value = %raw,
					expected = %def.domain.describe(),
					"hint value outside its domain; ignoring it",
				);
			}
			return Ok(None);
		};

		let Some(validate) = def.validator else {
			return Ok(Some(decoded));
		};
		match validate(&decoded.encode()) {
			Ok(()) => Ok(Some(decoded)),
			Err(reason) => {
				tracing::warn!(
					domain = "hints",
					key = def.key,
					value = %raw,
					%reason,
					"hint value outside its domain; ignoring it",
				);
				Ok(None)
			}
		}
	}

	/// The documented default, if any.
	pub fn default_value(&self) -> Option<T> {
		self.def().default_value().and_then(|raw| T::decode(&raw))
	}

	/// Returns true if the store holds a value for this hint.
	pub fn is_set(&self) -> Result<bool, HintError> {
		Ok(self.hints.read(self.def())?.is_some())
	}

	/// Sets the hint at normal priority.
	pub fn set(&self, value: T) -> Result<(), HintError> {
		self.set_with_priority(value, HintPriority::Normal)
	}

	/// Sets the hint with an explicit priority.
	pub fn set_with_priority(&self, value: T, priority: HintPriority) -> Result<(), HintError> {
		self.set_str_with_priority(&value.encode(), priority)
	}

	/// Validates a raw string against the domain and sets it at normal priority.
	///
	/// # Errors
	///
	/// Returns [`HintError::InvalidArgument`] without touching the store if
	/// `raw` is outside the domain.
	pub fn set_str(&self, raw: &str) -> Result<(), HintError> {
		self.set_str_with_priority(raw, HintPriority::Normal)
	}

	/// Validates a raw string against the domain and sets it.
	pub fn set_str_with_priority(&self, raw: &str, priority: HintPriority) -> Result<(), HintError> {
		let def = self.def();
		let canonical = parse::parse_value(def, raw)?;
		self.hints.write(def, &canonical, priority)
	}

	/// Drops the explicit value so the environment value or default applies again.
	pub fn reset(&self) -> Result<(), HintError> {
		self.hints.clear(self.def())
	}
}

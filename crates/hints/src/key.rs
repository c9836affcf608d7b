use std::fmt;
use std::marker::PhantomData;

use crate::def::HintDef;
use crate::value::HintType;

/// Typed handle to a hint definition with compile-time value type.
pub struct Hint<T: HintType> {
	def: &'static HintDef,
	_marker: PhantomData<fn() -> T>,
}

impl<T: HintType> Clone for Hint<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: HintType> Copy for Hint<T> {}

impl<T: HintType> Hint<T> {
	/// Creates a typed hint key from a static definition.
	pub const fn new(def: &'static HintDef) -> Self {
		Self {
			def,
			_marker: PhantomData,
		}
	}

	/// Returns the underlying definition.
	pub fn def(&self) -> &'static HintDef {
		self.def
	}

	/// Returns the native hint key.
	pub fn key(&self) -> &'static str {
		self.def.key
	}

	/// Returns the registry name.
	pub fn name(&self) -> &'static str {
		self.def.name
	}
}

impl<T: HintType> fmt::Debug for Hint<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Hint").field(&self.def.key).finish()
	}
}

use std::ffi::{CStr, CString, c_char, c_int};
use std::fmt;
use std::path::{Path, PathBuf};

use libloading::Library;
use sdl_hints::{HintPriority, HintStore, StoreError};
use thiserror::Error;

use crate::library::library_candidates;

#[cfg(test)]
mod tests;

type SetHintWithPriorityFn = unsafe extern "C" fn(*const c_char, *const c_char, c_int) -> c_int;
type GetHintFn = unsafe extern "C" fn(*const c_char) -> *const c_char;
type ResetHintFn = unsafe extern "C" fn(*const c_char) -> c_int;
type GetVersionFn = unsafe extern "C" fn(*mut SdlVersion);

/// Errors opening the SDL library.
#[derive(Debug, Error)]
pub enum LoadError {
	/// None of the candidate libraries could be loaded.
	#[error("SDL2 library not found (tried {})", tried.join(", "))]
	NotFound {
		/// Candidates that were tried.
		tried: Vec<String>,
	},

	/// A specific library failed to load.
	#[error("failed to load {path}: {source}")]
	Open {
		path: PathBuf,
		#[source]
		source: libloading::Error,
	},

	/// The library lacks a required entry point.
	#[error("{path} has no symbol {symbol}: {source}")]
	Symbol {
		path: PathBuf,
		symbol: &'static str,
		#[source]
		source: libloading::Error,
	},
}

/// Version reported by `SDL_GetVersion`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SdlVersion {
	pub major: u8,
	pub minor: u8,
	pub patch: u8,
}

impl fmt::Display for SdlVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
	}
}

/// SDL's global hint table, reached through a dynamically loaded library.
///
/// Every call goes straight to SDL. SDL's hint functions may be called from
/// any thread; there is no ordering between a set on one thread and a get on
/// another.
pub struct SdlStore {
	set_hint: SetHintWithPriorityFn,
	get_hint: GetHintFn,
	reset_hint: Option<ResetHintFn>,
	version: SdlVersion,
	path: PathBuf,
	// Keeps the function pointers above valid.
	_lib: Library,
}

impl fmt::Debug for SdlStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SdlStore")
			.field("path", &self.path)
			.field("version", &self.version)
			.field("reset", &self.reset_hint.is_some())
			.finish()
	}
}

impl SdlStore {
	/// Loads the first SDL library found among [`library_candidates`].
	pub fn load() -> Result<Self, LoadError> {
		let candidates = library_candidates();
		for path in &candidates {
			match Self::load_from(path) {
				Ok(store) => return Ok(store),
				Err(err @ LoadError::Symbol { .. }) => return Err(err),
				Err(err) => tracing::debug!(domain = "hints", error = %err, "SDL candidate skipped"),
			}
		}
		Err(LoadError::NotFound {
			tried: candidates.iter().map(|p| p.display().to_string()).collect(),
		})
	}

	/// Loads SDL from an explicit path or library name.
	pub fn load_from(path: impl AsRef<Path>) -> Result<Self, LoadError> {
		let path = path.as_ref().to_path_buf();

		// Safety: loading SDL runs only its library constructors, which have no
		// preconditions.
		let lib = unsafe { Library::new(&path) }.map_err(|source| LoadError::Open {
			path: path.clone(),
			source,
		})?;

		let symbol_error = |symbol: &'static str| {
			let path = path.clone();
			move |source| LoadError::Symbol { path, symbol, source }
		};

		// Safety: the signatures match SDL2's public headers.
		let (set_hint, get_hint, reset_hint, get_version) = unsafe {
			let set_hint = *lib
				.get::<SetHintWithPriorityFn>(b"SDL_SetHintWithPriority\0")
				.map_err(symbol_error("SDL_SetHintWithPriority"))?;
			let get_hint = *lib
				.get::<GetHintFn>(b"SDL_GetHint\0")
				.map_err(symbol_error("SDL_GetHint"))?;
			// Added in SDL 2.24.
			let reset_hint = lib.get::<ResetHintFn>(b"SDL_ResetHint\0").ok().map(|s| *s);
			let get_version = lib.get::<GetVersionFn>(b"SDL_GetVersion\0").ok().map(|s| *s);
			(set_hint, get_hint, reset_hint, get_version)
		};

		let mut version = SdlVersion::default();
		if let Some(get_version) = get_version {
			// Safety: SDL_GetVersion writes three bytes into the struct it is given.
			unsafe { get_version(&mut version) };
		}

		tracing::info!(
			domain = "hints",
			path = %path.display(),
			%version,
			reset = reset_hint.is_some(),
			"SDL library loaded",
		);

		Ok(Self {
			set_hint,
			get_hint,
			reset_hint,
			version,
			path,
			_lib: lib,
		})
	}

	/// Version of the loaded library, or `0.0.0` if it does not report one.
	pub fn version(&self) -> SdlVersion {
		self.version
	}

	/// Path or name the library was loaded from.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Returns true if the library supports [`HintStore::reset`].
	pub fn supports_reset(&self) -> bool {
		self.reset_hint.is_some()
	}
}

fn c_string(what: &str, value: &str) -> Result<CString, StoreError> {
	CString::new(value).map_err(|_| StoreError::Call(format!("{what} contains a NUL byte")))
}

impl HintStore for SdlStore {
	fn set(&self, key: &str, value: &str, priority: HintPriority) -> Result<(), StoreError> {
		let key = c_string("key", key)?;
		let value = c_string("value", value)?;
		// Safety: both pointers are valid NUL-terminated strings for the call;
		// SDL copies them.
		let accepted = unsafe { (self.set_hint)(key.as_ptr(), value.as_ptr(), priority.as_raw()) };
		if accepted == 0 {
			return Err(StoreError::Rejected(
				"an environment variable or higher-priority value takes precedence".to_string(),
			));
		}
		Ok(())
	}

	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		let key = c_string("key", key)?;
		// Safety: SDL returns NULL or a NUL-terminated string owned by its hint
		// table, which is copied before any other SDL call can free it.
		let value = unsafe {
			let ptr = (self.get_hint)(key.as_ptr());
			if ptr.is_null() {
				None
			} else {
				Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
			}
		};
		Ok(value)
	}

	fn reset(&self, key: &str) -> Result<(), StoreError> {
		let Some(reset_hint) = self.reset_hint else {
			return Err(StoreError::Unsupported("SDL_ResetHint (requires SDL 2.24)"));
		};
		let key = c_string("key", key)?;
		// Safety: `key` is a valid NUL-terminated string for the call. A false
		// result only means the hint had no value.
		unsafe { reset_hint(key.as_ptr()) };
		Ok(())
	}
}

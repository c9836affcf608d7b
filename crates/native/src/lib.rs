//! SDL2-backed hint store.
//!
//! SDL is loaded at runtime, so nothing links against it at build time and a
//! missing library surfaces as a [`LoadError`] when the store is opened.
//!
//! ```ignore
//! let hints = sdl_hints_native::open()?;
//! hints.render_vsync().set(true)?;
//! ```

use sdl_hints::Hints;

mod library;
mod store;

pub use library::{LIBRARY_ENV, library_candidates};
pub use store::{LoadError, SdlStore, SdlVersion};

/// Opens the SDL library and returns a registry over its hint table.
///
/// # Errors
///
/// Returns [`LoadError`] if no SDL2 library can be loaded or it lacks the
/// hint entry points.
pub fn open() -> Result<Hints<SdlStore>, LoadError> {
	Ok(Hints::new(SdlStore::load()?))
}

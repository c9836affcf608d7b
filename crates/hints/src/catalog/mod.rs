//! The fixed set of known hints.
//!
//! Every hint is declared once with [`hint!`] in one of the submodules below,
//! grouped by the SDL subsystem that reads it.

use std::sync::OnceLock;

use crate::def::HintDef;
use crate::error::HintError;

mod android;
mod apple;
mod app;
mod emscripten;
mod input;
mod mouse;
mod render;
mod video;


pub use render::{RenderDriver, RenderLogicalSizeMode, RenderScaleQuality};
pub use video::FramebufferAcceleration;

/// Typed handles for every known hint.
///
/// ```ignore
/// use sdl_hints::keys;
///
/// assert_eq!(keys::RENDER_VSYNC.key(), "SDL_RENDER_VSYNC");
/// ```
pub mod keys {
	pub use super::android::*;
	pub use super::app::*;
	pub use super::apple::*;
	pub use super::emscripten::*;
	pub use super::input::*;
	pub use super::mouse::*;
	pub use super::render::*;
	pub use super::video::*;
}

/// Registration record submitted by [`hint!`].
pub struct HintReg(pub &'static HintDef);
inventory::collect!(HintReg);

static SORTED: OnceLock<Vec<&'static HintDef>> = OnceLock::new();

/// Returns every known hint, sorted by native key.
pub fn all() -> &'static [&'static HintDef] {
	SORTED.get_or_init(|| {
		let mut defs: Vec<_> = inventory::iter::<HintReg>.into_iter().map(|r| r.0).collect();
		defs.sort_by_key(|d| d.key);
		defs
	})
}

/// Finds a hint by registry name or native key.
///
/// Native keys match ASCII case-insensitively, as SDL's environment lookup
/// is usually typed by hand.
pub fn find(name: &str) -> Option<&'static HintDef> {
	all()
		.iter()
		.copied()
		.find(|d| d.name == name || d.key.eq_ignore_ascii_case(name))
}

/// Like [`find`], but produces [`HintError::UnknownHint`] with a suggestion.
pub fn lookup(name: &str) -> Result<&'static HintDef, HintError> {
	find(name).ok_or_else(|| HintError::UnknownHint {
		name: name.to_string(),
		suggestion: suggest(name),
	})
}

/// Suggests a similar registry name or native key using fuzzy matching.
pub fn suggest(name: &str) -> Option<&'static str> {
	let lowered = name.to_ascii_lowercase();
	all()
		.iter()
		.flat_map(|d| [d.name, d.key])
		.map(|candidate| (candidate, strsim::levenshtein(&lowered, &candidate.to_ascii_lowercase())))
		.min_by_key(|(_, distance)| *distance)
		.filter(|(_, distance)| *distance <= 3)
		.map(|(candidate, _)| candidate)
}

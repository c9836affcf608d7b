//! Typed catalog of SDL hints.
//!
//! Hints are named, process-global configuration toggles read by SDL. This
//! crate provides:
//! - Definitions ([`HintDef`], [`HintDomain`], [`HintTiming`], [`Platform`])
//! - Typed handles for every known hint ([`keys`], [`Hint`])
//! - The registry ([`Hints`]) mediating get/set against a [`HintStore`]
//! - An in-process store emulating SDL's table ([`MemoryStore`])
//! - TOML hint files ([`HintConfig`])
//!
//! ```ignore
//! use sdl_hints::{Hints, RenderScaleQuality};
//!
//! let hints = Hints::in_memory();
//! hints.render_scale_quality().set(RenderScaleQuality::Linear)?;
//! assert_eq!(hints.render_scale_quality().get()?, RenderScaleQuality::Linear);
//! ```
//!
//! Set and get are not synchronized beyond what the store provides. For the
//! native store that means SDL's own guarantees: any thread may call in, but
//! a set on one thread is not ordered against a get on another.

#[macro_use]
mod macros;

pub mod catalog;
pub mod config;
mod def;
mod error;
mod key;
pub mod parse;
mod registry;
pub mod store;
pub mod validators;
mod value;

pub use catalog::keys;
pub use catalog::{FramebufferAcceleration, RenderDriver, RenderLogicalSizeMode, RenderScaleQuality};
pub use config::{ApplyReport, ConfigEntry, ConfigError, ConfigWarning, HintConfig};
pub use def::{EnumVariant, HintDef, HintDomain, HintTiming, HintValidator, Platform};
pub use error::HintError;
pub use key::Hint;
pub use registry::{HintHandle, Hints};
pub use store::{HintPriority, HintStore, MemoryStore, StoreError};
pub use value::HintType;

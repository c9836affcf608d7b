//! Registration macros for hints.

/// Selects the default factory, if one was given.
macro_rules! __hint_default {
	($ty:ty) => {
		None
	};
	($ty:ty, $default:expr) => {{
		fn default_value() -> String {
			<$ty as $crate::HintType>::encode(&$default)
		}
		Some(default_value as fn() -> String)
	}};
}

/// Selects the validator, if one was given.
macro_rules! __hint_validator {
	() => {
		None
	};
	($validator:path) => {
		Some($validator as $crate::HintValidator)
	};
}

/// Registers an SDL hint in the catalog.
///
/// This macro generates:
/// - A static [`HintDef`](crate::HintDef) collected into [`catalog::all`](crate::catalog::all)
/// - A public constant [`Hint`](crate::Hint) for typed references
/// - An accessor method on [`Hints`](crate::Hints) named after the hint
///
/// # Example
///
/// ```ignore
/// hint! {
///     /// Scaling filter used when a texture is copied at a different size.
///     render_scale_quality: RenderScaleQuality {
///         key: "SDL_RENDER_SCALE_QUALITY",
///         default: RenderScaleQuality::Nearest,
///         timing: ObjectCreation,
///         description: "Texture scaling filter",
///     }
/// }
///
/// hints.render_scale_quality().set(RenderScaleQuality::Linear)?;
/// ```
///
/// The `key:` field is the protocol with SDL and must match its header exactly.
macro_rules! hint {
	(
		$(#[$attr:meta])*
		$name:ident: $ty:ty {
			key: $key:literal,
			$(default: $default:expr,)?
			timing: $timing:ident,
			$(platforms: [$($platform:ident),* $(,)?],)?
			$(validate: $validator:path,)?
			description: $desc:literal $(,)?
		}
	) => {
		paste::paste! {
			#[doc(hidden)]
			pub static [<$name:upper _DEF>]: $crate::HintDef = $crate::HintDef {
				name: stringify!($name),
				key: $key,
				description: $desc,
				domain: <$ty as $crate::HintType>::DOMAIN,
				default: __hint_default!($ty $(, $default)?),
				timing: $crate::HintTiming::$timing,
				platforms: &[$($($crate::Platform::$platform),*)?],
				validator: __hint_validator!($($validator)?),
			};

			inventory::submit! {
				$crate::catalog::HintReg(&[<$name:upper _DEF>])
			}

			$(#[$attr])*
			pub const [<$name:upper>]: $crate::Hint<$ty> = $crate::Hint::new(&[<$name:upper _DEF>]);

			impl<S: $crate::HintStore> $crate::Hints<S> {
				$(#[$attr])*
				pub fn $name(&self) -> $crate::HintHandle<'_, S, $ty> {
					self.hint([<$name:upper>])
				}
			}
		}
	};
}

/// Declares an enumerated hint value type.
///
/// Each variant names its canonical wire value followed by the aliases SDL
/// also accepts: `Nearest = "nearest" | "0"`.
macro_rules! hint_enum {
	(
		$(#[$attr:meta])*
		pub enum $name:ident {
			$(
				$(#[$vattr:meta])*
				$variant:ident = $value:literal $(| $alias:literal)*
			),+ $(,)?
		}
	) => {
		$(#[$attr])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum $name {
			$($(#[$vattr])* $variant,)+
		}

		impl $name {
			/// Accepted wire values, in declaration order.
			pub const VARIANTS: &'static [$crate::EnumVariant] = &[
				$($crate::EnumVariant { value: $value, aliases: &[$($alias),*] },)+
			];

			const ALL: &'static [$name] = &[$($name::$variant,)+];

			/// Canonical wire value.
			pub fn as_str(self) -> &'static str {
				match self {
					$($name::$variant => $value,)+
				}
			}
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl $crate::value::sealed::Sealed for $name {}

		impl $crate::HintType for $name {
			const DOMAIN: $crate::HintDomain = $crate::HintDomain::Enum(Self::VARIANTS);

			fn encode(&self) -> String {
				self.as_str().to_string()
			}

			fn decode(raw: &str) -> Option<Self> {
				let canonical = $crate::parse::match_variant(Self::VARIANTS, raw)?;
				Self::ALL.iter().copied().find(|v| v.as_str() == canonical)
			}
		}
	};
}

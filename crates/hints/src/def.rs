use std::fmt;
use std::str::FromStr;

/// Extra check applied to the canonical wire value of integer and string hints.
pub type HintValidator = fn(&str) -> Result<(), String>;

/// One accepted value of an enumerated hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumVariant {
	/// Canonical wire value written to the store.
	pub value: &'static str,
	/// Other spellings SDL accepts for the same value.
	pub aliases: &'static [&'static str],
}

impl EnumVariant {
	/// Returns true if `raw` names this variant (ASCII case-insensitive).
	pub fn matches(&self, raw: &str) -> bool {
		self.value.eq_ignore_ascii_case(raw) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(raw))
	}
}

/// Value domain of a hint, which fixes its wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintDomain {
	/// `"0"` or `"1"`.
	Bool,
	/// Decimal integer.
	Int,
	/// One of a fixed set of strings.
	Enum(&'static [EnumVariant]),
	/// Free-form string.
	String,
}

impl HintDomain {
	/// Short type name used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			HintDomain::Bool => "bool",
			HintDomain::Int => "int",
			HintDomain::Enum(_) => "enum",
			HintDomain::String => "string",
		}
	}

	/// Human-readable domain, listing the canonical values of enumerations.
	pub fn describe(&self) -> String {
		match self {
			HintDomain::Enum(variants) => variants.iter().map(|v| v.value).collect::<Vec<_>>().join("|"),
			other => other.type_name().to_string(),
		}
	}
}

/// When SDL reads a hint.
///
/// Recorded for documentation; nothing here delays or re-applies a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTiming {
	/// Read on every use; changes apply immediately.
	Runtime,
	/// Read when the owning subsystem is initialized.
	SubsystemInit,
	/// Read when the affected object (window, renderer, texture) is created.
	ObjectCreation,
}

impl HintTiming {
	/// One-line summary of when a new value takes effect.
	pub fn describe(self) -> &'static str {
		match self {
			HintTiming::Runtime => "applies immediately",
			HintTiming::SubsystemInit => "applies at next subsystem init",
			HintTiming::ObjectCreation => "applies to objects created afterwards",
		}
	}
}

/// Platforms a hint can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
	/// Android.
	Android,
	/// iOS and iPadOS.
	Ios,
	/// Apple TV.
	Tvos,
	/// macOS.
	MacOs,
	/// Windows, including WinRT.
	Windows,
	/// Linux under X11 or Wayland.
	Linux,
	/// Emscripten in a browser.
	Emscripten,
}

impl Platform {
	/// Every platform, in declaration order.
	pub const ALL: &'static [Platform] = &[
		Platform::Android,
		Platform::Ios,
		Platform::Tvos,
		Platform::MacOs,
		Platform::Windows,
		Platform::Linux,
		Platform::Emscripten,
	];

	/// The platform this binary was compiled for, if it is one SDL hints distinguish.
	pub fn current() -> Option<Platform> {
		if cfg!(target_os = "android") {
			Some(Platform::Android)
		} else if cfg!(target_os = "ios") {
			Some(Platform::Ios)
		} else if cfg!(target_os = "tvos") {
			Some(Platform::Tvos)
		} else if cfg!(target_os = "macos") {
			Some(Platform::MacOs)
		} else if cfg!(target_os = "windows") {
			Some(Platform::Windows)
		} else if cfg!(target_os = "linux") {
			Some(Platform::Linux)
		} else if cfg!(target_os = "emscripten") {
			Some(Platform::Emscripten)
		} else {
			None
		}
	}

	/// Lowercase name, as accepted by `FromStr`.
	pub fn as_str(self) -> &'static str {
		match self {
			Platform::Android => "android",
			Platform::Ios => "ios",
			Platform::Tvos => "tvos",
			Platform::MacOs => "macos",
			Platform::Windows => "windows",
			Platform::Linux => "linux",
			Platform::Emscripten => "emscripten",
		}
	}
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Platform {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Platform::ALL
			.iter()
			.copied()
			.find(|p| p.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| {
				let known: Vec<_> = Platform::ALL.iter().map(|p| p.as_str()).collect();
				format!("unknown platform '{s}' (expected one of {})", known.join(", "))
			})
	}
}

/// Definition of one SDL hint.
pub struct HintDef {
	/// Registry name used for typed accessors (e.g. `render_scale_quality`).
	pub name: &'static str,
	/// Native hint key, byte-for-byte as SDL expects it.
	pub key: &'static str,
	/// Human-readable description.
	pub description: &'static str,
	/// Value domain and wire encoding.
	pub domain: HintDomain,
	/// Documented default in wire encoding, if SDL has one.
	pub default: Option<fn() -> String>,
	/// When SDL reads the hint.
	pub timing: HintTiming,
	/// Platforms on which the hint has an effect; empty means all.
	pub platforms: &'static [Platform],
	/// Additional constraint on the canonical value.
	pub validator: Option<HintValidator>,
}

impl HintDef {
	/// The documented default in wire encoding.
	pub fn default_value(&self) -> Option<String> {
		self.default.map(|f| f())
	}

	/// Returns true if the hint has an effect on `platform`.
	pub fn applies_to(&self, platform: Platform) -> bool {
		self.platforms.is_empty() || self.platforms.contains(&platform)
	}

	/// Returns true if the hint has an effect on the platform this binary targets.
	pub fn applies_here(&self) -> bool {
		match Platform::current() {
			Some(platform) => self.applies_to(platform),
			None => self.platforms.is_empty(),
		}
	}

	/// Comma-separated platform list, or `all`.
	pub fn platforms_label(&self) -> String {
		if self.platforms.is_empty() {
			return "all".to_string();
		}
		self.platforms.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ")
	}
}

impl fmt::Debug for HintDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HintDef")
			.field("name", &self.name)
			.field("key", &self.key)
			.field("domain", &self.domain)
			.field("timing", &self.timing)
			.field("platforms", &self.platforms)
			.finish()
	}
}

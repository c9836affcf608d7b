use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::store::MemoryStore;
use crate::{RenderScaleQuality, StoreError, keys};

const SAMPLE: &str = r#"
priority = "override"

[hints]
render_scale_quality = "linear"
SDL_RENDER_VSYNC = true
mouse_double_click_radius = 16
app_name = "demo"
"#;

#[test]
fn parses_and_normalizes_entries() {
	let config = HintConfig::from_toml_str(SAMPLE).unwrap();
	assert_eq!(config.priority, HintPriority::Override);
	let pairs: Vec<_> = config.env_pairs().collect();
	assert_eq!(
		pairs,
		vec![
			("SDL_APP_NAME", "demo"),
			("SDL_MOUSE_DOUBLE_CLICK_RADIUS", "16"),
			("SDL_RENDER_SCALE_QUALITY", "linear"),
			("SDL_RENDER_VSYNC", "1"),
		]
	);
}

#[test]
fn empty_file_is_valid() {
	let config = HintConfig::from_toml_str("").unwrap();
	assert_eq!(config.priority, HintPriority::Normal);
	assert!(config.entries.is_empty());
	assert!(config.warnings.is_empty());
}

#[test]
fn unknown_hint_suggests_a_name() {
	let err = HintConfig::from_toml_str("[hints]\nrender_scale_qualty = \"best\"\n").unwrap_err();
	assert_eq!(
		err.to_string(),
		"unknown hint: render_scale_qualty (did you mean 'render_scale_quality'?)"
	);
}

#[test]
fn out_of_domain_value_is_rejected() {
	let err = HintConfig::from_toml_str("[hints]\nrender_scale_quality = \"bicubic\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Hint(ref e) if e.is_invalid_argument()), "{err}");
}

#[test]
fn float_values_are_unsupported() {
	let err = HintConfig::from_toml_str("[hints]\ntimer_resolution = 1.5\n").unwrap_err();
	assert!(matches!(err, ConfigError::UnsupportedValue { ref got, .. } if *got == "float"), "{err}");
}

#[test]
fn unknown_top_level_fields_are_rejected() {
	let err = HintConfig::from_toml_str("prority = \"override\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[rstest]
#[case::native_key_first("[hints]\nSDL_RENDER_VSYNC = false\nrender_vsync = true\n", "1")]
#[case::registry_name_first("[hints]\nrender_vsync = true\nSDL_RENDER_VSYNC = false\n", "0")]
fn duplicate_spellings_warn_and_last_wins(#[case] input: &str, #[case] expected: &str) {
	let config = HintConfig::from_toml_str(input).unwrap();
	assert_eq!(config.entries.len(), 1);
	assert_eq!(config.entries[0].value, expected);
	assert_eq!(config.warnings, vec![ConfigWarning::Duplicate { key: "SDL_RENDER_VSYNC" }]);
}

#[test]
fn duplicate_platform_specific_hint_warns_once() {
	let config =
		HintConfig::from_toml_str("[hints]\nemscripten_asyncify = false\nSDL_EMSCRIPTEN_ASYNCIFY = true\n").unwrap();
	let not_applicable = config
		.warnings
		.iter()
		.filter(|w| matches!(w, ConfigWarning::NotApplicable { .. }))
		.count();
	let expected = usize::from(!keys::EMSCRIPTEN_ASYNCIFY.def().applies_here());
	assert_eq!(not_applicable, expected);
	assert_eq!(config.entries[0].value, "1");
}

#[test]
fn platform_specific_hints_warn_elsewhere() {
	let config = HintConfig::from_toml_str("[hints]\nemscripten_asyncify = false\n").unwrap();
	let warned = config
		.warnings
		.iter()
		.any(|w| matches!(w, ConfigWarning::NotApplicable { key: "SDL_EMSCRIPTEN_ASYNCIFY", .. }));
	assert_eq!(warned, !keys::EMSCRIPTEN_ASYNCIFY.def().applies_here());
}

#[test]
fn apply_forwards_every_entry() {
	let hints = Hints::in_memory();
	let config = HintConfig::from_toml_str(SAMPLE).unwrap();
	let report = hints.apply(&config);
	assert!(report.is_complete());
	assert_eq!(report.applied.len(), 4);
	assert_eq!(hints.render_scale_quality().get().unwrap(), RenderScaleQuality::Linear);
	assert_eq!(hints.mouse_double_click_radius().get().unwrap(), 16);
}

#[test]
fn apply_collects_rejections() {
	let hints = Hints::new(MemoryStore::with_env([("SDL_RENDER_VSYNC", "0")]));
	let config = HintConfig::from_toml_str("[hints]\nrender_vsync = true\nbmp_save_legacy_format = true\n").unwrap();
	let report = hints.apply(&config);
	assert_eq!(report.applied, vec!["SDL_BMP_SAVE_LEGACY_FORMAT"]);
	assert_eq!(report.rejected.len(), 1);
	assert!(matches!(
		report.rejected[0],
		HintError::Native { source: StoreError::Rejected(_), .. }
	));
	assert!(!hints.render_vsync().get().unwrap());
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(SAMPLE.as_bytes()).unwrap();
	let config = HintConfig::load(file.path()).unwrap();
	assert_eq!(config.entries.len(), 4);
}

#[test]
fn load_reports_missing_file() {
	let err = HintConfig::load("/nonexistent/hints.toml").unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
}

use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use super::*;
use crate::store::StoreError;
use crate::{RenderDriver, RenderScaleQuality, keys};

/// Records every call before delegating to a [`MemoryStore`].
#[derive(Default)]
struct RecordingStore {
	inner: MemoryStore,
	sets: Mutex<Vec<(String, String)>>,
}

impl RecordingStore {
	fn sets(&self) -> Vec<(String, String)> {
		self.sets.lock().clone()
	}
}

impl HintStore for RecordingStore {
	fn set(&self, key: &str, value: &str, priority: HintPriority) -> Result<(), StoreError> {
		self.sets.lock().push((key.to_string(), value.to_string()));
		self.inner.set(key, value, priority)
	}

	fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
		self.inner.get(key)
	}

	fn reset(&self, key: &str) -> Result<(), StoreError> {
		self.inner.reset(key)
	}
}

struct FailingStore;

impl HintStore for FailingStore {
	fn set(&self, _: &str, _: &str, _: HintPriority) -> Result<(), StoreError> {
		Err(StoreError::Call("video subsystem not initialized".to_string()))
	}

	fn get(&self, _: &str) -> Result<Option<String>, StoreError> {
		Err(StoreError::Call("SDL_GetHint unavailable".to_string()))
	}

	fn reset(&self, _: &str) -> Result<(), StoreError> {
		Err(StoreError::Unsupported("SDL_ResetHint"))
	}
}

#[test]
fn get_returns_default_when_unset() {
	let hints = Hints::in_memory();
	assert_eq!(hints.render_scale_quality().get().unwrap(), RenderScaleQuality::Nearest);
	assert!(hints.mouse_relative_scaling().get().unwrap());
	assert!(!hints.render_vsync().get().unwrap());
	assert_eq!(hints.mouse_double_click_radius().get().unwrap(), 32);
	assert_eq!(hints.emscripten_keyboard_element().get().unwrap(), "#window");
}

#[test]
fn get_without_default_is_unset() {
	let hints = Hints::in_memory();
	let err = hints.render_driver().get().unwrap_err();
	assert!(matches!(err, HintError::Unset { ref key } if key == "SDL_RENDER_DRIVER"));
	assert_eq!(hints.render_driver().get_explicit().unwrap(), None);
}

#[test]
fn scale_quality_round_trips_without_touching_others() {
	let hints = Hints::in_memory();
	hints.render_scale_quality().set_str("nearest").unwrap();
	assert_eq!(hints.render_scale_quality().get().unwrap(), RenderScaleQuality::Nearest);
	assert!(hints.render_scale_quality().is_set().unwrap());
	assert!(!hints.render_vsync().is_set().unwrap());
	assert!(hints.mouse_relative_scaling().get().unwrap());
}

#[test]
fn typed_set_writes_wire_encoding() {
	let store = RecordingStore::default();
	let hints = Hints::new(&store);
	hints.render_vsync().set(true).unwrap();
	hints.render_driver().set(RenderDriver::OpenGlEs2).unwrap();
	hints.mouse_double_click_time().set(250).unwrap();
	assert_eq!(
		store.sets(),
		vec![
			("SDL_RENDER_VSYNC".to_string(), "1".to_string()),
			("SDL_RENDER_DRIVER".to_string(), "opengles2".to_string()),
			("SDL_MOUSE_DOUBLE_CLICK_TIME".to_string(), "250".to_string()),
		]
	);
}

#[test]
fn out_of_domain_never_reaches_the_store() {
	let store = RecordingStore::default();
	let hints = Hints::new(&store);
	hints.render_scale_quality().set(RenderScaleQuality::Linear).unwrap();

	let err = hints.render_scale_quality().set_str("bicubic").unwrap_err();
	assert!(err.is_invalid_argument());
	let err = hints.render_vsync().set_str("sometimes").unwrap_err();
	assert!(err.is_invalid_argument());
	let err = hints.timer_resolution().set(-5).unwrap_err();
	assert!(err.is_invalid_argument());

	assert_eq!(store.sets().len(), 1);
	assert_eq!(hints.render_scale_quality().get().unwrap(), RenderScaleQuality::Linear);
	assert!(!hints.timer_resolution().is_set().unwrap());
}

#[test]
fn bool_aliases_read_back_canonical() {
	let hints = Hints::in_memory();
	hints.video_allow_screensaver().set_str("yes").unwrap();
	assert_eq!(hints.store().get("SDL_VIDEO_ALLOW_SCREENSAVER").unwrap().as_deref(), Some("1"));
	assert!(hints.video_allow_screensaver().get().unwrap());
}

#[test]
fn accessors_return_the_same_definition() {
	let hints = Hints::in_memory();
	assert!(std::ptr::eq(hints.render_scale_quality().def(), hints.render_scale_quality().def()));
	assert!(std::ptr::eq(hints.render_scale_quality().def(), keys::RENDER_SCALE_QUALITY.def()));
	assert!(std::ptr::eq(hints.hint(keys::RENDER_VSYNC).def(), hints.render_vsync().def()));
}

#[test]
fn out_of_domain_store_value_falls_back_to_default() {
	let hints = Hints::new(MemoryStore::with_env([("SDL_RENDER_SCALE_QUALITY", "bicubic")]));
	assert_eq!(hints.render_scale_quality().get_explicit().unwrap(), None);
	assert_eq!(hints.render_scale_quality().get().unwrap(), RenderScaleQuality::Nearest);
}

#[test]
fn store_value_failing_validation_is_ignored() {
	let hints = Hints::new(MemoryStore::with_env([
		("SDL_MOUSE_DOUBLE_CLICK_RADIUS", "-5"),
		("SDL_IOS_ORIENTATIONS", "Sideways"),
	]));
	assert_eq!(hints.mouse_double_click_radius().get_explicit().unwrap(), None);
	assert_eq!(hints.mouse_double_click_radius().get().unwrap(), 32);

	assert_eq!(hints.ios_orientations().get_explicit().unwrap(), None);
	let err = hints.ios_orientations().get().unwrap_err();
	assert!(matches!(err, HintError::Unset { ref key } if key == "SDL_IOS_ORIENTATIONS"));

	// Raw access still reports what the store holds.
	assert_eq!(hints.get_raw("SDL_MOUSE_DOUBLE_CLICK_RADIUS").unwrap().as_deref(), Some("-5"));
}

#[test]
fn store_value_passing_validation_is_returned() {
	let hints = Hints::new(MemoryStore::with_env([("SDL_IOS_ORIENTATIONS", "Portrait LandscapeLeft")]));
	assert_eq!(hints.ios_orientations().get().unwrap(), "Portrait LandscapeLeft");
}

#[test]
fn environment_value_is_read_and_override_wins() {
	let hints = Hints::new(MemoryStore::with_env([("SDL_RENDER_VSYNC", "1")]));
	assert!(hints.render_vsync().get().unwrap());

	let err = hints.render_vsync().set(false).unwrap_err();
	assert!(matches!(err, HintError::Native { source: StoreError::Rejected(_), .. }));

	hints.render_vsync().set_with_priority(false, HintPriority::Override).unwrap();
	assert!(!hints.render_vsync().get().unwrap());

	hints.render_vsync().reset().unwrap();
	assert!(hints.render_vsync().get().unwrap());
}

#[test]
fn native_failures_are_surfaced() {
	let hints = Hints::new(FailingStore);
	let err = hints.bmp_save_legacy_format().set(true).unwrap_err();
	assert_eq!(
		err.to_string(),
		"hint 'SDL_BMP_SAVE_LEGACY_FORMAT': native call failed: video subsystem not initialized"
	);
	assert!(matches!(
		hints.bmp_save_legacy_format().reset().unwrap_err(),
		HintError::Native { source: StoreError::Unsupported(_), .. }
	));
}

#[test]
fn native_read_failures_do_not_fall_back_to_defaults() {
	let hints = Hints::new(FailingStore);
	let is_read_failure =
		|err: &HintError| matches!(err, HintError::Native { source: StoreError::Call(_), .. });

	let err = hints.render_scale_quality().get().unwrap_err();
	assert_eq!(
		err.to_string(),
		"hint 'SDL_RENDER_SCALE_QUALITY': native call failed: SDL_GetHint unavailable"
	);
	assert!(is_read_failure(&hints.render_scale_quality().get_explicit().unwrap_err()));
	assert!(is_read_failure(&hints.render_vsync().is_set().unwrap_err()));
	assert!(is_read_failure(&hints.get_raw("render_driver").unwrap_err()));
	assert!(is_read_failure(&hints.get_effective_raw("render_vsync").unwrap_err()));
	assert!(is_read_failure(&hints.snapshot().unwrap_err()));
}

#[test]
fn raw_access_by_name_and_key() {
	let hints = Hints::in_memory();
	hints.set_raw("render_logical_size_mode", "1").unwrap();
	assert_eq!(hints.get_raw("SDL_RENDER_LOGICAL_SIZE_MODE").unwrap().as_deref(), Some("overscan"));
	assert_eq!(hints.get_raw("render_batching").unwrap(), None);
	assert_eq!(hints.get_effective_raw("render_vsync").unwrap().as_deref(), Some("0"));

	hints.reset_raw("render_logical_size_mode").unwrap();
	assert_eq!(hints.get_raw("render_logical_size_mode").unwrap(), None);
}

#[test]
fn raw_access_rejects_unknown_names() {
	let hints = Hints::in_memory();
	let err = hints.set_raw("render_vsnyc", "1").unwrap_err();
	assert_eq!(err.to_string(), "unknown hint: render_vsnyc (did you mean 'render_vsync'?)");
	assert!(hints.store().is_empty());
}

#[test]
fn snapshot_lists_every_hint() {
	let hints = Hints::in_memory();
	hints.app_name().set("demo".to_string()).unwrap();
	let snapshot = hints.snapshot().unwrap();
	assert_eq!(snapshot.len(), crate::catalog::all().len());
	let set: Vec<_> = snapshot.iter().filter_map(|(d, v)| v.as_ref().map(|v| (d.key, v.as_str()))).collect();
	assert_eq!(set, vec![("SDL_APP_NAME", "demo")]);
}

#[test]
fn ios_orientations_are_validated() {
	let hints = Hints::in_memory();
	hints.ios_orientations().set("LandscapeLeft LandscapeRight".to_string()).unwrap();
	let err = hints.ios_orientations().set("Sideways".to_string()).unwrap_err();
	assert!(err.is_invalid_argument());
	assert_eq!(hints.ios_orientations().get().unwrap(), "LandscapeLeft LandscapeRight");
}

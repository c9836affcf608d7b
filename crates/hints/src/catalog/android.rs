//! Android-only hints.

use crate::validators;

hint! {
	/// Main APK expansion file version consulted by `SDL_RWFromFile`.
	///
	/// Expansion files are searched only once both this and
	/// [`ANDROID_APK_EXPANSION_PATCH_FILE_VERSION`] are set.
	android_apk_expansion_main_file_version: i64 {
		key: "SDL_ANDROID_APK_EXPANSION_MAIN_FILE_VERSION",
		timing: Runtime,
		platforms: [Android],
		validate: validators::non_negative,
		description: "Android APK expansion main file version",
	}
}

hint! {
	/// Patch APK expansion file version consulted by `SDL_RWFromFile`.
	android_apk_expansion_patch_file_version: i64 {
		key: "SDL_ANDROID_APK_EXPANSION_PATCH_FILE_VERSION",
		timing: Runtime,
		platforms: [Android],
		validate: validators::non_negative,
		description: "Android APK expansion patch file version",
	}
}

hint! {
	/// Whether mouse and touch events are handled separately.
	///
	/// By default mouse events are handled as touch events and touch raises
	/// fake mouse events.
	android_separate_mouse_and_touch: bool {
		key: "SDL_ANDROID_SEPARATE_MOUSE_AND_TOUCH",
		default: false,
		timing: Runtime,
		platforms: [Android],
		description: "Treat mouse and touch events separately",
	}
}

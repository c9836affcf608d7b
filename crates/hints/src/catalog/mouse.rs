//! Mouse hints.

use crate::validators;

hint! {
	/// Whether relative motion is affected by renderer scaling.
	///
	/// By default relative mouse deltas are affected by DPI and renderer scaling.
	mouse_relative_scaling: bool {
		key: "SDL_MOUSE_RELATIVE_SCALING",
		default: true,
		timing: Runtime,
		description: "Scale relative motion with the renderer",
	}
}

hint! {
	/// Whether relative mode is emulated by warping the cursor.
	mouse_relative_mode_warp: bool {
		key: "SDL_MOUSE_RELATIVE_MODE_WARP",
		default: false,
		timing: Runtime,
		description: "Emulate relative mode with cursor warps",
	}
}

hint! {
	/// Double click time in milliseconds. Unset uses the system setting.
	mouse_double_click_time: i64 {
		key: "SDL_MOUSE_DOUBLE_CLICK_TIME",
		timing: Runtime,
		validate: validators::non_negative,
		description: "Double click time in milliseconds",
	}
}

hint! {
	/// Double click radius in pixels.
	mouse_double_click_radius: i64 {
		key: "SDL_MOUSE_DOUBLE_CLICK_RADIUS",
		default: 32_i64,
		timing: Runtime,
		validate: validators::non_negative,
		description: "Double click radius in pixels",
	}
}

hint! {
	/// Whether a click that focuses a window also passes through to it.
	mouse_focus_clickthrough: bool {
		key: "SDL_MOUSE_FOCUS_CLICKTHROUGH",
		default: false,
		timing: Runtime,
		platforms: [MacOs],
		description: "Deliver the click that focuses a window",
	}
}

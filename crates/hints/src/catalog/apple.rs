//! Apple TV and iOS hints.

use crate::validators;

hint! {
	/// Whether controllers on Apple TV generate UI events.
	///
	/// When enabled, the menu button on the remote and pause or B on a gamepad
	/// background the app.
	apple_tv_controller_ui_events: bool {
		key: "SDL_APPLE_TV_CONTROLLER_UI_EVENTS",
		default: false,
		timing: Runtime,
		platforms: [Tvos],
		description: "Apple TV controllers generate UI events",
	}
}

hint! {
	/// Whether the Apple TV remote's joystick axes follow the remote's rotation.
	apple_tv_remote_allow_rotation: bool {
		key: "SDL_APPLE_TV_REMOTE_ALLOW_ROTATION",
		default: false,
		timing: Runtime,
		platforms: [Tvos],
		description: "Apple TV remote axes follow its rotation",
	}
}

hint! {
	/// Whether the idle timer is disabled so the screen does not dim.
	ios_idle_timer_disabled: bool {
		key: "SDL_IOS_IDLE_TIMER_DISABLED",
		default: false,
		timing: Runtime,
		platforms: [Ios],
		description: "Keep the iOS screen from dimming",
	}
}

hint! {
	/// Space-separated list of allowed orientations, e.g. `"LandscapeLeft LandscapeRight"`.
	ios_orientations: String {
		key: "SDL_IOS_ORIENTATIONS",
		timing: ObjectCreation,
		platforms: [Ios],
		validate: validators::ios_orientations,
		description: "Allowed iOS interface orientations",
	}
}

//! Application identity and process-level hints.

use crate::validators;

hint! {
	/// Application name shown by the platform (e.g. power management inhibitors).
	app_name: String {
		key: "SDL_APP_NAME",
		timing: SubsystemInit,
		validate: validators::non_empty,
		description: "Application name reported to the platform",
	}
}

hint! {
	/// Name of the app reported to the audio server.
	audio_device_app_name: String {
		key: "SDL_AUDIO_DEVICE_APP_NAME",
		timing: ObjectCreation,
		validate: validators::non_empty,
		description: "Application name reported to the audio server",
	}
}

hint! {
	/// Whether SDL leaves SIGINT and SIGTERM alone.
	no_signal_handlers: bool {
		key: "SDL_NO_SIGNAL_HANDLERS",
		default: false,
		timing: SubsystemInit,
		description: "Do not install SIGINT/SIGTERM handlers",
	}
}

hint! {
	/// Windows timer resolution in milliseconds; `0` leaves the system setting.
	timer_resolution: i64 {
		key: "SDL_TIMER_RESOLUTION",
		default: 1_i64,
		timing: Runtime,
		platforms: [Windows],
		validate: validators::non_negative,
		description: "Windows timer resolution in milliseconds",
	}
}

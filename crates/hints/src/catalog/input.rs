//! Joystick and game controller hints.

hint! {
	/// Whether the accelerometer is listed as a joystick device.
	///
	/// By default SDL lists real joysticks along with the accelerometer as a
	/// 3 axis joystick.
	accelerometer_as_joystick: bool {
		key: "SDL_ACCELEROMETER_AS_JOYSTICK",
		default: true,
		timing: SubsystemInit,
		platforms: [Android, Ios, Tvos],
		description: "List the accelerometer as a joystick",
	}
}

hint! {
	/// Whether joystick events arrive while the app is in the background.
	joystick_allow_background_events: bool {
		key: "SDL_JOYSTICK_ALLOW_BACKGROUND_EVENTS",
		default: false,
		timing: Runtime,
		description: "Receive joystick events in the background",
	}
}

hint! {
	/// Extra game controller mappings, one per line, in the
	/// `GUID,name,mapping` format of `SDL_GameControllerAddMapping`.
	gamecontroller_config: String {
		key: "SDL_GAMECONTROLLERCONFIG",
		timing: SubsystemInit,
		description: "Additional game controller mappings",
	}
}

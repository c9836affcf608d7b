//! Video subsystem and window surface hints.

hint_enum! {
	/// Acceleration of the surface returned by `SDL_GetWindowSurface`.
	pub enum FramebufferAcceleration {
		/// Never accelerate.
		Disabled = "0" | "false",
		/// Accelerate with the default render driver.
		Enabled = "1" | "true",
		OpenGl = "opengl",
		OpenGlEs2 = "opengles2",
		OpenGlEs = "opengles",
		Metal = "metal",
		Direct3D = "direct3d",
		Direct3D11 = "direct3d11",
		Software = "software",
	}
}

hint! {
	/// How 3D acceleration is used for `SDL_GetWindowSurface`.
	///
	/// SDL can accelerate the window surface by streaming it through a
	/// texture. Unset lets SDL decide per platform.
	framebuffer_acceleration: FramebufferAcceleration {
		key: "SDL_FRAMEBUFFER_ACCELERATION",
		timing: ObjectCreation,
		description: "Window surface acceleration",
	}
}

hint! {
	/// Whether BMPs are saved with the 40 byte legacy header.
	///
	/// The version 4 header is needed for proper alpha support; the legacy
	/// one is readable everywhere.
	bmp_save_legacy_format: bool {
		key: "SDL_BMP_SAVE_LEGACY_FORMAT",
		default: false,
		timing: Runtime,
		description: "Save BMPs with the legacy header",
	}
}

hint! {
	/// Whether the screensaver may run while SDL video is active.
	video_allow_screensaver: bool {
		key: "SDL_VIDEO_ALLOW_SCREENSAVER",
		default: false,
		timing: SubsystemInit,
		description: "Allow the screensaver",
	}
}

hint! {
	/// Whether fullscreen windows minimize when they lose focus.
	video_minimize_on_focus_loss: bool {
		key: "SDL_VIDEO_MINIMIZE_ON_FOCUS_LOSS",
		default: false,
		timing: Runtime,
		description: "Minimize fullscreen windows on focus loss",
	}
}

hint! {
	/// Whether X11 windows answer `_NET_WM_PING`.
	video_x11_net_wm_ping: bool {
		key: "SDL_VIDEO_X11_NET_WM_PING",
		default: true,
		timing: ObjectCreation,
		platforms: [Linux],
		description: "Answer _NET_WM_PING on X11",
	}
}

hint! {
	/// Whether high-DPI windows are disabled.
	video_highdpi_disabled: bool {
		key: "SDL_VIDEO_HIGHDPI_DISABLED",
		default: false,
		timing: ObjectCreation,
		platforms: [MacOs, Ios],
		description: "Disable high-DPI windows",
	}
}

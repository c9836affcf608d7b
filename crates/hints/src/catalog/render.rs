//! 2D renderer hints.

hint_enum! {
	/// Texture scaling filter.
	pub enum RenderScaleQuality {
		/// Nearest pixel sampling.
		Nearest = "nearest" | "0",
		/// Linear filtering (supported by OpenGL and Direct3D).
		Linear = "linear" | "1",
		/// Anisotropic filtering (supported by Direct3D).
		Best = "best" | "2",
	}
}

hint_enum! {
	/// Render backend selected by `SDL_CreateRenderer`.
	pub enum RenderDriver {
		Direct3D = "direct3d",
		Direct3D11 = "direct3d11",
		Direct3D12 = "direct3d12",
		OpenGl = "opengl",
		OpenGlEs2 = "opengles2",
		OpenGlEs = "opengles",
		Metal = "metal",
		Software = "software",
	}
}

hint_enum! {
	/// How a logical size that does not match the output aspect is fitted.
	pub enum RenderLogicalSizeMode {
		/// Letterbox or pillarbox so the whole logical area is visible.
		Letterbox = "letterbox" | "0",
		/// Fill the output, cropping the logical area.
		Overscan = "overscan" | "1",
	}
}

hint! {
	/// Scaling quality used when a texture is copied at a different size.
	///
	/// Checked when a texture is created.
	render_scale_quality: RenderScaleQuality {
		key: "SDL_RENDER_SCALE_QUALITY",
		default: RenderScaleQuality::Nearest,
		timing: ObjectCreation,
		description: "Texture scaling filter",
	}
}

hint! {
	/// Preferred render driver. Unset lets SDL pick the first that works.
	render_driver: RenderDriver {
		key: "SDL_RENDER_DRIVER",
		timing: ObjectCreation,
		description: "Preferred render driver",
	}
}

hint! {
	/// Whether renderers synchronize presentation with the display refresh.
	render_vsync: bool {
		key: "SDL_RENDER_VSYNC",
		default: false,
		timing: ObjectCreation,
		description: "Sync renderer presentation to vertical refresh",
	}
}

hint! {
	/// Whether the renderer batches draw calls. Unset lets the driver decide.
	render_batching: bool {
		key: "SDL_RENDER_BATCHING",
		timing: ObjectCreation,
		description: "Batch renderer draw calls",
	}
}

hint! {
	/// Fitting mode for `SDL_RenderSetLogicalSize`.
	render_logical_size_mode: RenderLogicalSizeMode {
		key: "SDL_RENDER_LOGICAL_SIZE_MODE",
		default: RenderLogicalSizeMode::Letterbox,
		timing: Runtime,
		description: "Logical size fitting mode",
	}
}

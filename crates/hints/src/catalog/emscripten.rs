//! Emscripten-only hints.

use crate::validators;

hint! {
	/// Whether SDL yields to the browser automatically when built with asyncify.
	emscripten_asyncify: bool {
		key: "SDL_EMSCRIPTEN_ASYNCIFY",
		default: true,
		timing: Runtime,
		platforms: [Emscripten],
		description: "Give control back to the browser under asyncify",
	}
}

hint! {
	/// Element keyboard events are bound to.
	///
	/// One of `#window`, `#document`, `#screen`, `#canvas`, or any CSS
	/// selector naming an element.
	emscripten_keyboard_element: String {
		key: "SDL_EMSCRIPTEN_KEYBOARD_ELEMENT",
		default: String::from("#window"),
		timing: SubsystemInit,
		platforms: [Emscripten],
		validate: validators::non_empty,
		description: "Element receiving keyboard input",
	}
}

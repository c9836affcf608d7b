use pretty_assertions::assert_eq;

use super::*;

#[test]
fn missing_library_fails_to_open() {
	let err = SdlStore::load_from("/nonexistent/libSDL2-missing.so").unwrap_err();
	assert!(matches!(err, LoadError::Open { ref path, .. } if path.ends_with("libSDL2-missing.so")));
	assert!(err.to_string().starts_with("failed to load /nonexistent/libSDL2-missing.so"));
}

#[test]
fn not_found_lists_candidates() {
	let err = LoadError::NotFound {
		tried: vec!["libSDL2-2.0.so.0".to_string(), "libSDL2.so".to_string()],
	};
	assert_eq!(err.to_string(), "SDL2 library not found (tried libSDL2-2.0.so.0, libSDL2.so)");
}

#[test]
fn version_displays_dotted() {
	let version = SdlVersion {
		major: 2,
		minor: 30,
		patch: 1,
	};
	assert_eq!(version.to_string(), "2.30.1");
	assert!(version > SdlVersion { major: 2, minor: 24, patch: 0 });
}

#[test]
fn nul_bytes_are_rejected_before_the_call() {
	assert!(matches!(c_string("key", "SDL_\0X"), Err(StoreError::Call(_))));
	assert_eq!(c_string("key", "SDL_X").unwrap().as_bytes(), b"SDL_X");
}

use std::path::PathBuf;

/// Environment variable naming the SDL library to load instead of the defaults.
pub const LIBRARY_ENV: &str = "SDL_HINTS_LIBRARY";

#[cfg(target_os = "windows")]
const DEFAULT_NAMES: &[&str] = &["SDL2.dll"];

#[cfg(target_os = "macos")]
const DEFAULT_NAMES: &[&str] = &["libSDL2-2.0.0.dylib", "libSDL2.dylib", "SDL2.framework/SDL2"];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const DEFAULT_NAMES: &[&str] = &["libSDL2-2.0.so.0", "libSDL2-2.0.so", "libSDL2.so"];

/// Libraries to try, in order: [`LIBRARY_ENV`] if set, then the platform's usual names.
pub fn library_candidates() -> Vec<PathBuf> {
	let mut candidates = Vec::with_capacity(DEFAULT_NAMES.len() + 1);
	if let Some(path) = std::env::var_os(LIBRARY_ENV).filter(|p| !p.is_empty()) {
		candidates.push(PathBuf::from(path));
	}
	candidates.extend(DEFAULT_NAMES.iter().map(PathBuf::from));
	candidates
}

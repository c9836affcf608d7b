use clap::Parser;

use super::*;

#[test]
fn parse_list_with_platform() {
	let cli = Cli::try_parse_from(["sdl-hints", "list", "--platform", "Android"]).unwrap();
	assert_eq!(
		cli.command,
		Command::List {
			platform: Some(Platform::Android)
		}
	);
	assert!(!cli.verbose);
}

#[test]
fn parse_rejects_unknown_platform() {
	let err = Cli::try_parse_from(["sdl-hints", "list", "--platform", "amiga"]).unwrap_err();
	assert!(err.to_string().contains("unknown platform 'amiga'"), "{err}");
}

#[test]
fn parse_get_native_with_global_verbose() {
	let cli = Cli::try_parse_from(["sdl-hints", "get", "render_vsync", "--native", "-v"]).unwrap();
	assert_eq!(
		cli.command,
		Command::Get {
			hint: "render_vsync".to_string(),
			native: true
		}
	);
	assert!(cli.verbose);
}

#[test]
fn parse_env_export() {
	let cli = Cli::try_parse_from(["sdl-hints", "env", "hints.toml", "--export"]).unwrap();
	assert_eq!(
		cli.command,
		Command::Env {
			config: PathBuf::from("hints.toml"),
			export: true
		}
	);
}

#[test]
fn subcommand_is_required() {
	assert!(Cli::try_parse_from(["sdl-hints"]).is_err());
}

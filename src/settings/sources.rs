//! Ordered configuration layers. Later layers win.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use savesearch::app_dirs;

use crate::cli::CliArgs;

/// `SAVESEARCH__UI__GATING=live` sets `ui.gating`.
const ENV_PREFIX: &str = "savesearch";

const CONFIG_FILE: &str = "config.toml";
const LOCAL_FILES: [&str; 2] = [".savesearch.toml", "savesearch.toml"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ConfigLayer {
	pub(super) path: PathBuf,
	/// Explicit `--config` files must exist; discovered ones may not.
	pub(super) required: bool,
}

pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let config_dir = app_dirs::get_config_dir().ok();
	let working_dir = env::current_dir().ok();
	let layers = config_layers(cli, config_dir.as_deref(), working_dir.as_deref());
	build_from_layers(&layers)
}

/// User config, then the working directory files, then `--config` files in
/// the order given. `--no-config` keeps only the explicit files.
pub(super) fn config_layers(
	cli: &CliArgs,
	config_dir: Option<&Path>,
	working_dir: Option<&Path>,
) -> Vec<ConfigLayer> {
	let discovered = config_dir
		.map(|dir| dir.join(CONFIG_FILE))
		.into_iter()
		.chain(
			working_dir
				.into_iter()
				.flat_map(|dir| LOCAL_FILES.map(|name| dir.join(name))),
		)
		.filter(|_| !cli.no_config)
		.map(|path| ConfigLayer {
			path,
			required: false,
		});
	let explicit = cli.config.iter().map(|path| ConfigLayer {
		path: path.clone(),
		required: true,
	});
	discovered.chain(explicit).collect()
}

/// Files in order, with `SAVESEARCH__*` variables on top.
pub(super) fn build_from_layers(layers: &[ConfigLayer]) -> Result<Config> {
	let builder = layers.iter().fold(Config::builder(), |builder, layer| {
		builder.add_source(File::from(layer.path.clone()).required(layer.required))
	});
	builder
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true)
				.list_separator(","),
		)
		.build()
		.context("failed to read configuration")
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	fn cli(args: &[&str]) -> CliArgs {
		CliArgs::try_parse_from(std::iter::once("savesearch").chain(args.iter().copied())).unwrap()
	}

	#[test]
	fn discovered_files_come_before_explicit_ones() {
		let layers = config_layers(
			&cli(&["--config", "/etc/extra.toml"]),
			Some(Path::new("/home/me/.config/savesearch")),
			Some(Path::new("/work")),
		);
		let paths: Vec<_> = layers.iter().map(|layer| layer.path.clone()).collect();
		assert_eq!(
			paths,
			vec![
				PathBuf::from("/home/me/.config/savesearch/config.toml"),
				PathBuf::from("/work/.savesearch.toml"),
				PathBuf::from("/work/savesearch.toml"),
				PathBuf::from("/etc/extra.toml"),
			]
		);
		assert!(layers[..3].iter().all(|layer| !layer.required));
		assert!(layers[3].required);
	}

	#[test]
	fn no_config_keeps_only_explicit_files() {
		let layers = config_layers(
			&cli(&["--no-config", "--config", "/etc/extra.toml"]),
			Some(Path::new("/home/me/.config/savesearch")),
			Some(Path::new("/work")),
		);
		assert_eq!(layers.len(), 1);
		assert_eq!(layers[0].path, PathBuf::from("/etc/extra.toml"));
	}

	#[test]
	fn explicit_file_overrides_user_config() {
		let dir = tempdir().unwrap();
		let user_dir = dir.path().join("user");
		fs::create_dir_all(&user_dir).unwrap();
		fs::write(
			user_dir.join("config.toml"),
			"[ui]\ntitle = \"Team favorites\"\ngating = \"live\"\n",
		)
		.unwrap();
		let explicit = dir.path().join("override.toml");
		fs::write(&explicit, "[ui]\ntitle = \"Mine\"\n").unwrap();

		let layers = config_layers(
			&cli(&["--config", explicit.to_str().unwrap()]),
			Some(&user_dir),
			None,
		);
		let config = build_from_layers(&layers).unwrap();

		assert_eq!(config.get_string("ui.title").unwrap(), "Mine");
		assert_eq!(config.get_string("ui.gating").unwrap(), "live");
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let dir = tempdir().unwrap();
		let layers = config_layers(
			&cli(&["--config", dir.path().join("absent.toml").to_str().unwrap()]),
			None,
			None,
		);
		assert!(build_from_layers(&layers).is_err());
	}
}

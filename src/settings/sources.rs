use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use quire::app_dirs;

use crate::cli::CliArgs;

/// Prefix of `QUIRE__PALETTE__DEBOUNCE_MS` style overrides.
const ENV_PREFIX: &str = "quire";

/// Project-local files, checked in the working directory after the user file.
const LOCAL_FILES: [&str; 2] = [".quire.toml", "quire.toml"];

/// Stack the configuration layers, lowest precedence first: default files,
/// each `--config` file, then the environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};

	let builder = defaults
		.into_iter()
		.map(|path| File::from(path).required(false))
		.chain(cli.config.iter().map(|path| File::from(path.as_path()).required(true)))
		.fold(Config::builder(), |builder, file| builder.add_source(file));

	builder
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		)
		.build()
		.context("failed to read configuration")
}

pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|dir| LOCAL_FILES.map(|name| dir.join(name)));

	user.into_iter().chain(local).collect()
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".quire.toml")));
		assert!(files.iter().any(|path| path.ends_with("quire.toml")));
	}

	#[test]
	fn no_config_skips_default_files() {
		let cli = CliArgs::parse_from(["quire", "--no-config"]);
		assert!(build_config(&cli).is_ok());
	}
}

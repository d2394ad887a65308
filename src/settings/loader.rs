use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::ffi::OsStr;
	use std::fs;
	use std::time::Duration;

	use clap::Parser;
	use tempfile::TempDir;

	use super::*;

	#[test]
	fn config_file_values_are_resolved() {
		let dir = TempDir::new().expect("tempdir");
		let file = dir.path().join("quire.toml");
		fs::write(
			&file,
			r#"
[palette]
debounce_ms = 150
max_rendered_results = 5

[index]
path = "public/search-index.json"
excerpt_words = 8

[page]
title = "Notebook"
links = [{ label = "Archive", url = "/archive/" }]
"#,
		)
		.expect("write config");

		let log_file = dir.path().join("quire.log");
		let cli = CliArgs::parse_from([
			OsStr::new("quire"),
			OsStr::new("--no-config"),
			OsStr::new("--config"),
			file.as_os_str(),
			OsStr::new("--log-file"),
			log_file.as_os_str(),
		]);

		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.palette.debounce, Duration::from_millis(150));
		assert_eq!(resolved.palette.max_rendered_results, 5);
		assert_eq!(resolved.index.excerpt_words, 8);
		assert!(resolved.index_path.ends_with("search-index.json"));
		assert_eq!(resolved.page.title, "Notebook");
		assert_eq!(resolved.page.url, "/");
		assert_eq!(resolved.page.links[0].url, "/archive/");
		assert_eq!(resolved.log_file, log_file);
	}

	#[test]
	fn missing_explicit_config_file_fails() {
		let dir = TempDir::new().expect("tempdir");
		let missing = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from([
			OsStr::new("quire"),
			OsStr::new("--no-config"),
			OsStr::new("--config"),
			missing.as_os_str(),
		]);

		assert!(load(&cli).is_err());
	}
}

use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

mod palette;
mod site;

use palette::PaletteSection;
use site::{IndexSection, LoggingSection, PageSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	palette: PaletteSection,
	index: IndexSection,
	page: PageSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.palette.apply_cli_overrides(cli);
		self.index.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Fill defaults and validate.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			max_query_chars: detect_source(
				false,
				self.palette.max_query_chars.is_some(),
				"QUIRE__PALETTE__MAX_QUERY_CHARS",
				"",
				"palette.max_query_chars",
			),
			max_rendered_results: detect_source(
				false,
				self.palette.max_rendered_results.is_some(),
				"QUIRE__PALETTE__MAX_RENDERED_RESULTS",
				"",
				"palette.max_rendered_results",
			),
			browse_url: detect_source(
				cli.browse_url.is_some(),
				self.palette.browse_url.is_some(),
				"QUIRE__PALETTE__BROWSE_URL",
				"--browse-url",
				"palette.browse_url",
			),
			excerpt_words: detect_source(
				false,
				self.index.excerpt_words.is_some(),
				"QUIRE__INDEX__EXCERPT_WORDS",
				"",
				"index.excerpt_words",
			),
		};

		let config = ResolvedConfig {
			palette: self.palette.resolve(),
			index_path: self.index.resolve_path()?,
			index: self.index.options(),
			page: self.page.resolve(),
			log_file: self.logging.resolve_file()?,
			log_filter: self.logging.filter(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

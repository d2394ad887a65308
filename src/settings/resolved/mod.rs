use std::path::PathBuf;

use quire_palette::PaletteConfig;
use quire_static_index::StaticIndexOptions;
use quire_tui::PageSpec;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub palette: PaletteConfig,
	pub index_path: PathBuf,
	pub index: StaticIndexOptions,
	pub page: PageSpec,
	pub log_file: PathBuf,
	pub log_filter: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

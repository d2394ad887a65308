use std::time::Duration;

use quire_palette::PaletteConfig;
use serde::Deserialize;

use crate::cli::CliArgs;

/// The `[palette]` table as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PaletteSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) max_query_chars: Option<usize>,
	pub(super) max_rendered_results: Option<usize>,
	pub(super) announcement_ms: Option<u64>,
	pub(super) browse_url: Option<String>,
}

impl PaletteSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(value) = cli.browse_url.clone() {
			self.browse_url = Some(value);
		}
	}

	pub(super) fn resolve(self) -> PaletteConfig {
		let defaults = PaletteConfig::default();
		PaletteConfig {
			debounce: self
				.debounce_ms
				.map_or(defaults.debounce, Duration::from_millis),
			max_query_chars: self.max_query_chars.unwrap_or(defaults.max_query_chars),
			max_rendered_results: self
				.max_rendered_results
				.unwrap_or(defaults.max_rendered_results),
			announcement_ttl: self
				.announcement_ms
				.map_or(defaults.announcement_ttl, Duration::from_millis),
			browse_url: self.browse_url.unwrap_or(defaults.browse_url),
		}
	}
}

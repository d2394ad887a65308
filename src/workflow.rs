use std::sync::Arc;

use anyhow::Result;
use quire_palette::PaletteConfig;
use quire_static_index::StaticIndexLoader;
use quire_tui::{PageSpec, SessionOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search session.
pub(crate) struct SearchWorkflow {
	page: PageSpec,
	palette: PaletteConfig,
	loader: StaticIndexLoader,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig {
			palette,
			index_path,
			index,
			page,
			..
		} = config;

		Self {
			page,
			palette,
			loader: StaticIndexLoader::new(index_path, index),
		}
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		tracing::info!(
			index = %self.loader.path().display(),
			page = %self.page.url,
			"starting search session"
		);
		let outcome = quire_tui::run(self.page, self.palette, Arc::new(self.loader))?;
		tracing::info!(url = %outcome.url, visited = outcome.history.len(), "session ended");
		Ok(outcome)
	}
}

use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use quire::{app_dirs, logging};
use quire_static_index::StaticIndexOptions;
use quire_tui::{PageLink, PageSpec};

use crate::cli::CliArgs;

/// The `[index]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct IndexSection {
	pub(super) path: Option<PathBuf>,
	pub(super) excerpt_words: Option<usize>,
}

impl IndexSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.index.clone() {
			self.path = Some(path);
		}
	}

	pub(super) fn resolve_path(&self) -> Result<PathBuf> {
		match &self.path {
			Some(path) => Ok(path.clone()),
			None => app_dirs::default_index_file(),
		}
	}

	pub(super) fn options(&self) -> StaticIndexOptions {
		let defaults = StaticIndexOptions::default();
		StaticIndexOptions {
			excerpt_words: self.excerpt_words.unwrap_or(defaults.excerpt_words),
		}
	}
}

/// The `[page]` table describing the host page behind the palette.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PageSection {
	pub(super) title: Option<String>,
	pub(super) url: Option<String>,
	pub(super) links: Option<Vec<PageLink>>,
}

impl PageSection {
	pub(super) fn resolve(self) -> PageSpec {
		PageSpec {
			title: self.title.unwrap_or_else(|| "Search".to_string()),
			url: self.url.unwrap_or_else(|| "/".to_string()),
			links: self.links.unwrap_or_else(default_links),
		}
	}
}

fn default_links() -> Vec<PageLink> {
	vec![
		PageLink {
			label: "Blog".into(),
			url: "/blog/".into(),
		},
		PageLink {
			label: "Comics".into(),
			url: "/comics/".into(),
		},
	]
}

/// The `[logging]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) file: Option<PathBuf>,
	pub(super) filter: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn resolve_file(&self) -> Result<PathBuf> {
		match &self.file {
			Some(file) => Ok(file.clone()),
			None => logging::default_log_file(),
		}
	}

	pub(super) fn filter(&self) -> String {
		self.filter
			.clone()
			.unwrap_or_else(|| logging::DEFAULT_FILTER.to_string())
	}
}

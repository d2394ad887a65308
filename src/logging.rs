//! File logging for the terminal session.
//!
//! The TUI owns stdout, so `tracing` output goes to a file. `QUIRE_LOG`
//! overrides the configured filter.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app_dirs;

pub const LOG_ENV: &str = "QUIRE_LOG";
pub const DEFAULT_FILTER: &str = "quire=info";
pub const LOG_FILE_NAME: &str = "quire.log";

/// Log file inside the data directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Parse filter directives such as `quire=debug,quire_palette=trace`.
pub fn parse_filter(directives: &str) -> Result<EnvFilter> {
	EnvFilter::try_new(directives)
		.with_context(|| format!("invalid log filter `{directives}`"))
}

/// Install the global subscriber, appending to `file`.
pub fn initialize(file: &Path, directives: &str) -> Result<()> {
	if let Some(parent) = file.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let log = OpenOptions::new()
		.create(true)
		.append(true)
		.open(file)
		.with_context(|| format!("failed to open log file {}", file.display()))?;

	let filter = match std::env::var(LOG_ENV) {
		Ok(value) if !value.trim().is_empty() => parse_filter(&value)?,
		_ => parse_filter(directives)?,
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(Mutex::new(log))
				.with_ansi(false)
				.with_target(true),
		)
		.try_init()
		.context("failed to install log subscriber")?;

	tracing::info!(file = %file.display(), "logging initialized");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filter_directives_are_validated() {
		assert!(parse_filter(DEFAULT_FILTER).is_ok());
		assert!(parse_filter("quire=debug,quire_palette=trace").is_ok());
		assert!(parse_filter("quire=notalevel").is_err());
	}

	#[test]
	fn default_log_file_lives_in_data_dir() {
		if let Ok(file) = default_log_file() {
			assert!(file.ends_with(LOG_FILE_NAME));
		}
	}
}

use quire_palette::MAX_RENDERED_RESULTS;
use quire_palette::query::MAX_QUERY_CHARS;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let max_query_chars = config.palette.max_query_chars;
	if !(1..=MAX_QUERY_CHARS).contains(&max_query_chars) {
		return Err(ConfigError::invalid(
			"palette.max_query_chars",
			max_query_chars.to_string(),
			ConfigSources::source_for(&sources.max_query_chars, "palette.max_query_chars"),
			format!("must be between 1 and {MAX_QUERY_CHARS}"),
		));
	}

	let max_rendered = config.palette.max_rendered_results;
	if !(1..=MAX_RENDERED_RESULTS).contains(&max_rendered) {
		return Err(ConfigError::invalid(
			"palette.max_rendered_results",
			max_rendered.to_string(),
			ConfigSources::source_for(
				&sources.max_rendered_results,
				"palette.max_rendered_results",
			),
			format!("must be between 1 and {MAX_RENDERED_RESULTS}"),
		));
	}

	if config.palette.browse_url.trim().is_empty() {
		return Err(ConfigError::invalid(
			"palette.browse_url",
			config.palette.browse_url.clone(),
			ConfigSources::source_for(&sources.browse_url, "palette.browse_url"),
			"must not be empty",
		));
	}

	if config.index.excerpt_words == 0 {
		return Err(ConfigError::invalid(
			"index.excerpt_words",
			"0",
			ConfigSources::source_for(&sources.excerpt_words, "index.excerpt_words"),
			"must be at least 1",
		));
	}

	Ok(())
}

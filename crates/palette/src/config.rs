use std::time::Duration;

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::query::MAX_QUERY_CHARS;

/// Maximum number of results rendered for a single search.
pub const MAX_RENDERED_RESULTS: usize = 10;

/// How long a results announcement stays in the status region.
pub const ANNOUNCEMENT_TTL: Duration = Duration::from_millis(1000);

/// Tunables for [`SearchModal`](crate::SearchModal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteConfig {
	pub debounce: Duration,
	/// Upper bound on issued query length, at most [`MAX_QUERY_CHARS`].
	pub max_query_chars: usize,
	/// At most [`MAX_RENDERED_RESULTS`].
	pub max_rendered_results: usize,
	pub announcement_ttl: Duration,
	/// Link offered when a query has no results.
	pub browse_url: String,
}

impl Default for PaletteConfig {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			max_query_chars: MAX_QUERY_CHARS,
			max_rendered_results: MAX_RENDERED_RESULTS,
			announcement_ttl: ANNOUNCEMENT_TTL,
			browse_url: "/blog/".to_string(),
		}
	}
}

/// Longest query, in characters, ever handed to the provider.
pub const MAX_QUERY_CHARS: usize = 100;

/// Turn raw input into the query that will be issued.
///
/// Blank input yields `None`. Anything else is passed through as typed,
/// truncated to the first `max_chars` characters.
#[must_use]
pub fn prepare(raw: &str, max_chars: usize) -> Option<String> {
	if raw.trim().is_empty() {
		return None;
	}

	match raw.char_indices().nth(max_chars) {
		Some((cut, _)) => Some(raw[..cut].to_string()),
		None => Some(raw.to_string()),
	}
}

use std::cmp::Reverse;

use frizbee::{Config, match_list};

/// Added to every title match so title hits always rank above body-only hits.
const TITLE_MATCH_BASE: u32 = 1 << 16;

/// Weight of a query term found in a document body.
const CONTENT_TERM_WEIGHT: u32 = 64;

/// Fuzzy matching options for titles; short queries tolerate fewer typos.
pub fn config_for_query(query: &str) -> Config {
	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0..=2 => 0,
		3..=5 => 1,
		6..=9 => 2,
		_ => 3,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	Config {
		prefilter: true,
		max_typos: Some(allowed_typos),
		sort: false,
		..Config::default()
	}
}

/// Lowercase whitespace-separated query terms.
pub fn terms(query: &str) -> Vec<String> {
	query
		.split_whitespace()
		.map(str::to_lowercase)
		.collect()
}

/// Rank documents for `query`.
///
/// `titles` and `bodies` are parallel; `bodies` must already be lowercase.
/// A document matches when its title fuzzy-matches the query or its body
/// contains every query term. Returns document indices, best first.
pub fn rank(query: &str, titles: &[&str], bodies: &[String]) -> Vec<usize> {
	let trimmed = query.trim();
	if trimmed.is_empty() {
		return Vec::new();
	}

	let mut scores = vec![0u32; titles.len()];
	let config = config_for_query(trimmed);
	for entry in match_list(trimmed, titles, &config) {
		if entry.score == 0 {
			continue;
		}
		if let Some(score) = scores.get_mut(entry.index as usize) {
			*score += TITLE_MATCH_BASE + u32::from(entry.score);
		}
	}

	let terms = terms(trimmed);
	for (score, body) in scores.iter_mut().zip(bodies) {
		let hits = terms
			.iter()
			.filter(|term| body.contains(term.as_str()))
			.count();
		if hits == terms.len() {
			*score += CONTENT_TERM_WEIGHT * hits as u32;
		}
	}

	let mut ranked: Vec<usize> = (0..scores.len()).filter(|&index| scores[index] > 0).collect();
	ranked.sort_by_key(|&index| (Reverse(scores[index]), index));
	ranked
}

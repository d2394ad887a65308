/// Default number of words in an excerpt.
pub const DEFAULT_EXCERPT_WORDS: usize = 15;

/// Take a window of `words` words from `content`, centred on the first word
/// containing any of the lowercase `terms`. Falls back to the opening words.
pub fn excerpt(content: &str, terms: &[String], words: usize) -> String {
	let all: Vec<&str> = content.split_whitespace().collect();
	if all.is_empty() || words == 0 {
		return String::new();
	}

	let hit = all.iter().position(|word| {
		let word = word.to_lowercase();
		terms.iter().any(|term| word.contains(term.as_str()))
	});

	let start = match hit {
		Some(index) => index
			.saturating_sub(words / 2)
			.min(all.len().saturating_sub(words)),
		None => 0,
	};
	let end = (start + words).min(all.len());
	all[start..end].join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn terms(raw: &[&str]) -> Vec<String> {
		raw.iter().map(|term| term.to_string()).collect()
	}

	#[test]
	fn centres_window_on_first_hit() {
		let content = "one two three four five six seven eight nine ten";
		assert_eq!(excerpt(content, &terms(&["six"]), 3), "five six seven");
	}

	#[test]
	fn window_is_clamped_to_content_bounds() {
		let content = "alpha beta gamma delta";
		assert_eq!(excerpt(content, &terms(&["delta"]), 3), "beta gamma delta");
		assert_eq!(excerpt(content, &terms(&["alpha"]), 10), content);
	}

	#[test]
	fn falls_back_to_opening_words() {
		let content = "Rust makes systems programming approachable";
		assert_eq!(excerpt(content, &terms(&["zig"]), 2), "Rust makes");
		assert_eq!(excerpt("", &terms(&["zig"]), 2), "");
	}

	#[test]
	fn matching_ignores_case() {
		let content = "Learning RUST the hard way";
		assert_eq!(excerpt(content, &terms(&["rust"]), 1), "RUST");
	}
}

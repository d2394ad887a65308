//! Text and HTML rendering for the results area.
//!
//! Terminal hosts use the plain text helpers; browser-style hosts can take the
//! HTML fragments from [`render_view`] as-is.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::ResultEntry;
use crate::view::ViewState;

pub const EMPTY_MESSAGE: &str = "Start typing to search...";
pub const LOADING_MESSAGE: &str = "Loading search...";
pub const INVALID_DATE: &str = "Invalid Date";

/// Escape text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			other => escaped.push(other),
		}
	}
	escaped
}

fn plural(count: usize) -> &'static str {
	if count == 1 { "" } else { "s" }
}

/// Summary line above the results, e.g. `"3 results"`.
#[must_use]
pub fn result_count_label(total: usize) -> String {
	format!("{total} result{}", plural(total))
}

/// Screen reader announcement emitted after a successful search.
#[must_use]
pub fn results_announcement(total: usize) -> String {
	format!("{total} result{} found", plural(total))
}

#[must_use]
pub fn no_results_message(query: &str) -> String {
	format!("No results found for \"{query}\"")
}

/// Render a date as `"Jan 5, 2024"`.
///
/// Accepts RFC 3339, the `2024-01-05 10:00:00 +0000` form static site
/// generators emit, naive date-times, `2024-01-05` / `2024/01/05` dates and
/// written-out forms like `January 5, 2024` or `5 January 2024`. Anything
/// else renders as `"Invalid Date"`.
#[must_use]
pub fn format_date(raw: &str) -> String {
	const DISPLAY: &str = "%b %-d, %Y";
	let raw = raw.trim();

	if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
		return parsed.format(DISPLAY).to_string();
	}
	if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z") {
		return parsed.format(DISPLAY).to_string();
	}
	for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
		if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
			return parsed.format(DISPLAY).to_string();
		}
	}
	for pattern in ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"] {
		if let Ok(parsed) = NaiveDate::parse_from_str(raw, pattern) {
			return parsed.format(DISPLAY).to_string();
		}
	}

	INVALID_DATE.to_string()
}

/// Render the whole results area for `view`.
#[must_use]
pub fn render_view(view: &ViewState<'_>, browse_url: &str) -> String {
	match view {
		ViewState::Empty => format!("<div class=\"search-empty\">{EMPTY_MESSAGE}</div>"),
		ViewState::Loading => format!("<div class=\"search-loading\">{LOADING_MESSAGE}</div>"),
		ViewState::Error(message) => {
			format!("<div class=\"search-error\">{}</div>", escape_html(message))
		}
		ViewState::NoResults(query) => format!(
			"<div class=\"no-results\">\
			<p>No results found for \"<strong>{}</strong>\"</p>\
			<p class=\"suggestion\">Try different keywords or browse <a href=\"{}\">all posts</a></p>\
			</div>",
			escape_html(query),
			escape_html(browse_url)
		),
		ViewState::Results(results) => {
			let mut html = format!(
				"<div class=\"result-count\">{}</div>",
				result_count_label(results.total)
			);
			for (index, entry) in results.entries.iter().enumerate() {
				html.push_str(&render_entry(index, entry));
			}
			html
		}
	}
}

fn render_entry(index: usize, entry: &ResultEntry) -> String {
	let mut html = String::new();
	let _ = write!(
		html,
		"<a href=\"{}\" class=\"search-result\" data-index=\"{index}\" role=\"option\" aria-selected=\"false\">\
		<div class=\"result-title\">{}<span class=\"result-type\">{}</span></div>",
		escape_html(&entry.url),
		escape_html(&entry.title),
		entry.display_type
	);
	if !entry.excerpt.is_empty() {
		let _ = write!(
			html,
			"<div class=\"result-excerpt\">{}</div>",
			escape_html(&entry.excerpt)
		);
	}
	if !entry.date.is_empty() {
		let _ = write!(
			html,
			"<div class=\"result-meta\">{}</div>",
			format_date(&entry.date)
		);
	}
	html.push_str("</a>");
	html
}

//! Transient data owned by one modal session.

use std::fmt;

use crate::provider::ResultData;

/// Title used when a result carries no title metadata.
pub const UNTITLED: &str = "Untitled";

/// Visibility of the search modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
	#[default]
	Closed,
	Open,
}

impl ModalState {
	#[must_use]
	pub fn is_open(self) -> bool {
		matches!(self, Self::Open)
	}
}

/// Kind of content a result links to, derived from its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayType {
	Post,
	Comic,
}

impl DisplayType {
	/// Classify a URL: anything whose path contains a `/comics/` segment is a comic.
	#[must_use]
	pub fn from_url(url: &str) -> Self {
		if url_path(url).contains("/comics/") {
			Self::Comic
		} else {
			Self::Post
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Post => "post",
			Self::Comic => "comic",
		}
	}
}

impl fmt::Display for DisplayType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Strip scheme, authority, query and fragment, leaving only the path.
fn url_path(url: &str) -> &str {
	let without_scheme = match url.find("://") {
		Some(pos) => {
			let rest = &url[pos + 3..];
			rest.find('/').map_or("", |slash| &rest[slash..])
		}
		None => url,
	};
	let end = without_scheme
		.find(['?', '#'])
		.unwrap_or(without_scheme.len());
	&without_scheme[..end]
}

/// One rendered search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
	pub url: String,
	pub title: String,
	/// Possibly empty.
	pub excerpt: String,
	/// Raw date string from the index, possibly empty.
	pub date: String,
	pub display_type: DisplayType,
}

impl From<ResultData> for ResultEntry {
	fn from(data: ResultData) -> Self {
		let display_type = DisplayType::from_url(&data.url);
		let title = data
			.meta
			.title
			.filter(|title| !title.is_empty())
			.unwrap_or_else(|| UNTITLED.to_string());
		Self {
			url: data.url,
			title,
			excerpt: data.excerpt.unwrap_or_default(),
			date: data.meta.date.unwrap_or_default(),
			display_type,
		}
	}
}

/// Outcome of one completed search.
///
/// `entries` holds at most the configured render cap while `total` keeps the
/// number of hits the provider reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSet {
	pub total: usize,
	pub entries: Vec<ResultEntry>,
}

impl ResultSet {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.total == 0
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&ResultEntry> {
		self.entries.get(index)
	}
}

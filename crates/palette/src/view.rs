//! Display mode of the results area.
//!
//! The view is never stored: it is recomputed from the settled query and the
//! last applied search attempt every time the controller renders.

use crate::error::PaletteError;
use crate::model::ResultSet;

/// Progress of the most recently applied search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Attempt {
	/// Nothing issued since the modal opened or the query was cleared.
	#[default]
	Idle,
	/// The provider is being loaded for the current query.
	Initializing,
	Failed(PaletteError),
	Completed { query: String, results: ResultSet },
}

impl Attempt {
	pub fn results(&self) -> Option<&ResultSet> {
		match self {
			Self::Completed { results, .. } => Some(results),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState<'a> {
	Empty,
	Loading,
	Error(&'static str),
	NoResults(&'a str),
	Results(&'a ResultSet),
}

impl<'a> ViewState<'a> {
	#[must_use]
	pub fn derive(query: &str, attempt: &'a Attempt) -> Self {
		if query.trim().is_empty() {
			return Self::Empty;
		}

		match attempt {
			Attempt::Idle => Self::Empty,
			Attempt::Initializing => Self::Loading,
			Attempt::Failed(err) => Self::Error(err.user_message()),
			Attempt::Completed { query, results } if results.is_empty() => Self::NoResults(query),
			Attempt::Completed { results, .. } => Self::Results(results),
		}
	}

	/// Number of entries actually rendered in this view.
	#[must_use]
	pub fn rendered_len(&self) -> usize {
		match self {
			Self::Results(results) => results.entries.len(),
			_ => 0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{DisplayType, ResultEntry};

	fn one_result() -> ResultSet {
		ResultSet {
			total: 1,
			entries: vec![ResultEntry {
				url: "/blog/a/".into(),
				title: "A".into(),
				excerpt: String::new(),
				date: String::new(),
				display_type: DisplayType::Post,
			}],
		}
	}

	#[test]
	fn blank_query_is_always_empty() {
		let attempt = Attempt::Initializing;
		assert_eq!(ViewState::derive("  ", &attempt), ViewState::Empty);
	}

	#[test]
	fn attempts_map_to_views() {
		assert_eq!(ViewState::derive("q", &Attempt::Idle), ViewState::Empty);
		assert_eq!(ViewState::derive("q", &Attempt::Initializing), ViewState::Loading);

		let failed = Attempt::Failed(PaletteError::ProviderInit {
			reason: "gone".into(),
		});
		assert_eq!(
			ViewState::derive("q", &failed),
			ViewState::Error("Search is temporarily unavailable")
		);

		let none = Attempt::Completed {
			query: "zzz".into(),
			results: ResultSet::default(),
		};
		assert_eq!(ViewState::derive("zzz", &none), ViewState::NoResults("zzz"));

		let some = Attempt::Completed {
			query: "a".into(),
			results: one_result(),
		};
		let view = ViewState::derive("a", &some);
		assert_eq!(view.rendered_len(), 1);
	}
}

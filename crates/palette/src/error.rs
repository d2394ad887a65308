use thiserror::Error;

/// Message shown in the results area when the index cannot be loaded.
pub const INIT_FAILURE_MESSAGE: &str = "Search is temporarily unavailable";

/// Message shown in the results area when a query fails after the index loaded.
pub const SEARCH_FAILURE_MESSAGE: &str = "An error occurred during search";

/// Failures the search palette distinguishes between.
///
/// Provider failures are recovered inside the controller and surfaced as a
/// fixed message; only [`PaletteError::ConfigurationMissing`] ever reaches the
/// caller, and only from [`SearchModal::new`](crate::SearchModal::new).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaletteError {
	/// The provider could not be initialized.
	#[error("failed to load search index: {reason}")]
	ProviderInit { reason: String },

	/// The provider failed while answering a query or resolving a result.
	#[error("search request failed: {reason}")]
	ProviderSearch { reason: String },

	/// The host surface is missing one or more required elements.
	#[error("search modal elements not found: {}", .missing.join(", "))]
	ConfigurationMissing { missing: Vec<&'static str> },
}

impl PaletteError {
	pub(crate) fn init(err: &anyhow::Error) -> Self {
		Self::ProviderInit {
			reason: format!("{err:#}"),
		}
	}

	pub(crate) fn search(err: &anyhow::Error) -> Self {
		Self::ProviderSearch {
			reason: format!("{err:#}"),
		}
	}

	/// Fixed, non-technical text presented to the user for this failure.
	#[must_use]
	pub fn user_message(&self) -> &'static str {
		match self {
			Self::ProviderInit { .. } => INIT_FAILURE_MESSAGE,
			Self::ProviderSearch { .. } | Self::ConfigurationMissing { .. } => {
				SEARCH_FAILURE_MESSAGE
			}
		}
	}
}

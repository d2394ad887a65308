//! One search attempt, from lazy index loading to rendered entries.

use std::sync::mpsc::Sender;

use futures::future::try_join_all;

use crate::error::PaletteError;
use crate::model::{ResultEntry, ResultSet};
use crate::provider::LazyIndex;

/// A settled query handed from the controller to the search worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	pub id: u64,
	pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEventKind {
	/// The index is being loaded before the query can run.
	Initializing,
	Finished(Result<ResultSet, PaletteError>),
}

/// Progress reported back for the request with the same `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEvent {
	pub id: u64,
	pub kind: SearchEventKind,
}

impl SearchEvent {
	pub fn initializing(id: u64) -> Self {
		Self {
			id,
			kind: SearchEventKind::Initializing,
		}
	}

	pub fn finished(id: u64, outcome: Result<ResultSet, PaletteError>) -> Self {
		Self {
			id,
			kind: SearchEventKind::Finished(outcome),
		}
	}
}

/// Run `request` and report progress on `events`.
///
/// Returns `false` once the receiving side has hung up.
pub async fn execute(
	index: &LazyIndex,
	request: SearchRequest,
	max_rendered: usize,
	events: &Sender<SearchEvent>,
) -> bool {
	let SearchRequest { id, query } = request;

	if !index.is_ready() && events.send(SearchEvent::initializing(id)).is_err() {
		return false;
	}

	let outcome = resolve(index, &query, max_rendered).await;
	if let Err(err) = &outcome {
		tracing::error!(id, query = %query, error = %err, "search attempt failed");
	}
	events.send(SearchEvent::finished(id, outcome)).is_ok()
}

/// Load the index if needed, search, and resolve the first `max_rendered` hits
/// concurrently.
pub async fn resolve(
	index: &LazyIndex,
	query: &str,
	max_rendered: usize,
) -> Result<ResultSet, PaletteError> {
	let handle = index.get().await.map_err(|err| PaletteError::init(&err))?;
	let response = handle
		.search(query)
		.await
		.map_err(|err| PaletteError::search(&err))?;

	let total = response.results.len();
	let details = try_join_all(
		response
			.results
			.iter()
			.take(max_rendered)
			.map(|result| result.data()),
	)
	.await
	.map_err(|err| PaletteError::search(&err))?;

	tracing::debug!(query, total, rendered = details.len(), "search resolved");
	Ok(ResultSet {
		total,
		entries: details.into_iter().map(ResultEntry::from).collect(),
	})
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};
	use std::sync::{Arc, Mutex, mpsc};

	use anyhow::{Result, anyhow};
	use async_trait::async_trait;

	use super::*;
	use crate::provider::{
		IndexLoader, LazyResult, ResultData, ResultMeta, SearchIndex, SearchResponse,
	};

	struct Hit {
		url: String,
		resolved: Arc<AtomicUsize>,
		fail: bool,
	}

	#[async_trait]
	impl LazyResult for Hit {
		async fn data(&self) -> Result<ResultData> {
			self.resolved.fetch_add(1, Ordering::SeqCst);
			if self.fail {
				return Err(anyhow!("fragment missing"));
			}
			Ok(ResultData {
				url: self.url.clone(),
				meta: ResultMeta {
					title: Some(format!("Title for {}", self.url)),
					date: None,
				},
				excerpt: None,
			})
		}
	}

	struct Index {
		hits: usize,
		resolved: Arc<AtomicUsize>,
		queries: Arc<Mutex<Vec<String>>>,
		failing_hit: Option<usize>,
	}

	#[async_trait]
	impl SearchIndex for Index {
		async fn search(&self, query: &str) -> Result<SearchResponse> {
			self.queries.lock().unwrap().push(query.to_string());
			let results = (0..self.hits)
				.map(|n| {
					Box::new(Hit {
						url: format!("/blog/{n}/"),
						resolved: Arc::clone(&self.resolved),
						fail: self.failing_hit == Some(n),
					}) as Box<dyn LazyResult>
				})
				.collect();
			Ok(SearchResponse::new(results))
		}
	}

	struct Loader {
		index: Arc<Index>,
		fail: bool,
	}

	#[async_trait]
	impl IndexLoader for Loader {
		async fn initialize(&self) -> Result<Arc<dyn SearchIndex>> {
			if self.fail {
				return Err(anyhow!("pagefind bundle not found"));
			}
			Ok(self.index.clone())
		}
	}

	fn fixture(hits: usize, failing_hit: Option<usize>, fail_init: bool) -> (LazyIndex, Arc<Index>) {
		let index = Arc::new(Index {
			hits,
			resolved: Arc::new(AtomicUsize::new(0)),
			queries: Arc::new(Mutex::new(Vec::new())),
			failing_hit,
		});
		let loader = Loader {
			index: Arc::clone(&index),
			fail: fail_init,
		};
		(LazyIndex::new(Arc::new(loader)), index)
	}

	#[tokio::test]
	async fn only_rendered_hits_are_resolved() {
		let (lazy, index) = fixture(25, None, false);

		let results = resolve(&lazy, "rust", 10).await.unwrap();

		assert_eq!(results.total, 25);
		assert_eq!(results.entries.len(), 10);
		assert_eq!(results.entries[0].url, "/blog/0/");
		assert_eq!(index.resolved.load(Ordering::SeqCst), 10);
		assert_eq!(*index.queries.lock().unwrap(), vec!["rust".to_string()]);
	}

	#[tokio::test]
	async fn failing_detail_fails_the_search() {
		let (lazy, _) = fixture(3, Some(1), false);
		let err = resolve(&lazy, "rust", 10).await.unwrap_err();
		assert!(matches!(err, PaletteError::ProviderSearch { .. }));
	}

	#[tokio::test]
	async fn init_failure_is_reported_before_any_search() {
		let (lazy, index) = fixture(3, None, true);
		let err = resolve(&lazy, "rust", 10).await.unwrap_err();
		assert!(matches!(err, PaletteError::ProviderInit { .. }));
		assert!(index.queries.lock().unwrap().is_empty());
	}

	#[tokio::test]
	async fn execute_announces_initialization_once() {
		let (lazy, _) = fixture(2, None, false);
		let (tx, rx) = mpsc::channel();

		let request = SearchRequest {
			id: 1,
			query: "rust".into(),
		};
		assert!(execute(&lazy, request, 10, &tx).await);
		let request = SearchRequest {
			id: 2,
			query: "rust".into(),
		};
		assert!(execute(&lazy, request, 10, &tx).await);

		let events: Vec<_> = rx.try_iter().collect();
		assert_eq!(events.len(), 3);
		assert_eq!(events[0], SearchEvent::initializing(1));
		assert!(matches!(events[1].kind, SearchEventKind::Finished(Ok(_))));
		assert_eq!(events[2].id, 2);
	}
}

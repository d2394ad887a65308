//! Contract for the external search index the palette queries.
//!
//! Providers are loaded lazily: nothing touches the index until the first
//! non-empty query settles. [`LazyIndex`] keeps the first successful
//! initialization and forgets failures so the next query retries from scratch.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::OnceCell;

/// Loads a search index. Calling it more than once must be harmless.
#[async_trait]
pub trait IndexLoader: Send + Sync {
	async fn initialize(&self) -> Result<Arc<dyn SearchIndex>>;
}

/// A loaded index able to answer queries.
#[async_trait]
pub trait SearchIndex: Send + Sync {
	/// Return ranked hits for `query`. Details are resolved per hit on demand.
	async fn search(&self, query: &str) -> Result<SearchResponse>;
}

/// A ranked hit whose record is fetched lazily.
#[async_trait]
pub trait LazyResult: Send + Sync {
	async fn data(&self) -> Result<ResultData>;
}

/// Ranked hits returned by [`SearchIndex::search`].
#[derive(Default)]
pub struct SearchResponse {
	pub results: Vec<Box<dyn LazyResult>>,
}

impl SearchResponse {
	pub fn new(results: Vec<Box<dyn LazyResult>>) -> Self {
		Self { results }
	}
}

impl fmt::Debug for SearchResponse {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SearchResponse")
			.field("results", &self.results.len())
			.finish()
	}
}

/// The record behind a hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResultData {
	pub url: String,
	#[serde(default)]
	pub meta: ResultMeta,
	#[serde(default)]
	pub excerpt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResultMeta {
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub date: Option<String>,
}

/// Caches the first successfully initialized index.
pub struct LazyIndex {
	loader: Arc<dyn IndexLoader>,
	index: OnceCell<Arc<dyn SearchIndex>>,
}

impl LazyIndex {
	pub fn new(loader: Arc<dyn IndexLoader>) -> Self {
		Self {
			loader,
			index: OnceCell::new(),
		}
	}

	/// Whether a previous call already produced an index.
	#[must_use]
	pub fn is_ready(&self) -> bool {
		self.index.initialized()
	}

	/// Return the cached index, initializing it first if needed.
	///
	/// Concurrent callers share a single initialization attempt. A failed
	/// attempt leaves the cell empty.
	pub async fn get(&self) -> Result<Arc<dyn SearchIndex>> {
		let index = self
			.index
			.get_or_try_init(|| async {
				tracing::debug!("initializing search index");
				self.loader.initialize().await
			})
			.await?;
		Ok(Arc::clone(index))
	}
}

impl fmt::Debug for LazyIndex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LazyIndex")
			.field("ready", &self.is_ready())
			.finish()
	}
}

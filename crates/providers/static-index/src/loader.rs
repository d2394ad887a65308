use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use quire_palette::{IndexLoader, LazyResult, ResultData, ResultMeta, SearchIndex, SearchResponse};

use crate::document::{Document, parse_documents};
use crate::excerpt::{DEFAULT_EXCERPT_WORDS, excerpt};
use crate::matcher::{rank, terms};

/// Tuning for a [`StaticIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticIndexOptions {
	pub excerpt_words: usize,
}

impl Default for StaticIndexOptions {
	fn default() -> Self {
		Self {
			excerpt_words: DEFAULT_EXCERPT_WORDS,
		}
	}
}

/// Reads a JSON index from disk the first time a search needs it.
#[derive(Debug, Clone)]
pub struct StaticIndexLoader {
	path: PathBuf,
	options: StaticIndexOptions,
}

impl StaticIndexLoader {
	pub fn new(path: impl Into<PathBuf>, options: StaticIndexOptions) -> Self {
		Self {
			path: path.into(),
			options,
		}
	}

	pub fn path(&self) -> &PathBuf {
		&self.path
	}
}

#[async_trait]
impl IndexLoader for StaticIndexLoader {
	async fn initialize(&self) -> Result<Arc<dyn SearchIndex>> {
		let bytes = tokio::fs::read(&self.path)
			.await
			.with_context(|| format!("failed to read search index {}", self.path.display()))?;
		let documents = parse_documents(&bytes)
			.with_context(|| format!("failed to parse search index {}", self.path.display()))?;
		tracing::info!(
			path = %self.path.display(),
			documents = documents.len(),
			"loaded search index"
		);
		Ok(Arc::new(StaticIndex::new(documents, self.options.clone())))
	}
}

/// In-memory index over exported documents.
#[derive(Debug)]
pub struct StaticIndex {
	documents: Arc<[Document]>,
	bodies: Vec<String>,
	options: StaticIndexOptions,
}

impl StaticIndex {
	pub fn new(documents: Vec<Document>, options: StaticIndexOptions) -> Self {
		let bodies = documents
			.iter()
			.map(|document| document.content.to_lowercase())
			.collect();
		Self {
			documents: documents.into(),
			bodies,
			options,
		}
	}

	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}
}

#[async_trait]
impl SearchIndex for StaticIndex {
	async fn search(&self, query: &str) -> Result<SearchResponse> {
		let titles: Vec<&str> = self
			.documents
			.iter()
			.map(|document| document.title.as_str())
			.collect();
		let ranked = rank(query, &titles, &self.bodies);
		tracing::debug!(query, hits = ranked.len(), "static index search");

		let terms: Arc<[String]> = terms(query).into();
		let results = ranked
			.into_iter()
			.map(|index| {
				Box::new(StaticHit {
					documents: Arc::clone(&self.documents),
					index,
					terms: Arc::clone(&terms),
					excerpt_words: self.options.excerpt_words,
				}) as Box<dyn LazyResult>
			})
			.collect();
		Ok(SearchResponse::new(results))
	}
}

/// A hit whose excerpt is cut only when the palette asks for it.
struct StaticHit {
	documents: Arc<[Document]>,
	index: usize,
	terms: Arc<[String]>,
	excerpt_words: usize,
}

#[async_trait]
impl LazyResult for StaticHit {
	async fn data(&self) -> Result<ResultData> {
		let document = self
			.documents
			.get(self.index)
			.with_context(|| format!("document {} is out of range", self.index))?;
		let excerpt = excerpt(&document.content, &self.terms, self.excerpt_words);
		Ok(ResultData {
			url: document.url.clone(),
			meta: ResultMeta {
				title: Some(document.title.clone()).filter(|title| !title.trim().is_empty()),
				date: document.date.clone(),
			},
			excerpt: Some(excerpt).filter(|text| !text.is_empty()),
		})
	}
}

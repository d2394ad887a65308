use anyhow::{Context, Result};
use serde::Deserialize;

/// A page as exported by the site build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Document {
	pub url: String,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub date: Option<String>,
	/// Plain text body used for matching and excerpts.
	#[serde(default)]
	pub content: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IndexFile {
	Wrapped { documents: Vec<Document> },
	Bare(Vec<Document>),
}

/// Parse an index file, accepting either `{"documents": [...]}` or a bare array.
pub fn parse_documents(bytes: &[u8]) -> Result<Vec<Document>> {
	let file: IndexFile =
		serde_json::from_slice(bytes).context("search index is not valid JSON in a supported shape")?;
	let documents = match file {
		IndexFile::Wrapped { documents } | IndexFile::Bare(documents) => documents,
	};
	Ok(documents
		.into_iter()
		.filter(|document| !document.url.trim().is_empty())
		.collect())
}

//! Search provider over a JSON document index exported at site build time.
//!
//! Titles are fuzzy matched with frizbee; bodies must contain every query term.

mod document;
mod excerpt;
mod loader;
pub mod matcher;

pub use document::{Document, parse_documents};
pub use excerpt::{DEFAULT_EXCERPT_WORDS, excerpt};
pub use loader::{StaticIndex, StaticIndexLoader, StaticIndexOptions};

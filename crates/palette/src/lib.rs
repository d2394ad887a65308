//! Keyboard-first search palette.
//!
//! [`SearchModal`] owns the state of a single search overlay: whether it is
//! open, the settled query, the last search outcome, the keyboard selection
//! and the focus to restore on close. Hosts implement [`Surface`] to give it a
//! page to drive, and run queries through a [`SearchWorker`] backed by any
//! [`IndexLoader`].

mod config;
mod controller;
pub mod debounce;
mod error;
pub mod focus;
pub mod keys;
pub mod markup;
mod model;
pub mod pipeline;
pub mod provider;
pub mod query;
mod surface;
mod view;
mod worker;

pub use config::{ANNOUNCEMENT_TTL, MAX_RENDERED_RESULTS, PaletteConfig};
pub use controller::SearchModal;
pub use error::{INIT_FAILURE_MESSAGE, PaletteError, SEARCH_FAILURE_MESSAGE};
pub use keys::{Key, KeyInput, KeyOutcome, Modifiers, Scope};
pub use model::{DisplayType, ModalState, ResultEntry, ResultSet, UNTITLED};
pub use pipeline::{SearchEvent, SearchEventKind, SearchRequest};
pub use provider::{
	IndexLoader, LazyIndex, LazyResult, ResultData, ResultMeta, SearchIndex, SearchResponse,
};
pub use surface::{Element, Surface, missing_elements};
pub use view::{Attempt, ViewState};
pub use worker::{SearchCommand, SearchWorker};

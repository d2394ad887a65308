//! Terminal host for the quire search palette.
//!
//! A small page of links with the search modal drawn over it. The page
//! implements the palette's `Surface`, so every open, close, focus move and
//! result view goes through the same controller a browser host would use.

mod app;
mod input;
mod page;
mod render;
mod runtime;
mod scroll;
pub mod style;

#[cfg(test)]
mod tests;

pub use app::{App, SessionOutcome, key_input};
pub use input::QueryInput;
pub use page::{Focus, Page, PageLink, PageSpec, Panel, ResultRow};
pub use runtime::run;
pub use style::Theme;

//! The terminal page the search modal is attached to.
//!
//! [`Page`] implements [`Surface`]: the controller toggles the overlay, moves
//! focus and hands it views to show, and the page keeps just enough state for
//! the renderer and for hit testing mouse clicks.

use quire_palette::markup::{
	EMPTY_MESSAGE, LOADING_MESSAGE, format_date, no_results_message, result_count_label,
};
use quire_palette::{Element, Surface, ViewState};
use serde::Deserialize;

use crate::input::QueryInput;
use crate::scroll::nearest_offset;

/// Rows a result occupies on screen.
pub(crate) const RESULT_HEIGHT: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageLink {
	pub label: String,
	pub url: String,
}

/// What the page shows before anything is searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
	pub title: String,
	/// Starting location.
	pub url: String,
	pub links: Vec<PageLink>,
}

/// Focusable things on the page and inside the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Link(usize),
	Input,
	CloseButton,
}

/// A result prepared for drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
	pub title: String,
	pub kind: &'static str,
	pub excerpt: String,
	pub date: Option<String>,
}

/// Owned copy of the last view the controller rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
	#[default]
	Empty,
	Loading,
	Error(String),
	NoResults { message: String },
	Results { count: String, rows: Vec<ResultRow> },
}

impl Panel {
	fn from_view(view: &ViewState<'_>) -> Self {
		match view {
			ViewState::Empty => Self::Empty,
			ViewState::Loading => Self::Loading,
			ViewState::Error(message) => Self::Error((*message).to_string()),
			ViewState::NoResults(query) => Self::NoResults {
				message: no_results_message(query),
			},
			ViewState::Results(results) => Self::Results {
				count: result_count_label(results.total),
				rows: results
					.entries
					.iter()
					.map(|entry| ResultRow {
						title: entry.title.clone(),
						kind: entry.display_type.label(),
						excerpt: entry.excerpt.clone(),
						date: (!entry.date.is_empty()).then(|| format_date(&entry.date)),
					})
					.collect(),
			},
		}
	}

	/// Placeholder text for the non-result states.
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::Empty => Some(EMPTY_MESSAGE),
			Self::Loading => Some(LOADING_MESSAGE),
			Self::Error(message) | Self::NoResults { message } => Some(message.as_str()),
			Self::Results { .. } => None,
		}
	}
}

pub struct Page<'a> {
	title: String,
	links: Vec<PageLink>,
	location: String,
	history: Vec<String>,
	browse_url: String,
	focus: Option<Focus>,
	modal_hidden: bool,
	scroll_locked: bool,
	link_offset: usize,
	pub(crate) input: QueryInput<'a>,
	panel: Panel,
	selected: Option<usize>,
	result_offset: usize,
	visible_results: usize,
	announcements: Vec<(u64, String)>,
	next_announcement: u64,
}

impl<'a> Page<'a> {
	pub fn new(spec: PageSpec, browse_url: impl Into<String>) -> Self {
		Self {
			title: spec.title,
			links: spec.links,
			location: spec.url,
			history: Vec::new(),
			browse_url: browse_url.into(),
			focus: None,
			modal_hidden: true,
			scroll_locked: false,
			link_offset: 0,
			input: QueryInput::default(),
			panel: Panel::Empty,
			selected: None,
			result_offset: 0,
			visible_results: 1,
			announcements: Vec::new(),
			next_announcement: 0,
		}
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn links(&self) -> &[PageLink] {
		&self.links
	}

	/// Current location.
	pub fn location(&self) -> &str {
		&self.location
	}

	/// Every location visited after the first, in order.
	pub fn history(&self) -> &[String] {
		&self.history
	}

	pub fn browse_url(&self) -> &str {
		&self.browse_url
	}

	pub fn current_focus(&self) -> Option<Focus> {
		self.focus
	}

	pub fn modal_visible(&self) -> bool {
		!self.modal_hidden
	}

	pub fn scroll_locked(&self) -> bool {
		self.scroll_locked
	}

	pub fn panel(&self) -> &Panel {
		&self.panel
	}

	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn query_text(&self) -> &str {
		self.input.text()
	}

	/// Latest live-region message, if any is still up.
	pub fn status(&self) -> Option<&str> {
		self.announcements.last().map(|(_, text)| text.as_str())
	}

	pub(crate) fn link_offset(&self) -> usize {
		self.link_offset
	}

	pub(crate) fn result_offset(&self) -> usize {
		self.result_offset
	}

	/// Tell the page how many results fit on screen after a resize.
	pub(crate) fn set_visible_results(&mut self, visible: usize) {
		self.visible_results = visible.max(1);
		if let Some(index) = self.selected {
			self.result_offset = nearest_offset(self.result_offset, index, self.visible_results);
		}
	}

	/// Move link focus by one step with wraparound. Used for page-level Tab.
	pub(crate) fn cycle_link_focus(&mut self, backwards: bool) {
		let count = self.links.len();
		if count == 0 {
			return;
		}
		let next = match self.focus {
			Some(Focus::Link(index)) if backwards => (index + count - 1) % count,
			Some(Focus::Link(index)) => (index + 1) % count,
			_ if backwards => count - 1,
			_ => 0,
		};
		self.focus = Some(Focus::Link(next));
	}

	/// Scroll the link list. Ignored while the modal holds the scroll lock.
	pub(crate) fn scroll_links(&mut self, delta: isize) {
		if self.scroll_locked {
			return;
		}
		let max = self.links.len().saturating_sub(1);
		self.link_offset = self.link_offset.saturating_add_signed(delta).min(max);
	}

	pub(crate) fn focused_link(&self) -> Option<&PageLink> {
		match self.focus {
			Some(Focus::Link(index)) => self.links.get(index),
			_ => None,
		}
	}
}

impl Surface for Page<'_> {
	type Focus = Focus;
	type Announcement = u64;

	fn has_element(&self, element: Element) -> bool {
		matches!(
			element,
			Element::Modal | Element::Backdrop | Element::Input | Element::Results
		)
	}

	fn set_modal_hidden(&mut self, hidden: bool) {
		self.modal_hidden = hidden;
		// Hidden controls cannot keep focus.
		if hidden && matches!(self.focus, Some(Focus::Input | Focus::CloseButton)) {
			self.focus = None;
		}
	}

	fn set_scroll_locked(&mut self, locked: bool) {
		self.scroll_locked = locked;
	}

	fn active_focus(&self) -> Option<Focus> {
		self.focus
	}

	fn focus(&mut self, target: &Focus) {
		self.focus = Some(*target);
	}

	fn focus_input(&mut self) {
		self.focus = Some(Focus::Input);
	}

	fn clear_input(&mut self) {
		self.input.clear();
	}

	fn modal_focusables(&self) -> Vec<Focus> {
		vec![Focus::Input, Focus::CloseButton]
	}

	fn render(&mut self, view: &ViewState<'_>) {
		self.panel = Panel::from_view(view);
		self.selected = None;
		self.result_offset = 0;
	}

	fn set_result_selected(&mut self, index: usize, selected: bool) {
		if selected {
			self.selected = Some(index);
		} else if self.selected == Some(index) {
			self.selected = None;
		}
	}

	fn scroll_result_into_view(&mut self, index: usize) {
		self.result_offset = nearest_offset(self.result_offset, index, self.visible_results);
	}

	fn announce(&mut self, message: &str) -> u64 {
		let id = self.next_announcement;
		self.next_announcement += 1;
		self.announcements.push((id, message.to_string()));
		id
	}

	fn retract(&mut self, announcement: u64) {
		self.announcements.retain(|(id, _)| *id != announcement);
	}

	fn navigate(&mut self, url: &str) {
		tracing::info!(from = %self.location, to = %url, "navigating");
		self.location = url.to_string();
		self.history.push(url.to_string());
	}
}

//! The search modal state machine.
//!
//! [`SearchModal`] is synchronous: the host feeds it key presses, input
//! changes, clock ticks and search events, and it drives the [`Surface`].
//! Searches themselves run elsewhere (see [`SearchWorker`](crate::SearchWorker));
//! the controller only hands out [`SearchRequest`]s and applies the
//! [`SearchEvent`]s that come back for the latest one.

use std::time::Instant;

use crate::config::PaletteConfig;
use crate::debounce::Debouncer;
use crate::error::PaletteError;
use crate::focus::FocusTrap;
use crate::keys::{self, Command, KeyInput, KeyOutcome, Prevent, Scope};
use crate::markup;
use crate::model::ModalState;
use crate::pipeline::{SearchEvent, SearchEventKind, SearchRequest};
use crate::query;
use crate::surface::{Surface, missing_elements};
use crate::view::{Attempt, ViewState};


/// Hands out request ids and remembers which one is current.
#[derive(Debug, Default)]
struct QuerySequence {
	issued: u64,
	current: Option<u64>,
}

impl QuerySequence {
	fn issue(&mut self) -> u64 {
		self.issued = self.issued.saturating_add(1);
		self.current = Some(self.issued);
		self.issued
	}

	/// Make every outstanding id stale.
	fn invalidate(&mut self) {
		self.current = None;
	}

	fn is_current(&self, id: u64) -> bool {
		self.current == Some(id)
	}
}

pub struct SearchModal<S: Surface> {
	surface: S,
	config: PaletteConfig,
	state: ModalState,
	input: Debouncer<String>,
	query: String,
	attempt: Attempt,
	selection: Option<usize>,
	focus_memory: Option<S::Focus>,
	focus_trap: Option<FocusTrap<S::Focus>>,
	sequence: QuerySequence,
	announcements: Vec<(Instant, S::Announcement)>,
}

impl<S: Surface> SearchModal<S> {
	/// Attach a controller to `surface`.
	///
	/// Fails when any required element is missing; nothing is attached in that
	/// case.
	pub fn new(surface: S, config: PaletteConfig) -> Result<Self, PaletteError> {
		let missing = missing_elements(&surface);
		if !missing.is_empty() {
			tracing::warn!(?missing, "search modal elements not found");
			return Err(PaletteError::ConfigurationMissing { missing });
		}

		Ok(Self {
			surface,
			input: Debouncer::new(config.debounce),
			config,
			state: ModalState::Closed,
			query: String::new(),
			attempt: Attempt::Idle,
			selection: None,
			focus_memory: None,
			focus_trap: None,
			sequence: QuerySequence::default(),
			announcements: Vec::new(),
		})
	}

	pub fn state(&self) -> ModalState {
		self.state
	}

	pub fn is_open(&self) -> bool {
		self.state.is_open()
	}

	/// Settled query, already truncated.
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Keyboard-selected result, `None` when nothing is selected.
	pub fn selection(&self) -> Option<usize> {
		self.selection
	}

	pub fn view(&self) -> ViewState<'_> {
		ViewState::derive(&self.query, &self.attempt)
	}

	pub fn config(&self) -> &PaletteConfig {
		&self.config
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	/// Earliest instant at which [`SearchModal::tick`] has work to do.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.announcements
			.iter()
			.map(|(due, _)| *due)
			.chain(self.input.deadline())
			.min()
	}

	pub fn open(&mut self) {
		if self.state.is_open() {
			return;
		}

		self.focus_memory = self.surface.active_focus();
		self.state = ModalState::Open;
		self.surface.set_modal_hidden(false);
		self.surface.clear_input();
		self.input.cancel();
		self.sequence.invalidate();
		self.query.clear();
		self.attempt = Attempt::Idle;
		self.selection = None;
		self.render();
		self.surface.focus_input();
		self.surface.set_scroll_locked(true);
		self.focus_trap = FocusTrap::over(&self.surface.modal_focusables());
		tracing::debug!(previous_focus = ?self.focus_memory, "search modal opened");
	}

	pub fn close(&mut self) {
		if !self.state.is_open() {
			return;
		}

		self.state = ModalState::Closed;
		self.surface.set_modal_hidden(true);
		self.surface.set_scroll_locked(false);
		self.focus_trap = None;
		self.input.cancel();
		self.sequence.invalidate();
		self.selection = None;
		if let Some(previous) = self.focus_memory.take() {
			self.surface.focus(&previous);
		}
		tracing::debug!("search modal closed");
	}

	/// Record new input text. The query is issued once the debounce window
	/// passes without further input.
	pub fn input_changed(&mut self, text: &str, now: Instant) {
		if self.state.is_open() {
			self.input.schedule(text.to_string(), now);
		}
	}

	/// Advance timers. Returns a request when typed input has settled into a
	/// query that needs the provider.
	pub fn tick(&mut self, now: Instant) -> Option<SearchRequest> {
		self.expire_announcements(now);
		let text = self.input.poll(now)?;
		self.settle(text)
	}

	fn settle(&mut self, text: String) -> Option<SearchRequest> {
		let id = self.sequence.issue();
		match query::prepare(&text, self.config.max_query_chars) {
			None => {
				self.query.clear();
				self.attempt = Attempt::Idle;
				self.selection = None;
				self.render();
				None
			}
			Some(query) => {
				self.query.clone_from(&query);
				Some(SearchRequest { id, query })
			}
		}
	}

	/// Apply progress for an issued request. Events for anything but the
	/// latest request, or arriving while closed, are dropped.
	pub fn apply(&mut self, event: SearchEvent, now: Instant) {
		if !self.state.is_open() || !self.sequence.is_current(event.id) {
			tracing::debug!(id = event.id, "discarding stale search event");
			return;
		}

		match event.kind {
			SearchEventKind::Initializing => {
				self.attempt = Attempt::Initializing;
				self.render();
			}
			SearchEventKind::Finished(Ok(mut results)) => {
				results.entries.truncate(self.config.max_rendered_results);
				let total = results.total;
				self.attempt = Attempt::Completed {
					query: self.query.clone(),
					results,
				};
				self.selection = None;
				self.render();
				if total > 0 {
					let message = markup::results_announcement(total);
					let handle = self.surface.announce(&message);
					self.announcements
						.push((now + self.config.announcement_ttl, handle));
				}
			}
			SearchEventKind::Finished(Err(err)) => {
				self.attempt = Attempt::Failed(err);
				self.selection = None;
				self.render();
			}
		}
	}

	/// Dispatch a key press originating inside the modal when it is open, or
	/// elsewhere on the page when it is closed.
	pub fn handle_key(&mut self, input: KeyInput) -> KeyOutcome {
		let origin = if self.state.is_open() {
			Scope::Modal
		} else {
			Scope::Document
		};
		self.handle_key_from(origin, input)
	}

	/// Dispatch a key press whose target is `origin`. Events from outside the
	/// modal only reach document bindings.
	pub fn handle_key_from(&mut self, origin: Scope, input: KeyInput) -> KeyOutcome {
		let mut outcome = KeyOutcome::default();
		for binding in keys::matching(self.state, input) {
			if binding.scope == Scope::Modal && origin != Scope::Modal {
				continue;
			}
			if binding.scope == Scope::Document && outcome.default_prevented {
				continue;
			}

			let handled = self.run(binding.command);
			if handled {
				outcome.record(binding.command);
			}
			match binding.prevent {
				Prevent::Always => outcome.default_prevented = true,
				Prevent::WhenHandled if handled => outcome.default_prevented = true,
				_ => {}
			}
		}
		outcome
	}

	fn run(&mut self, command: Command) -> bool {
		tracing::trace!(?command, "running palette command");
		match command {
			Command::Open => {
				let was_closed = !self.state.is_open();
				self.open();
				was_closed
			}
			Command::Close => {
				let was_open = self.state.is_open();
				self.close();
				was_open
			}
			Command::SelectNext => self.navigate(1),
			Command::SelectPrevious => self.navigate(-1),
			Command::Activate => self.activate_selection(),
			Command::FocusNext => self.trap_tab(false),
			Command::FocusPrevious => self.trap_tab(true),
		}
	}

	pub fn select_next(&mut self) -> bool {
		self.navigate(1)
	}

	pub fn select_previous(&mut self) -> bool {
		self.navigate(-1)
	}

	fn navigate(&mut self, direction: isize) -> bool {
		let len = self.view().rendered_len();
		if !self.state.is_open() || len == 0 {
			return false;
		}

		let next = match self.selection {
			None if direction > 0 => 0,
			None => len - 1,
			Some(current) => {
				let len = len as isize;
				(current as isize + direction).rem_euclid(len) as usize
			}
		};
		self.update_selection(next);
		true
	}

	fn update_selection(&mut self, index: usize) {
		if let Some(previous) = self.selection {
			self.surface.set_result_selected(previous, false);
		}
		self.selection = Some(index);
		self.surface.set_result_selected(index, true);
		self.surface.scroll_result_into_view(index);
	}

	fn activate_selection(&mut self) -> bool {
		match self.selection {
			Some(index) => self.click_result(index),
			None => false,
		}
	}

	/// Follow the rendered result at `index`: close the modal, then navigate.
	pub fn click_result(&mut self, index: usize) -> bool {
		if !self.state.is_open() {
			return false;
		}
		let Some(url) = self
			.attempt
			.results()
			.and_then(|results| results.get(index))
			.map(|entry| entry.url.clone())
		else {
			return false;
		};

		tracing::debug!(index, url = %url, "activating search result");
		self.close();
		self.surface.navigate(&url);
		true
	}

	pub fn click_backdrop(&mut self) {
		self.close();
	}

	/// The page changed underneath the modal (history navigation and the like).
	pub fn on_navigation(&mut self) {
		self.close();
	}

	fn trap_tab(&mut self, backwards: bool) -> bool {
		let Some(trap) = &self.focus_trap else {
			return false;
		};
		let active = self.surface.active_focus();
		match trap.redirect(active.as_ref(), backwards) {
			Some(target) => {
				self.surface.focus(&target);
				true
			}
			None => false,
		}
	}

	fn render(&mut self) {
		let view = ViewState::derive(&self.query, &self.attempt);
		self.surface.render(&view);
	}

	fn expire_announcements(&mut self, now: Instant) {
		if self.announcements.is_empty() {
			return;
		}
		for (due, handle) in std::mem::take(&mut self.announcements) {
			if due <= now {
				self.surface.retract(handle);
			} else {
				self.announcements.push((due, handle));
			}
		}
	}
}

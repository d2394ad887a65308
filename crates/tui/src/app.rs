//! Terminal application state: the page, its search modal and the worker
//! running queries for it.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use quire_palette::{
	IndexLoader, Key, KeyInput, Modifiers, PaletteConfig, SearchModal, SearchWorker, Surface,
};
use ratatui::Frame;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;

use crate::page::{Focus, Page, PageSpec};
use crate::render::{self, HitAreas};
use crate::style::Theme;

/// Where the session ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	/// Location when the user quit.
	pub url: String,
	/// Every navigation, oldest first.
	pub history: Vec<String>,
}

pub struct App<'a> {
	pub(crate) modal: SearchModal<Page<'a>>,
	worker: SearchWorker,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) hits: HitAreas,
}

/// Translate a terminal key event into the palette's key model.
pub fn key_input(key: &KeyEvent) -> KeyInput {
	let mut shift = key.modifiers.contains(KeyModifiers::SHIFT);
	let key_code = match key.code {
		KeyCode::Char(ch) => Key::Char(ch),
		KeyCode::Esc => Key::Escape,
		KeyCode::Enter => Key::Enter,
		KeyCode::Up => Key::Up,
		KeyCode::Down => Key::Down,
		KeyCode::Tab => Key::Tab,
		KeyCode::BackTab => {
			shift = true;
			Key::Tab
		}
		_ => Key::Other,
	};
	KeyInput {
		key: key_code,
		modifiers: Modifiers {
			ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
			meta: key
				.modifiers
				.intersects(KeyModifiers::SUPER | KeyModifiers::META),
			shift,
			alt: key.modifiers.contains(KeyModifiers::ALT),
		},
	}
}

impl<'a> App<'a> {
	pub fn new(spec: PageSpec, config: PaletteConfig, loader: Arc<dyn IndexLoader>) -> Result<Self> {
		let max_rendered = config.max_rendered_results;
		let page = Page::new(spec, config.browse_url.clone());
		let modal = SearchModal::new(page, config).context("failed to attach search modal")?;
		let worker =
			SearchWorker::spawn(loader, max_rendered).context("failed to start search worker")?;

		Ok(Self {
			modal,
			worker,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			hits: HitAreas::default(),
		})
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn page(&self) -> &Page<'a> {
		self.modal.surface()
	}

	pub fn modal(&self) -> &SearchModal<Page<'a>> {
		&self.modal
	}

	pub fn outcome(&self) -> SessionOutcome {
		let page = self.page();
		SessionOutcome {
			url: page.location().to_string(),
			history: page.history().to_vec(),
		}
	}

	/// Process a keyboard event. Returns the outcome when the user quits.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<SessionOutcome> {
		let input = key_input(&key);
		let modal_open = self.modal.is_open();

		if !modal_open && is_quit(&key) {
			return Some(self.outcome());
		}

		let outcome = self.modal.handle_key(input);
		if outcome.default_prevented {
			tracing::trace!(?outcome, "key consumed by search modal");
			return None;
		}

		if modal_open {
			self.modal_default(key, input, now);
		} else {
			self.page_default(input);
		}
		None
	}

	/// Host behaviour for keys the modal did not claim while open.
	fn modal_default(&mut self, key: KeyEvent, input: KeyInput, now: Instant) {
		let focus = self.modal.surface().current_focus();
		match (input.key, focus) {
			(Key::Tab, Some(current)) => {
				let focusables = self.modal.surface().modal_focusables();
				if let Some(position) = focusables.iter().position(|item| *item == current) {
					let next = if input.modifiers.shift {
						position.checked_sub(1)
					} else {
						Some(position + 1).filter(|next| *next < focusables.len())
					};
					if let Some(target) = next.and_then(|index| focusables.get(index)) {
						self.focus(*target);
					}
				}
			}
			(Key::Enter, Some(Focus::CloseButton)) => self.modal.close(),
			(_, Some(Focus::Input)) => {
				let page = self.modal.surface_mut();
				if page.input.input(key) {
					let text = page.input.text().to_string();
					self.modal.input_changed(&text, now);
				}
			}
			_ => {}
		}
	}

	/// Host behaviour for keys on the page while the modal is closed.
	fn page_default(&mut self, input: KeyInput) {
		match input.key {
			Key::Tab => self
				.modal
				.surface_mut()
				.cycle_link_focus(input.modifiers.shift),
			Key::Enter => {
				let Some(url) = self.page().focused_link().map(|link| link.url.clone()) else {
					return;
				};
				self.follow_link(&url);
			}
			Key::Up => self.modal.surface_mut().scroll_links(-1),
			Key::Down => self.modal.surface_mut().scroll_links(1),
			_ => {}
		}
	}

	fn focus(&mut self, target: Focus) {
		self.modal.surface_mut().focus(&target);
	}

	fn follow_link(&mut self, url: &str) {
		self.modal.surface_mut().navigate(url);
		self.modal.on_navigation();
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);
		let open = self.modal.is_open();

		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) if open => {
				if let Some(index) = self.hits.result_at(column, row) {
					self.modal.click_result(index);
				} else if self.hits.on_close_button(column, row) {
					self.modal.close();
				} else if self.hits.on_input(column, row) {
					self.focus(Focus::Input);
				} else if !self.hits.in_modal(column, row) {
					self.modal.click_backdrop();
				}
			}
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(index) = self.hits.link_at(column, row) {
					self.focus(Focus::Link(index));
					if let Some(url) = self.page().links().get(index).map(|link| link.url.clone()) {
						self.follow_link(&url);
					}
				}
			}
			MouseEventKind::ScrollDown if open && self.hits.in_modal(column, row) => {
				self.modal.select_next();
			}
			MouseEventKind::ScrollUp if open && self.hits.in_modal(column, row) => {
				self.modal.select_previous();
			}
			MouseEventKind::ScrollDown => self.modal.surface_mut().scroll_links(1),
			MouseEventKind::ScrollUp => self.modal.surface_mut().scroll_links(-1),
			_ => {}
		}
	}

	/// Release settled input to the worker and expire announcements.
	pub fn tick(&mut self, now: Instant) {
		if let Some(request) = self.modal.tick(now) {
			self.worker.submit(request);
		}
	}

	/// Apply every search event the worker has produced so far.
	pub fn pump_search_events(&mut self, now: Instant) {
		while let Ok(event) = self.worker.try_recv() {
			self.modal.apply(event, now);
		}
	}

	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		render::draw(
			frame,
			self.modal.surface_mut(),
			&self.theme,
			&self.throbber_state,
			&mut self.hits,
		);
	}
}

fn is_quit(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
		KeyCode::Char('q') => key.modifiers.is_empty(),
		_ => false,
	}
}

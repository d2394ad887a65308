//! Colors for the page and the search overlay.

use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for various UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Page title bar and the overlay border title.
	pub header: Style,
	/// Selected result and focused link.
	pub row_highlight: Style,
	/// Query prompt.
	pub prompt: Style,
	/// Placeholder, excerpt and status text.
	pub empty: Style,
	/// Result titles.
	pub highlight: Style,
	/// Error messages.
	pub error: Style,
}

impl Theme {
	pub const SLATE: Self = Self {
		header: Style::new()
			.fg(Color::Rgb(226, 232, 240))
			.bg(Color::Rgb(15, 23, 42)),
		row_highlight: Style::new()
			.bg(Color::Rgb(30, 41, 59))
			.fg(Color::Rgb(250, 204, 21)),
		prompt: Style::new().fg(Color::LightCyan),
		empty: Style::new().fg(Color::DarkGray),
		highlight: Style::new()
			.fg(Color::Yellow)
			.add_modifier(Modifier::BOLD),
		error: Style::new().fg(Color::LightRed),
	};

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Style for a focusable control, inverted when focused.
	#[must_use]
	pub fn control_style(&self, focused: bool) -> Style {
		if focused {
			self.row_highlight.add_modifier(Modifier::BOLD)
		} else {
			self.prompt
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::SLATE
	}
}

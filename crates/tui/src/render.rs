//! Drawing for the page and the search overlay.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::page::{Focus, Page, Panel, RESULT_HEIGHT, ResultRow};
use crate::style::Theme;

const MODAL_MAX_WIDTH: u16 = 72;
const CLOSE_LABEL: &str = "[x]";
const PROMPT: &str = "/ ";
const HELP: &str = "Ctrl+K search   Tab move   Enter follow   q quit";

/// Screen regions recorded during the last draw, used to route mouse clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct HitAreas {
	pub modal: Option<Rect>,
	pub input: Option<Rect>,
	pub close_button: Option<Rect>,
	pub results: Vec<(usize, Rect)>,
	pub links: Vec<(usize, Rect)>,
}

impl HitAreas {
	pub fn result_at(&self, column: u16, row: u16) -> Option<usize> {
		self.results
			.iter()
			.find(|(_, rect)| contains(*rect, column, row))
			.map(|(index, _)| *index)
	}

	pub fn link_at(&self, column: u16, row: u16) -> Option<usize> {
		self.links
			.iter()
			.find(|(_, rect)| contains(*rect, column, row))
			.map(|(index, _)| *index)
	}

	pub fn in_modal(&self, column: u16, row: u16) -> bool {
		self.modal.is_some_and(|rect| contains(rect, column, row))
	}

	pub fn on_close_button(&self, column: u16, row: u16) -> bool {
		self.close_button
			.is_some_and(|rect| contains(rect, column, row))
	}

	pub fn on_input(&self, column: u16, row: u16) -> bool {
		self.input.is_some_and(|rect| contains(rect, column, row))
	}
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
	column >= rect.x
		&& column < rect.x.saturating_add(rect.width)
		&& row >= rect.y
		&& row < rect.y.saturating_add(rect.height)
}

/// Truncate `text` to `width` columns, ending with an ellipsis when cut.
pub(crate) fn fit(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}
	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let w = ch.width().unwrap_or(0);
		if used + w + 1 > width {
			break;
		}
		used += w;
		out.push(ch);
	}
	out.push('…');
	out
}

pub(crate) fn draw(
	frame: &mut Frame,
	page: &mut Page<'_>,
	theme: &Theme,
	throbber: &ThrobberState,
	hits: &mut HitAreas,
) {
	*hits = HitAreas::default();
	let area = frame.area();
	draw_page(frame, page, theme, area, hits);

	if page.modal_visible() {
		frame
			.buffer_mut()
			.set_style(area, Style::new().add_modifier(Modifier::DIM));
		draw_modal(frame, page, theme, throbber, area, hits);
	}
}

fn draw_page(frame: &mut Frame, page: &Page<'_>, theme: &Theme, area: Rect, hits: &mut HitAreas) {
	let [title_area, location_area, _gap, links_area, help_area] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Min(0),
		Constraint::Length(1),
	])
	.areas(area);

	frame.render_widget(
		Paragraph::new(format!(" {}", page.title())).style(theme.header),
		title_area,
	);
	frame.render_widget(
		Paragraph::new(Line::from(vec![
			Span::styled(" at ", theme.empty_style()),
			Span::raw(page.location()),
		])),
		location_area,
	);

	let focused = match page.current_focus() {
		Some(Focus::Link(index)) => Some(index),
		_ => None,
	};
	let visible = usize::from(links_area.height);
	for (row, (index, link)) in page
		.links()
		.iter()
		.enumerate()
		.skip(page.link_offset())
		.take(visible)
		.enumerate()
	{
		let rect = Rect::new(links_area.x, links_area.y + row as u16, links_area.width, 1);
		let is_focused = focused == Some(index);
		let marker = if is_focused { "> " } else { "  " };
		let line = Line::from(vec![
			Span::styled(marker, theme.prompt),
			Span::styled(link.label.as_str(), theme.control_style(is_focused)),
			Span::raw("  "),
			Span::styled(link.url.as_str(), theme.empty_style()),
		]);
		frame.render_widget(Paragraph::new(line), rect);
		hits.links.push((index, rect));
	}

	frame.render_widget(
		Paragraph::new(fit(HELP, usize::from(help_area.width))).style(theme.empty_style()),
		help_area,
	);
}

fn modal_rect(area: Rect) -> Rect {
	let width = area.width.saturating_sub(4).min(MODAL_MAX_WIDTH).max(area.width.min(20));
	let rows = 4 + RESULT_HEIGHT * 10;
	let height = area.height.saturating_sub(2).min(rows + 2).max(area.height.min(6));
	let x = area.x + (area.width.saturating_sub(width)) / 2;
	let y = area.y + (area.height.saturating_sub(height)) / 2;
	Rect::new(x, y, width, height)
}

fn draw_modal(
	frame: &mut Frame,
	page: &mut Page<'_>,
	theme: &Theme,
	throbber: &ThrobberState,
	area: Rect,
	hits: &mut HitAreas,
) {
	let rect = modal_rect(area);
	hits.modal = Some(rect);
	frame.render_widget(Clear, rect);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.title(Span::styled(" Search ", theme.header));
	let inner = block.inner(rect);
	frame.render_widget(block, rect);

	let [input_row, message_row, results_area, status_row] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Min(0),
		Constraint::Length(1),
	])
	.areas(inner);

	draw_input_row(frame, page, theme, throbber, input_row, hits);

	let panel = page.panel().clone();
	match &panel {
		Panel::Results { count, rows } => {
			frame.render_widget(
				Paragraph::new(count.as_str()).style(theme.empty_style()),
				message_row,
			);
			draw_results(frame, page, theme, rows, results_area, hits);
		}
		Panel::Error(message) => {
			frame.render_widget(Paragraph::new(message.as_str()).style(theme.error), message_row);
		}
		Panel::NoResults { message } => {
			frame.render_widget(Paragraph::new(message.as_str()), message_row);
			let suggestion = format!(
				"Try different keywords or browse all posts at {}",
				page.browse_url()
			);
			frame.render_widget(
				Paragraph::new(fit(&suggestion, usize::from(results_area.width)))
					.style(theme.empty_style()),
				results_area,
			);
		}
		other => {
			let message = other.message().unwrap_or_default();
			frame.render_widget(
				Paragraph::new(message).style(theme.empty_style()),
				message_row,
			);
		}
	}

	if let Some(status) = page.status() {
		frame.render_widget(
			Paragraph::new(fit(status, usize::from(status_row.width)))
				.style(theme.empty_style().add_modifier(Modifier::ITALIC)),
			status_row,
		);
	}
}

fn draw_input_row(
	frame: &mut Frame,
	page: &mut Page<'_>,
	theme: &Theme,
	throbber: &ThrobberState,
	row: Rect,
	hits: &mut HitAreas,
) {
	let loading = matches!(page.panel(), Panel::Loading);
	let spinner_width = if loading { 2 } else { 0 };
	let [prompt_area, text_area, spinner_area, close_area] = Layout::horizontal([
		Constraint::Length(PROMPT.width() as u16),
		Constraint::Min(1),
		Constraint::Length(spinner_width),
		Constraint::Length(CLOSE_LABEL.width() as u16),
	])
	.areas(row);

	frame.render_widget(Paragraph::new(PROMPT).style(theme.prompt), prompt_area);

	let input_focused = page.current_focus() == Some(Focus::Input);
	page.input.set_cursor_visible(input_focused);
	page.input.render_textarea(frame, text_area);
	if page.query_text().is_empty() {
		frame.render_widget(
			Paragraph::new("Search posts and comics").style(theme.empty_style()),
			Rect::new(
				text_area.x.saturating_add(1),
				text_area.y,
				text_area.width.saturating_sub(1),
				1,
			),
		);
	}
	hits.input = Some(text_area);

	if loading {
		let spinner = Throbber::default()
			.style(theme.empty_style())
			.throbber_style(theme.empty_style())
			.to_symbol_span(throbber);
		frame.render_widget(Paragraph::new(Line::from(spinner)), spinner_area);
	}

	let close_focused = page.current_focus() == Some(Focus::CloseButton);
	frame.render_widget(
		Paragraph::new(CLOSE_LABEL).style(theme.control_style(close_focused)),
		close_area,
	);
	hits.close_button = Some(close_area);
}

fn draw_results(
	frame: &mut Frame,
	page: &mut Page<'_>,
	theme: &Theme,
	rows: &[ResultRow],
	area: Rect,
	hits: &mut HitAreas,
) {
	let visible = usize::from(area.height / RESULT_HEIGHT);
	page.set_visible_results(visible);
	let width = usize::from(area.width);
	let selected = page.selected();

	for (slot, (index, row)) in rows
		.iter()
		.enumerate()
		.skip(page.result_offset())
		.take(visible)
		.enumerate()
	{
		let rect = Rect::new(
			area.x,
			area.y + slot as u16 * RESULT_HEIGHT,
			area.width,
			RESULT_HEIGHT,
		);
		let is_selected = selected == Some(index);
		let marker = if is_selected { "> " } else { "  " };

		let mut meta = format!("  {}", row.kind);
		if let Some(date) = &row.date {
			meta.push_str("  ");
			meta.push_str(date);
		}
		let title_width = width.saturating_sub(marker.width() + meta.width());
		let title = Line::from(vec![
			Span::styled(marker, theme.prompt),
			Span::styled(fit(&row.title, title_width), theme.highlight),
			Span::styled(meta, theme.empty_style()),
		]);
		let excerpt = Line::from(Span::styled(
			fit(&format!("  {}", row.excerpt), width),
			theme.empty_style(),
		));

		let mut paragraph = Paragraph::new(vec![title, excerpt]);
		if is_selected {
			paragraph = paragraph.style(theme.row_highlight);
		}
		frame.render_widget(paragraph, rect);
		hits.results.push((index, rect));
	}
}

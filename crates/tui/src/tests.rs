use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use quire_palette::{
	IndexLoader, LazyResult, PaletteConfig, ResultData, ResultMeta, SearchIndex, SearchResponse,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::page::{Focus, PageLink, PageSpec, Panel};
use crate::App;

const POSTS: [(&str, &str); 3] = [
	("/blog/rust-traits/", "Rust traits"),
	("/blog/rust-async/", "Rust async"),
	("/comics/12/", "Crab comic"),
];

struct Hit(usize);

#[async_trait]
impl LazyResult for Hit {
	async fn data(&self) -> Result<ResultData> {
		let (url, title) = POSTS[self.0];
		Ok(ResultData {
			url: url.into(),
			meta: ResultMeta {
				title: Some(title.into()),
				date: Some("2024-01-05".into()),
			},
			excerpt: Some(format!("about {title}")),
		})
	}
}

struct Posts;

#[async_trait]
impl SearchIndex for Posts {
	async fn search(&self, query: &str) -> Result<SearchResponse> {
		let query = query.to_lowercase();
		let hits = POSTS
			.iter()
			.enumerate()
			.filter(|(_, (_, title))| title.to_lowercase().contains(&query))
			.map(|(index, _)| Box::new(Hit(index)) as Box<dyn LazyResult>)
			.collect();
		Ok(SearchResponse::new(hits))
	}
}

struct PostsLoader;

#[async_trait]
impl IndexLoader for PostsLoader {
	async fn initialize(&self) -> Result<Arc<dyn SearchIndex>> {
		Ok(Arc::new(Posts))
	}
}

fn app() -> App<'static> {
	let spec = PageSpec {
		title: "Field notes".into(),
		url: "/".into(),
		links: vec![
			PageLink {
				label: "Blog".into(),
				url: "/blog/".into(),
			},
			PageLink {
				label: "Comics".into(),
				url: "/comics/".into(),
			},
		],
	};
	App::new(spec, PaletteConfig::default(), Arc::new(PostsLoader)).unwrap()
}

fn press(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App<'_>, text: &str, now: Instant) {
	for ch in text.chars() {
		assert!(app.handle_key(press(KeyCode::Char(ch)), now).is_none());
	}
}

/// Let the debounce settle and wait for the worker to answer.
fn settle(app: &mut App<'_>, now: Instant) {
	app.tick(now + Duration::from_millis(300));
	let deadline = Instant::now() + Duration::from_secs(2);
	while Instant::now() < deadline {
		app.pump_search_events(now + Duration::from_millis(300));
		if matches!(app.page().panel(), Panel::Results { .. } | Panel::NoResults { .. }) {
			return;
		}
		thread::sleep(Duration::from_millis(5));
	}
	panic!("search never finished");
}

fn draw(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

#[test]
fn chord_opens_and_escape_restores_page_focus() {
	let mut app = app();
	let now = Instant::now();
	app.handle_key(press(KeyCode::Tab), now);
	assert_eq!(app.page().current_focus(), Some(Focus::Link(0)));

	app.handle_key(ctrl('k'), now);
	assert!(app.modal().is_open());
	assert!(app.page().modal_visible());
	assert!(app.page().scroll_locked());
	assert_eq!(app.page().current_focus(), Some(Focus::Input));

	app.handle_key(press(KeyCode::Esc), now);
	assert!(!app.modal().is_open());
	assert!(!app.page().modal_visible());
	assert_eq!(app.page().current_focus(), Some(Focus::Link(0)));
}

#[test]
fn q_quits_only_from_the_page() {
	let mut app = app();
	let now = Instant::now();
	app.handle_key(ctrl('k'), now);
	assert!(app.handle_key(press(KeyCode::Char('q')), now).is_none());
	assert_eq!(app.page().query_text(), "q");

	app.handle_key(press(KeyCode::Esc), now);
	let outcome = app.handle_key(press(KeyCode::Char('q')), now).unwrap();
	assert_eq!(outcome.url, "/");
	assert!(outcome.history.is_empty());
}

#[test]
fn tab_cycles_inside_the_modal() {
	let mut app = app();
	let now = Instant::now();
	app.handle_key(ctrl('k'), now);

	app.handle_key(press(KeyCode::Tab), now);
	assert_eq!(app.page().current_focus(), Some(Focus::CloseButton));
	app.handle_key(press(KeyCode::Tab), now);
	assert_eq!(app.page().current_focus(), Some(Focus::Input));
	app.handle_key(press(KeyCode::BackTab), now);
	assert_eq!(app.page().current_focus(), Some(Focus::CloseButton));

	app.handle_key(press(KeyCode::Enter), now);
	assert!(!app.modal().is_open());
}

#[test]
fn search_renders_results_and_enter_follows_selection() {
	let mut app = app();
	let now = Instant::now();
	app.handle_key(ctrl('k'), now);
	type_text(&mut app, "rust", now);
	settle(&mut app, now);

	let screen = draw(&mut app);
	assert!(screen.contains("2 results"));
	assert!(screen.contains("Rust traits"));
	assert!(screen.contains("Jan 5, 2024"));
	assert!(screen.contains("2 results found"));

	app.handle_key(press(KeyCode::Down), now);
	app.handle_key(press(KeyCode::Down), now);
	assert_eq!(app.modal().selection(), Some(1));
	assert_eq!(app.page().selected(), Some(1));

	app.handle_key(press(KeyCode::Enter), now);
	assert!(!app.modal().is_open());
	let outcome = app.outcome();
	assert_eq!(outcome.url, "/blog/rust-async/");
	assert_eq!(outcome.history, vec!["/blog/rust-async/".to_string()]);
}

#[test]
fn empty_search_shows_suggestion() {
	let mut app = app();
	let now = Instant::now();
	app.handle_key(ctrl('k'), now);
	type_text(&mut app, "zig", now);
	settle(&mut app, now);

	let screen = draw(&mut app);
	assert!(screen.contains("No results found for \"zig\""));
	assert!(screen.contains("/blog/"));
}

#[test]
fn clicks_route_to_results_and_backdrop() {
	let mut app = app();
	let now = Instant::now();
	app.handle_key(ctrl('k'), now);
	type_text(&mut app, "crab", now);
	settle(&mut app, now);
	draw(&mut app);

	let (_, rect) = app.hits.results[0];
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: rect.x + 1,
		row: rect.y,
		modifiers: KeyModifiers::NONE,
	});
	assert_eq!(app.page().location(), "/comics/12/");
	assert!(!app.modal().is_open());

	app.handle_key(ctrl('k'), now);
	draw(&mut app);
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column: 0,
		row: 0,
		modifiers: KeyModifiers::NONE,
	});
	assert!(!app.modal().is_open());
}

#[test]
fn page_links_navigate_while_closed() {
	let mut app = app();
	let now = Instant::now();
	app.handle_key(press(KeyCode::BackTab), now);
	app.handle_key(press(KeyCode::Enter), now);
	assert_eq!(app.page().location(), "/comics/");
}

#[test]
fn shifted_chord_does_not_open_the_modal() {
	let mut app = app();
	let now = Instant::now();
	let shifted = KeyEvent::new(
		KeyCode::Char('K'),
		KeyModifiers::CONTROL | KeyModifiers::SHIFT,
	);
	assert_eq!(crate::key_input(&shifted).key, quire_palette::Key::Char('K'));

	app.handle_key(shifted, now);
	assert!(!app.modal().is_open());

	app.handle_key(ctrl('k'), now);
	assert!(app.modal().is_open());
}

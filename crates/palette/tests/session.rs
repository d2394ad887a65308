//! Drives the controller against a real search worker.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use quire_palette::{
	Element, IndexLoader, LazyResult, PaletteConfig, ResultData, ResultMeta, SearchIndex,
	SearchModal, SearchRequest, SearchResponse, SearchWorker, Surface, ViewState,
};

#[derive(Default)]
struct PlainSurface {
	focus: Option<u8>,
	last_render: String,
}

impl Surface for PlainSurface {
	type Focus = u8;
	type Announcement = ();

	fn has_element(&self, _element: Element) -> bool {
		true
	}
	fn set_modal_hidden(&mut self, _hidden: bool) {}
	fn set_scroll_locked(&mut self, _locked: bool) {}
	fn active_focus(&self) -> Option<u8> {
		self.focus
	}
	fn focus(&mut self, target: &u8) {
		self.focus = Some(*target);
	}
	fn focus_input(&mut self) {
		self.focus = Some(0);
	}
	fn clear_input(&mut self) {}
	fn modal_focusables(&self) -> Vec<u8> {
		vec![0]
	}
	fn render(&mut self, view: &ViewState<'_>) {
		self.last_render = quire_palette::markup::render_view(view, "/blog/");
	}
	fn set_result_selected(&mut self, _index: usize, _selected: bool) {}
	fn scroll_result_into_view(&mut self, _index: usize) {}
	fn announce(&mut self, _message: &str) {}
	fn retract(&mut self, _announcement: ()) {}
	fn navigate(&mut self, _url: &str) {}
}

struct Post(&'static str);

#[async_trait]
impl LazyResult for Post {
	async fn data(&self) -> Result<ResultData> {
		Ok(ResultData {
			url: format!("/blog/{}/", self.0),
			meta: ResultMeta {
				title: Some(self.0.to_string()),
				date: Some("2024-01-05".into()),
			},
			excerpt: Some(format!("all about {}", self.0)),
		})
	}
}

struct Posts;

#[async_trait]
impl SearchIndex for Posts {
	async fn search(&self, query: &str) -> Result<SearchResponse> {
		let hits: Vec<Box<dyn LazyResult>> = ["rust-traits", "rust-async", "rust-macros"]
			.into_iter()
			.filter(|slug| slug.contains(query))
			.map(|slug| Box::new(Post(slug)) as Box<dyn LazyResult>)
			.collect();
		Ok(SearchResponse::new(hits))
	}
}

/// Fails the first initialization, succeeds afterwards.
struct FlakyLoader {
	attempts: Arc<AtomicUsize>,
}

#[async_trait]
impl IndexLoader for FlakyLoader {
	async fn initialize(&self) -> Result<Arc<dyn SearchIndex>> {
		if self.attempts.fetch_add(1, Ordering::SeqCst) == 0 {
			return Err(anyhow!("could not fetch /pagefind/pagefind.js"));
		}
		Ok(Arc::new(Posts))
	}
}

/// Pump worker events into the modal until the request settles.
fn run_to_completion(
	modal: &mut SearchModal<PlainSurface>,
	worker: &SearchWorker,
	request: SearchRequest,
) {
	worker.submit(request);
	let deadline = Instant::now() + Duration::from_secs(2);
	while Instant::now() < deadline {
		while let Ok(event) = worker.try_recv() {
			let finished = matches!(event.kind, quire_palette::SearchEventKind::Finished(_));
			modal.apply(event, Instant::now());
			if finished {
				return;
			}
		}
		thread::sleep(Duration::from_millis(5));
	}
	panic!("search never finished");
}

fn type_query(modal: &mut SearchModal<PlainSurface>, text: &str) -> SearchRequest {
	let now = Instant::now();
	modal.input_changed(text, now);
	modal
		.tick(now + Duration::from_millis(300))
		.expect("non-blank input issues a request")
}

#[test]
fn failed_initialization_is_retried_by_the_next_query() {
	let attempts = Arc::new(AtomicUsize::new(0));
	let loader = FlakyLoader {
		attempts: Arc::clone(&attempts),
	};
	let worker = SearchWorker::spawn(Arc::new(loader), 10).unwrap();
	let mut modal = SearchModal::new(PlainSurface::default(), PaletteConfig::default()).unwrap();
	modal.open();

	let request = type_query(&mut modal, "rust");
	run_to_completion(&mut modal, &worker, request);
	assert_eq!(modal.view(), ViewState::Error("Search is temporarily unavailable"));
	assert!(modal.surface().last_render.contains("search-error"));

	let request = type_query(&mut modal, "rust-a");
	run_to_completion(&mut modal, &worker, request);

	assert_eq!(attempts.load(Ordering::SeqCst), 2);
	match modal.view() {
		ViewState::Results(results) => {
			assert_eq!(results.total, 1);
			assert_eq!(results.entries[0].url, "/blog/rust-async/");
		}
		other => panic!("expected results, got {other:?}"),
	}
	assert!(modal.surface().last_render.contains("Jan 5, 2024"));
}

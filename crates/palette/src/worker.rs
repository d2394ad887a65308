use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::pipeline::{self, SearchEvent, SearchRequest};
use crate::provider::{IndexLoader, LazyIndex};

pub enum SearchCommand {
	Query(SearchRequest),
	Shutdown,
}

/// Background thread that runs search attempts on a tokio runtime.
///
/// Every query becomes its own task, so a slow provider call never holds back
/// a newer one. Events come back in completion order, which is why the
/// controller checks request ids before applying anything.
pub struct SearchWorker {
	commands: UnboundedSender<SearchCommand>,
	events: Receiver<SearchEvent>,
	thread: Option<JoinHandle<()>>,
}

impl SearchWorker {
	pub fn spawn(loader: Arc<dyn IndexLoader>, max_rendered: usize) -> io::Result<Self> {
		let (command_tx, command_rx) = unbounded_channel();
		let (event_tx, event_rx) = mpsc::channel();

		let runtime = tokio::runtime::Builder::new_current_thread()
			.enable_all()
			.build()?;
		let thread = thread::Builder::new()
			.name("quire-search".into())
			.spawn(move || {
				runtime.block_on(worker_loop(loader, max_rendered, command_rx, event_tx));
			})?;

		Ok(Self {
			commands: command_tx,
			events: event_rx,
			thread: Some(thread),
		})
	}

	pub fn submit(&self, request: SearchRequest) {
		tracing::debug!(id = request.id, query = %request.query, "submitting search");
		if self.commands.send(SearchCommand::Query(request)).is_err() {
			tracing::warn!("search worker is no longer running");
		}
	}

	pub fn try_recv(&self) -> Result<SearchEvent, TryRecvError> {
		self.events.try_recv()
	}

	pub fn shutdown(&mut self) {
		let _ = self.commands.send(SearchCommand::Shutdown);
		if let Some(thread) = self.thread.take()
			&& thread.join().is_err()
		{
			tracing::error!("search worker panicked");
		}
	}
}

impl Drop for SearchWorker {
	fn drop(&mut self) {
		self.shutdown();
	}
}

async fn worker_loop(
	loader: Arc<dyn IndexLoader>,
	max_rendered: usize,
	mut commands: UnboundedReceiver<SearchCommand>,
	events: mpsc::Sender<SearchEvent>,
) {
	let index = Arc::new(LazyIndex::new(loader));

	while let Some(command) = commands.recv().await {
		match command {
			SearchCommand::Query(request) => {
				let index = Arc::clone(&index);
				let events = events.clone();
				tokio::spawn(async move {
					pipeline::execute(&index, request, max_rendered, &events).await;
				});
			}
			SearchCommand::Shutdown => break,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use anyhow::Result;
	use async_trait::async_trait;

	use super::*;
	use crate::pipeline::SearchEventKind;
	use crate::provider::{LazyResult, ResultData, SearchIndex, SearchResponse};

	struct Page(String);

	#[async_trait]
	impl LazyResult for Page {
		async fn data(&self) -> Result<ResultData> {
			Ok(ResultData {
				url: self.0.clone(),
				..ResultData::default()
			})
		}
	}

	/// Queries starting with "slow" take longer than the others.
	struct SlowIndex;

	#[async_trait]
	impl SearchIndex for SlowIndex {
		async fn search(&self, query: &str) -> Result<SearchResponse> {
			if query.starts_with("slow") {
				tokio::time::sleep(Duration::from_millis(150)).await;
			}
			let page: Box<dyn LazyResult> = Box::new(Page(format!("/blog/{query}/")));
			Ok(SearchResponse::new(vec![page]))
		}
	}

	struct Loader;

	#[async_trait]
	impl IndexLoader for Loader {
		async fn initialize(&self) -> Result<Arc<dyn SearchIndex>> {
			Ok(Arc::new(SlowIndex))
		}
	}

	fn recv_finished(worker: &SearchWorker) -> SearchEvent {
		let deadline = std::time::Instant::now() + Duration::from_secs(2);
		loop {
			match worker.try_recv() {
				Ok(event) if matches!(event.kind, SearchEventKind::Finished(_)) => return event,
				Ok(_) => {}
				Err(TryRecvError::Empty) if std::time::Instant::now() < deadline => {
					thread::sleep(Duration::from_millis(5));
				}
				Err(err) => panic!("no search event: {err:?}"),
			}
		}
	}

	#[test]
	fn later_query_can_finish_first() {
		let mut worker = SearchWorker::spawn(Arc::new(Loader), 10).unwrap();

		worker.submit(SearchRequest {
			id: 1,
			query: "slow query".into(),
		});
		worker.submit(SearchRequest {
			id: 2,
			query: "fast".into(),
		});

		assert_eq!(recv_finished(&worker).id, 2);
		assert_eq!(recv_finished(&worker).id, 1);

		worker.shutdown();
	}
}

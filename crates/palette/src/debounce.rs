use std::time::{Duration, Instant};

/// Default quiet period before typed input is issued as a query.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Cancellable single-slot timer.
///
/// Scheduling replaces whatever was pending and restarts the window, so only
/// the most recent value survives a burst of calls. The host drives time by
/// calling [`Debouncer::poll`] from its tick.
#[derive(Debug)]
pub struct Debouncer<T> {
	delay: Duration,
	pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
	due: Instant,
	value: T,
}

impl<T> Debouncer<T> {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Replace any pending value and restart the window at `now`.
	pub fn schedule(&mut self, value: T, now: Instant) {
		self.pending = Some(Pending {
			due: now + self.delay,
			value,
		});
	}

	/// Drop the pending value, if any.
	pub fn cancel(&mut self) -> Option<T> {
		self.pending.take().map(|pending| pending.value)
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// When the pending value becomes due.
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.due)
	}

	/// Release the pending value once its window has elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		let due = self.deadline()?;
		if now >= due {
			self.cancel()
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn burst_collapses_to_latest_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(DEFAULT_DEBOUNCE);

		debouncer.schedule("c", start);
		debouncer.schedule("ca", start + Duration::from_millis(100));
		debouncer.schedule("cat", start + Duration::from_millis(200));

		assert_eq!(debouncer.poll(start + Duration::from_millis(450)), None);
		assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("cat"));
		assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
	}

	#[test]
	fn cancel_discards_pending_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(Duration::from_millis(10));
		debouncer.schedule(1, start);
		assert!(debouncer.is_pending());
		assert_eq!(debouncer.cancel(), Some(1));
		assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
		assert_eq!(debouncer.deadline(), None);
	}
}

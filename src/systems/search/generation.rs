use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Identity and cancellation scope of one background scan.
///
/// Clones share the same flag; the coordinator keeps one handle and the
/// scanner gets the other. A generation is never reused once cancelled.
#[derive(Debug, Clone)]
pub struct Generation {
	id: u64,
	cancelled: Arc<AtomicBool>,
}

impl Generation {
	pub fn new(id: u64) -> Self {
		Self {
			id,
			cancelled: Arc::new(AtomicBool::new(false)),
		}
	}

	pub fn id(&self) -> u64 {
		self.id
	}

	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::Release);
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Acquire)
	}
}

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Generation, ResultSet};

/// Single-slot hand-off of completed result sets to the coordinator.
///
/// Delivery checks the generation's cancellation flag while holding the lock,
/// and [`Mailbox::retire`] cancels under the same lock, so a generation that
/// has been retired can never fill the slot.
#[derive(Debug, Clone, Default)]
pub struct Mailbox {
	slot: Arc<Mutex<Option<ResultSet>>>,
}

impl Mailbox {
	pub fn new() -> Self {
		Self::default()
	}

	fn lock(&self) -> MutexGuard<'_, Option<ResultSet>> {
		self.slot.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Store `results` unless `generation` has been cancelled.
	///
	/// Returns whether the results were accepted. Any undrained set is
	/// replaced.
	pub fn deliver(&self, generation: &Generation, results: ResultSet) -> bool {
		let mut slot = self.lock();
		if generation.is_cancelled() {
			return false;
		}
		*slot = Some(results);
		true
	}

	/// Take the pending result set, leaving the slot empty.
	pub fn take(&self) -> Option<ResultSet> {
		self.lock().take()
	}

	/// Cancel `generation` and discard anything not yet drained.
	pub fn retire(&self, generation: &Generation) {
		let mut slot = self.lock();
		generation.cancel();
		*slot = None;
	}

	pub fn is_empty(&self) -> bool {
		self.lock().is_none()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::systems::search::{EntryKind, MatchEntry};

	fn results(path: &str) -> ResultSet {
		vec![MatchEntry::new(EntryKind::File, path)]
	}

	#[test]
	fn take_clears_the_slot() {
		let mailbox = Mailbox::new();
		let generation = Generation::new(1);
		assert!(mailbox.deliver(&generation, results("/a")));
		assert_eq!(mailbox.take(), Some(results("/a")));
		assert!(mailbox.take().is_none());
		assert!(mailbox.is_empty());
	}

	#[test]
	fn cancelled_generation_cannot_deliver() {
		let mailbox = Mailbox::new();
		let generation = Generation::new(1);
		mailbox.retire(&generation);
		assert!(!mailbox.deliver(&generation, results("/stale")));
		assert!(mailbox.is_empty());
	}

	#[test]
	fn retire_discards_undrained_results() {
		let mailbox = Mailbox::new();
		let generation = Generation::new(1);
		assert!(mailbox.deliver(&generation, results("/old")));
		mailbox.retire(&generation);
		assert!(mailbox.take().is_none());
	}

	#[test]
	fn clones_share_the_slot() {
		let mailbox = Mailbox::new();
		let worker_side = mailbox.clone();
		assert!(worker_side.deliver(&Generation::new(3), results("/b")));
		assert_eq!(mailbox.take(), Some(results("/b")));
	}
}

use std::sync::Arc;

use log::{debug, warn};

use crate::options::SearchOptions;
use crate::systems::search::{self, Generation, Keywords, LiveWorkers, Mailbox, ResultSet};

/// Owns the mailbox and the single active generation on the UI side.
pub(crate) struct SearchRuntime {
	options: Arc<SearchOptions>,
	mailbox: Mailbox,
	active: Option<Generation>,
	next_generation: u64,
	live: LiveWorkers,
}

impl SearchRuntime {
	pub(crate) fn new(options: Arc<SearchOptions>) -> Self {
		Self {
			options,
			mailbox: Mailbox::new(),
			active: None,
			next_generation: 0,
			live: LiveWorkers::default(),
		}
	}

	pub(crate) fn options(&self) -> &SearchOptions {
		&self.options
	}

	/// Retire the active generation, then spawn a fresh scan if the query
	/// passes the length gate and has at least one keyword.
	///
	/// Returns whether a scan is now in flight.
	pub(crate) fn restart(&mut self, query: &str, keywords: &Keywords) -> bool {
		self.cancel();
		if !self.options.should_scan(query) || keywords.is_empty() {
			return false;
		}

		self.next_generation = self.next_generation.wrapping_add(1);
		let generation = Generation::new(self.next_generation);
		let spawned = search::spawn(
			keywords.clone(),
			Arc::clone(&self.options),
			generation.clone(),
			self.mailbox.clone(),
			&self.live,
		);
		match spawned {
			Ok(()) => {
				debug!(
					"generation {} spawned for {:?} ({} scanners alive)",
					generation.id(),
					query,
					self.live.count()
				);
				self.active = Some(generation);
				true
			}
			Err(err) => {
				warn!("failed to spawn scanner: {err}");
				false
			}
		}
	}

	/// Retire the active generation, if any.
	pub(crate) fn cancel(&mut self) {
		if let Some(generation) = self.active.take() {
			self.mailbox.retire(&generation);
			debug!("generation {} cancelled", generation.id());
		}
	}

	/// Drain the mailbox. A delivery means the active scan has finished.
	pub(crate) fn take_results(&mut self) -> Option<ResultSet> {
		let results = self.mailbox.take()?;
		self.active = None;
		Some(results)
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.active.is_some()
	}

	pub(crate) fn live_workers(&self) -> usize {
		self.live.count()
	}
}


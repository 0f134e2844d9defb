use std::sync::Arc;

use log::debug;
use throbber_widgets_tui::ThrobberState;

use super::theme::Theme;
use crate::opener::{Launcher, Opener, SystemLauncher};
use crate::options::SearchOptions;

mod search_runtime;
mod view;

use search_runtime::SearchRuntime;
pub use view::ViewState;

impl Drop for App {
	fn drop(&mut self) {
		self.search.cancel();
	}
}

/// The coordinator: view state plus the scan lifecycle behind it.
pub struct App {
	pub(crate) view: ViewState,
	pub(crate) search: SearchRuntime,
	pub(crate) opener: Opener,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
}

impl App {
	pub fn new(options: SearchOptions) -> Self {
		Self::with_launcher(options, Box::new(SystemLauncher))
	}

	pub fn with_launcher(options: SearchOptions, launcher: Box<dyn Launcher>) -> Self {
		Self {
			view: ViewState::new(),
			search: SearchRuntime::new(Arc::new(options)),
			opener: Opener::new(launcher),
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
		}
	}

	pub fn view(&self) -> &ViewState {
		&self.view
	}

	pub fn options(&self) -> &SearchOptions {
		self.search.options()
	}

	/// Whether the active generation has yet to deliver.
	pub fn is_scanning(&self) -> bool {
		self.search.is_in_flight()
	}

	/// Scanner threads still running, superseded ones included.
	pub fn live_scanners(&self) -> usize {
		self.search.live_workers()
	}

	/// Move a delivered result set into the view, resetting the cursor.
	///
	/// Returns whether anything was drained.
	pub fn drain_results(&mut self) -> bool {
		let Some(results) = self.search.take_results() else {
			return false;
		};
		debug!("drained {} matches for {:?}", results.len(), self.view.query());
		self.view.replace_results(results);
		true
	}

	/// React to an edited query: retire the active scan and either start a new
	/// one or clear the results on the spot.
	pub(crate) fn apply_query_change(&mut self) {
		if !self.search.restart(self.view.query(), self.view.keywords()) {
			self.view.clear_results();
		}
	}
}

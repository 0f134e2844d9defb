use crate::systems::search::{Keywords, MatchEntry, ResultSet};

/// Query, results and cursor position shown on screen.
///
/// After every mutation `selected < results.len()` (or `0` when empty), and
/// after [`ViewState::ensure_visible`] the selection lies inside the window
/// starting at `scroll_top`.
#[derive(Debug, Default, Clone)]
pub struct ViewState {
	query: String,
	keywords: Keywords,
	results: ResultSet,
	selected: usize,
	scroll_top: usize,
}

impl ViewState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn keywords(&self) -> &Keywords {
		&self.keywords
	}

	pub fn results(&self) -> &[MatchEntry] {
		&self.results
	}

	pub fn selected(&self) -> usize {
		self.selected
	}

	pub fn scroll_top(&self) -> usize {
		self.scroll_top
	}

	pub fn selected_entry(&self) -> Option<&MatchEntry> {
		self.results.get(self.selected)
	}

	pub(crate) fn push_char(&mut self, ch: char) {
		self.query.push(ch);
		self.keywords = Keywords::parse(&self.query);
	}

	/// Remove the last character of the query. Returns whether it changed.
	pub(crate) fn pop_char(&mut self) -> bool {
		if self.query.pop().is_none() {
			return false;
		}
		self.keywords = Keywords::parse(&self.query);
		true
	}

	pub(crate) fn move_up(&mut self) {
		self.selected = self.selected.saturating_sub(1);
	}

	pub(crate) fn move_down(&mut self) {
		let last = self.results.len().saturating_sub(1);
		self.selected = (self.selected + 1).min(last);
	}

	/// Install a freshly delivered result set and reset the cursor.
	pub(crate) fn replace_results(&mut self, results: ResultSet) {
		self.results = results;
		self.selected = 0;
		self.scroll_top = 0;
	}

	pub(crate) fn clear_results(&mut self) {
		self.replace_results(ResultSet::new());
	}

	/// Scroll so the selection sits inside a window of `visible_rows` rows.
	pub(crate) fn ensure_visible(&mut self, visible_rows: usize) {
		let visible_rows = visible_rows.max(1);
		if self.selected < self.scroll_top {
			self.scroll_top = self.selected;
		}
		if self.selected >= self.scroll_top + visible_rows {
			self.scroll_top = self.selected + 1 - visible_rows;
		}
	}
}

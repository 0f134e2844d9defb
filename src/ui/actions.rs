use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

/// Whether the event loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Exit,
}

impl App {
	/// Apply one input event, then restore the scroll invariant for a window
	/// of `visible_rows` and, if the query changed, restart the scan.
	pub fn handle_event(&mut self, event: Event, visible_rows: usize) -> Flow {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, visible_rows),
			_ => Flow::Continue,
		}
	}

	pub(crate) fn handle_key(&mut self, key: KeyEvent, visible_rows: usize) -> Flow {
		let modified = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
		let mut query_changed = false;
		match key.code {
			KeyCode::Esc => return Flow::Exit,
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Flow::Exit,
			KeyCode::Char(ch) if !modified && !ch.is_control() => {
				self.view.push_char(ch);
				query_changed = true;
			}
			KeyCode::Backspace => query_changed = self.view.pop_char(),
			KeyCode::Up => self.view.move_up(),
			KeyCode::Down => self.view.move_down(),
			KeyCode::Enter => self.open_selected(),
			_ => {}
		}

		self.view.ensure_visible(visible_rows);
		if query_changed {
			self.apply_query_change();
		}
		Flow::Continue
	}

	fn open_selected(&self) {
		if let Some(entry) = self.view.selected_entry() {
			self.opener.open_parent(&entry.path);
		}
	}
}

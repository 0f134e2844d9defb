use anyhow::Result;
use log::info;
use ratatui::{Terminal, backend::Backend};

use super::input::{InputSource, TerminalInput};
use super::{App, Flow};
use crate::options::SearchOptions;

/// Take over the terminal and run the search UI until the user quits.
///
/// The terminal is restored on every exit path, including errors; panics are
/// covered by the hook `ratatui::init` installs.
pub fn run(options: SearchOptions) -> Result<()> {
	info!("searching under {}", options.root.display());
	let mut input = TerminalInput::new(options.wait);
	let mut app = App::new(options);

	let mut terminal = ratatui::init();
	let result = app.run(&mut terminal, &mut input);
	ratatui::restore();

	info!("exiting with {} scanners still alive", app.live_scanners());
	result
}

impl App {
	/// Pump the tick cycle until an exit key: drain the mailbox, redraw, wait
	/// up to one tick for input, then apply it.
	pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>, input: &mut dyn InputSource) -> Result<()> {
		terminal.clear()?;
		let tick = self.options().tick;

		loop {
			self.drain_results();
			self.throbber_state.calc_next();

			let mut visible_rows = 1;
			terminal.draw(|frame| visible_rows = self.draw(frame))?;

			let Some(event) = input.next_event(tick)? else {
				continue;
			};
			if self.handle_event(event, visible_rows) == Flow::Exit {
				return Ok(());
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::VecDeque;
	use std::fs;
	use std::thread;
	use std::time::Duration;

	use anyhow::anyhow;
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
	use tempfile::TempDir;

	use super::*;

	/// Replays a fixed script; `None` entries stand for timed-out waits.
	struct Scripted {
		events: VecDeque<Option<Event>>,
	}

	impl Scripted {
		fn typing(text: &str) -> Self {
			let events = text
				.chars()
				.map(|ch| Some(Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))))
				.collect();
			Self { events }
		}

		fn then(mut self, event: Option<Event>) -> Self {
			self.events.push_back(event);
			self
		}
	}

	impl InputSource for Scripted {
		fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
			let event = self
				.events
				.pop_front()
				.ok_or_else(|| anyhow!("script exhausted"))?;
			if event.is_none() {
				thread::sleep(timeout);
			}
			Ok(event)
		}
	}

	fn esc() -> Option<Event> {
		Some(Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
	}

	fn header(terminal: &Terminal<TestBackend>) -> String {
		let buffer = terminal.backend().buffer();
		(0..buffer.area.width)
			.map(|x| buffer[(x, 0)].symbol())
			.collect::<String>()
			.trim_end()
			.to_string()
	}

	#[test]
	fn loop_exits_on_escape_and_renders_query() {
		let dir = TempDir::new().unwrap();
		let mut app = App::new(SearchOptions::with_root(dir.path()));
		let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
		let mut input = Scripted::typing("ab").then(None).then(esc());

		app.run(&mut terminal, &mut input).unwrap();
		assert_eq!(app.view().query(), "ab");
		assert_eq!(header(&terminal), "Search: ab");
	}

	#[test]
	fn input_errors_end_the_loop() {
		let dir = TempDir::new().unwrap();
		let mut app = App::new(SearchOptions::with_root(dir.path()));
		let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
		let mut input = Scripted::typing("x");
		assert!(app.run(&mut terminal, &mut input).is_err());
	}

	#[test]
	fn timeouts_still_drain_the_mailbox() {
		let dir = TempDir::new().unwrap();
		fs::write(dir.path().join("invoice_2024.pdf"), b"").unwrap();
		let mut options = SearchOptions::with_root(dir.path());
		options.tick = Duration::from_millis(10);
		let mut app = App::new(options);
		let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();

		// Type the query, then sit idle long enough for the scan to land.
		let mut input = Scripted::typing("invoice");
		for _ in 0..300 {
			input = input.then(None);
		}
		let mut input = input.then(esc());

		app.run(&mut terminal, &mut input).unwrap();
		assert_eq!(app.view().results().len(), 1);
		assert!(!app.is_scanning());
		let buffer = terminal.backend().buffer();
		let row: String = (0..buffer.area.width).map(|x| buffer[(x, 2)].symbol()).collect();
		assert!(row.starts_with("[F] "));
		assert!(row.contains("invoice_2024.pdf"));
	}
}

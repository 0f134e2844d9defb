use std::thread;
use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event};

use crate::options::WaitStrategy;

/// Source of input events for the event loop.
///
/// `Ok(None)` means the wait budget ran out without input; the loop treats it
/// as an empty tick.
pub trait InputSource {
	fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Reads events from the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalInput {
	wait: WaitStrategy,
}

impl TerminalInput {
	pub fn new(wait: WaitStrategy) -> Self {
		Self { wait }
	}
}

impl InputSource for TerminalInput {
	fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
		match self.wait {
			WaitStrategy::Blocking => {
				if event::poll(timeout)? {
					return Ok(Some(event::read()?));
				}
				Ok(None)
			}
			WaitStrategy::Polling => {
				if event::poll(Duration::ZERO)? {
					return Ok(Some(event::read()?));
				}
				thread::sleep(timeout);
				Ok(None)
			}
		}
	}
}

mod cli;

use std::io::{self, Write};

use anyhow::Result;
use nothree::{SearchOptions, logging};

const EXIT_MESSAGE: &str = "nothree exited.";

/// Prints the exit message when dropped, including while unwinding a panic.
struct ExitMessage<W: Write> {
	out: W,
}

impl<W: Write> Drop for ExitMessage<W> {
	fn drop(&mut self) {
		let _ = writeln!(self.out, "{EXIT_MESSAGE}");
		let _ = self.out.flush();
	}
}

fn main() -> Result<()> {
	cli::parse_cli();
	let _exit = ExitMessage { out: io::stdout() };

	// Logging is best effort; the UI runs the same without a log file.
	let _ = logging::initialize();

	SearchOptions::for_home().and_then(nothree::run)
}

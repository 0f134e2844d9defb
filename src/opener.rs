//! Fire-and-forget dispatch to the platform's "open folder" command.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use log::debug;
use thiserror::Error;

/// Failure to start the folder-opening command.
#[derive(Debug, Error)]
pub enum LaunchError {
	#[error("failed to spawn `{program}`")]
	Spawn {
		program: &'static str,
		#[source]
		source: io::Error,
	},
}

/// Something that can open a directory in a file manager.
pub trait Launcher: Send {
	fn launch(&self, dir: &Path) -> Result<(), LaunchError>;
}

/// Launches the OS-native folder opener as a detached child process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
	/// Program used to open folders on the current platform.
	pub fn program() -> &'static str {
		if cfg!(target_os = "macos") {
			"open"
		} else if cfg!(windows) {
			"explorer"
		} else {
			"xdg-open"
		}
	}
}

impl Launcher for SystemLauncher {
	fn launch(&self, dir: &Path) -> Result<(), LaunchError> {
		spawn_detached(Self::program(), dir)
	}
}

/// Start `program dir` with null stdio and return without waiting on it.
fn spawn_detached(program: &'static str, dir: &Path) -> Result<(), LaunchError> {
	let mut child = Command::new(program)
		.arg(dir)
		.stdin(Stdio::null())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
		.map_err(|source| LaunchError::Spawn { program, source })?;

	// Reaped off-thread so it never lingers as a zombie; the exit status is
	// discarded.
	thread::spawn(move || {
		let _ = child.wait();
	});
	Ok(())
}

/// Opens the folder containing a selected entry, never failing the caller.
pub struct Opener {
	launcher: Box<dyn Launcher>,
}

impl Opener {
	pub fn new(launcher: Box<dyn Launcher>) -> Self {
		Self { launcher }
	}

	/// Open the parent directory of `path`.
	pub fn open_parent(&self, path: &Path) {
		let dir = path.parent().unwrap_or(path);
		if let Err(err) = self.launcher.launch(dir) {
			let LaunchError::Spawn { source, .. } = &err;
			debug!("{err} for {}: {source}", dir.display());
		}
	}
}

impl Default for Opener {
	fn default() -> Self {
		Self::new(Box::new(SystemLauncher))
	}
}

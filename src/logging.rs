//! File-backed logging for the terminal UI.
//!
//! The full-screen interface owns the terminal, so log records go to a file in
//! the cache directory instead of stderr. The filter level is fixed; no
//! environment variable is read.

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::app_dirs;

#[cfg(debug_assertions)]
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Install the global logger, returning the path of the file it writes to.
///
/// Callers are free to ignore the error: a missing log file never prevents the
/// tool from running, it only means log macros become no-ops.
pub fn initialize() -> Result<PathBuf> {
	let path = app_dirs::get_log_file()?;
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = File::create(&path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;

	Builder::new()
		.filter_level(DEFAULT_LEVEL)
		.format_timestamp_millis()
		.target(Target::Pipe(Box::new(file)))
		.try_init()
		.context("a global logger is already installed")?;

	log::info!("logging to {}", path.display());
	Ok(path)
}

use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::app_dirs;

/// Raw query length (in characters) at which scanning starts.
pub const MIN_QUERY_LEN: usize = 4;
/// Input wait budget for one tick of the event loop.
pub const TICK: Duration = Duration::from_millis(100);
/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: [&str; 5] = [".git", ".hg", ".svn", "node_modules", "__pycache__"];
/// Directories whose name starts with this character are pruned as hidden.
pub const HIDDEN_PREFIX: char = '.';

/// How the event loop waits for input between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WaitStrategy {
	/// Block on the terminal for up to one tick.
	#[default]
	Blocking,
	/// Check the terminal without blocking, then sleep for one tick.
	Polling,
}

/// Configuration options for scanning and the event loop.
///
/// These are fixed for the binary. They exist as a value so the scanner and
/// coordinator can be pointed at another root under test.
#[derive(Debug, Clone)]
pub struct SearchOptions {
	/// Directory every scan is rooted at.
	pub root: PathBuf,
	/// Raw query length at which a scan is spawned.
	pub min_query_len: usize,
	/// Input wait budget per tick.
	pub tick: Duration,
	/// Directory names to always prune.
	pub excluded_dirs: Vec<String>,
	/// Leading character marking a hidden directory.
	pub hidden_prefix: char,
	/// Input waiting behaviour of the event loop.
	pub wait: WaitStrategy,
}

impl SearchOptions {
	/// Options rooted at the current user's home directory.
	pub fn for_home() -> Result<Self> {
		Ok(Self::with_root(app_dirs::get_home_dir()?))
	}

	/// Default options rooted at `root`.
	pub fn with_root(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
			min_query_len: MIN_QUERY_LEN,
			tick: TICK,
			excluded_dirs: EXCLUDED_DIRS.iter().map(|name| name.to_string()).collect(),
			hidden_prefix: HIDDEN_PREFIX,
			wait: WaitStrategy::default(),
		}
	}

	/// Whether a directory with this name is pruned from traversal and results.
	pub fn is_excluded_dir(&self, name: &OsStr) -> bool {
		let name = name.to_string_lossy();
		name.starts_with(self.hidden_prefix)
			|| self.excluded_dirs.iter().any(|excluded| *excluded == name)
	}

	/// Whether `query` is long enough to trigger a scan.
	///
	/// The gate counts characters of the raw query, whitespace included.
	pub fn should_scan(&self, query: &str) -> bool {
		query.chars().count() >= self.min_query_len
	}
}

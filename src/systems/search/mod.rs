//! Cancellable background scans of the search root.
//!
//! A scan is identified by a [`Generation`]. The coordinator holds at most one
//! active generation; superseded generations may keep running until their
//! next per-directory checkpoint, but the [`Mailbox`] refuses anything they
//! try to deliver.

mod generation;
mod mailbox;
mod matcher;
mod worker;

pub use generation::Generation;
pub use mailbox::Mailbox;
pub use matcher::Keywords;
pub use worker::{LiveWorkers, scan, spawn};

use std::path::PathBuf;

/// Whether a match is a regular file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
	File,
	Directory,
}

impl EntryKind {
	/// Marker drawn in front of the path in the results list.
	pub fn marker(self) -> &'static str {
		match self {
			Self::File => "[F]",
			Self::Directory => "[D]",
		}
	}
}

/// A single path that satisfied every keyword of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
	pub kind: EntryKind,
	pub path: PathBuf,
}

impl MatchEntry {
	pub fn new(kind: EntryKind, path: impl Into<PathBuf>) -> Self {
		Self {
			kind,
			path: path.into(),
		}
	}
}

/// Matches in traversal order. Never sorted or deduplicated.
pub type ResultSet = Vec<MatchEntry>;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use log::debug;
use walkdir::WalkDir;

use super::{EntryKind, Generation, Keywords, Mailbox, MatchEntry, ResultSet};
use crate::options::SearchOptions;

/// Number of scanner threads that have not exited yet, superseded ones
/// included.
#[derive(Debug, Clone, Default)]
pub struct LiveWorkers(Arc<AtomicUsize>);

impl LiveWorkers {
	pub fn count(&self) -> usize {
		self.0.load(Ordering::Acquire)
	}

	fn enter(&self) -> LiveGuard {
		self.0.fetch_add(1, Ordering::AcqRel);
		LiveGuard(Arc::clone(&self.0))
	}
}

struct LiveGuard(Arc<AtomicUsize>);

impl Drop for LiveGuard {
	fn drop(&mut self) {
		self.0.fetch_sub(1, Ordering::AcqRel);
	}
}

/// Launches a detached scanner thread for `generation`.
///
/// The thread is never joined. It writes into `mailbox` only if it finishes
/// the walk and its generation is still live at that moment.
pub fn spawn(
	keywords: Keywords,
	options: Arc<SearchOptions>,
	generation: Generation,
	mailbox: Mailbox,
	live: &LiveWorkers,
) -> io::Result<()> {
	let guard = live.enter();
	thread::Builder::new()
		.name(format!("scan-{}", generation.id()))
		.spawn(move || {
			let _guard = guard;
			let id = generation.id();
			let Some(results) = scan(&keywords, &options, &generation) else {
				debug!("generation {id} cancelled mid-walk");
				return;
			};
			let count = results.len();
			if mailbox.deliver(&generation, results) {
				debug!("generation {id} delivered {count} matches");
			} else {
				debug!("generation {id} finished after cancellation, {count} matches dropped");
			}
		})?;
	Ok(())
}

/// Walk `options.root` top-down and collect every entry whose full path
/// matches `keywords`.
///
/// Each directory is reported a whole level at a time: its files, then its
/// subdirectories, each group ordered by name. Its subdirectories are visited
/// next, in the same order. Excluded directories are neither reported nor
/// descended into. Symlinks are never followed; one that resolves to a
/// directory is reported and pruned as a directory. Unreadable entries are
/// skipped. Cancellation is checked before each directory's batch and yields
/// `None`.
pub fn scan(keywords: &Keywords, options: &SearchOptions, generation: &Generation) -> Option<ResultSet> {
	let mut results = ResultSet::new();
	let mut pending = vec![options.root.clone()];

	while let Some(dir) = pending.pop() {
		if generation.is_cancelled() {
			return None;
		}

		let (files, dirs) = read_level(&dir, options);
		for (kind, entries) in [(EntryKind::File, &files), (EntryKind::Directory, &dirs)] {
			for entry in entries {
				if keywords.matches_path(&entry.path) {
					results.push(MatchEntry::new(kind, &entry.path));
				}
			}
		}

		pending.extend(dirs.into_iter().rev().filter(|entry| entry.descend).map(|entry| entry.path));
	}

	Some(results)
}

struct LevelEntry {
	path: PathBuf,
	descend: bool,
}

/// List the direct children of `dir`, split into files and non-excluded
/// directories, both sorted by name.
fn read_level(dir: &Path, options: &SearchOptions) -> (Vec<LevelEntry>, Vec<LevelEntry>) {
	let mut files = Vec::new();
	let mut dirs = Vec::new();
	let level = WalkDir::new(dir)
		.min_depth(1)
		.max_depth(1)
		.sort_by_file_name()
		.into_iter()
		.filter_map(Result::ok);

	for entry in level {
		let real_dir = entry.file_type().is_dir();
		let linked_dir = entry.path_is_symlink() && fs::metadata(entry.path()).is_ok_and(|meta| meta.is_dir());
		if !real_dir && !linked_dir {
			files.push(LevelEntry { path: entry.into_path(), descend: false });
			continue;
		}
		if options.is_excluded_dir(entry.file_name()) {
			continue;
		}
		dirs.push(LevelEntry { path: entry.into_path(), descend: real_dir });
	}

	(files, dirs)
}

#[cfg(test)]
mod tests {
	use std::time::{Duration, Instant};

	use tempfile::TempDir;

	use super::*;

	fn touch(root: &Path, relative: &str) {
		let path = root.join(relative);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).unwrap();
		}
		fs::write(path, b"").unwrap();
	}

	fn fixture() -> TempDir {
		let dir = TempDir::new().unwrap();
		let root = dir.path();
		touch(root, "Documents/report_final.pdf");
		touch(root, "Documents/notes.txt");
		touch(root, "Downloads/report_draft.txt");
		touch(root, "report_index.md");
		fs::create_dir_all(root.join("Reports/archive")).unwrap();
		touch(root, ".cache/report_cached.txt");
		touch(root, "node_modules/report/index.js");
		touch(root, "code/.git/report_ref");
		touch(root, "code/__pycache__/report.pyc");
		dir
	}

	fn relative(root: &Path, results: &ResultSet) -> Vec<(EntryKind, PathBuf)> {
		results
			.iter()
			.map(|entry| {
				let rel = entry.path.strip_prefix(root).unwrap().to_path_buf();
				(entry.kind, rel)
			})
			.collect()
	}

	#[test]
	fn conjunctive_match_on_full_path() {
		let dir = fixture();
		let options = SearchOptions::with_root(dir.path());
		let results = scan(&Keywords::parse("report final"), &options, &Generation::new(1)).unwrap();
		assert_eq!(
			relative(dir.path(), &results),
			vec![(EntryKind::File, PathBuf::from("Documents/report_final.pdf"))]
		);
		for entry in &results {
			let lower = entry.path.to_string_lossy().to_lowercase();
			assert!(lower.contains("report") && lower.contains("final"));
		}
	}

	#[test]
	fn traversal_order_and_kinds() {
		let dir = fixture();
		let options = SearchOptions::with_root(dir.path());
		let results = scan(&Keywords::parse("report"), &options, &Generation::new(1)).unwrap();
		assert_eq!(
			relative(dir.path(), &results),
			vec![
				(EntryKind::File, PathBuf::from("report_index.md")),
				(EntryKind::Directory, PathBuf::from("Reports")),
				(EntryKind::File, PathBuf::from("Documents/report_final.pdf")),
				(EntryKind::File, PathBuf::from("Downloads/report_draft.txt")),
				(EntryKind::Directory, PathBuf::from("Reports/archive")),
			]
		);
	}

	#[test]
	fn sibling_directories_precede_nested_contents() {
		let dir = TempDir::new().unwrap();
		let root = dir.path();
		touch(root, "a_rep/x_rep.txt");
		fs::create_dir_all(root.join("a_rep/inner")).unwrap();
		fs::create_dir_all(root.join("z_rep")).unwrap();

		let options = SearchOptions::with_root(root);
		let results = scan(&Keywords::parse("rep"), &options, &Generation::new(1)).unwrap();
		assert_eq!(
			relative(root, &results),
			vec![
				(EntryKind::Directory, PathBuf::from("a_rep")),
				(EntryKind::Directory, PathBuf::from("z_rep")),
				(EntryKind::File, PathBuf::from("a_rep/x_rep.txt")),
				(EntryKind::Directory, PathBuf::from("a_rep/inner")),
			]
		);
	}

	#[cfg(unix)]
	#[test]
	fn symlinked_excluded_directory_is_pruned() {
		let target = TempDir::new().unwrap();
		touch(target.path(), "left-pad/index.js");
		let dir = TempDir::new().unwrap();
		fs::create_dir_all(dir.path().join("proj")).unwrap();
		std::os::unix::fs::symlink(target.path(), dir.path().join("proj/node_modules")).unwrap();

		let options = SearchOptions::with_root(dir.path());
		let results = scan(&Keywords::parse("node_modules"), &options, &Generation::new(1)).unwrap();
		assert!(results.is_empty(), "{results:?}");
	}

	#[cfg(unix)]
	#[test]
	fn symlinked_directory_is_reported_but_not_followed() {
		let target = TempDir::new().unwrap();
		touch(target.path(), "linked_note.txt");
		let dir = TempDir::new().unwrap();
		std::os::unix::fs::symlink(target.path(), dir.path().join("linked")).unwrap();

		let options = SearchOptions::with_root(dir.path());
		let results = scan(&Keywords::parse("linked"), &options, &Generation::new(1)).unwrap();
		assert_eq!(
			relative(dir.path(), &results),
			vec![(EntryKind::Directory, PathBuf::from("linked"))]
		);
	}

	#[test]
	fn excluded_directories_are_pruned() {
		let dir = fixture();
		let options = SearchOptions::with_root(dir.path());
		let results = scan(&Keywords::parse("report"), &options, &Generation::new(1)).unwrap();
		let rendered: Vec<_> = relative(dir.path(), &results).into_iter().map(|(_, p)| p).collect();
		for pruned in [".cache", "node_modules", "code/.git", "code/__pycache__"] {
			assert!(
				rendered.iter().all(|path| !path.starts_with(pruned)),
				"{pruned} should be pruned"
			);
		}
	}

	#[test]
	fn cancelled_generation_yields_nothing() {
		let dir = fixture();
		let options = SearchOptions::with_root(dir.path());
		let generation = Generation::new(1);
		generation.cancel();
		assert!(scan(&Keywords::parse("report"), &options, &generation).is_none());
	}

	#[test]
	fn missing_root_is_an_empty_scan() {
		let dir = TempDir::new().unwrap();
		let options = SearchOptions::with_root(dir.path().join("gone"));
		let results = scan(&Keywords::parse("anything"), &options, &Generation::new(1)).unwrap();
		assert!(results.is_empty());
	}

	fn wait_for(mailbox: &Mailbox, live: &LiveWorkers) -> Option<ResultSet> {
		let deadline = Instant::now() + Duration::from_secs(5);
		while Instant::now() < deadline {
			if let Some(results) = mailbox.take() {
				return Some(results);
			}
			if live.count() == 0 {
				return mailbox.take();
			}
			thread::sleep(Duration::from_millis(5));
		}
		None
	}

	#[test]
	fn spawned_scan_delivers_into_mailbox() {
		let dir = fixture();
		let options = Arc::new(SearchOptions::with_root(dir.path()));
		let mailbox = Mailbox::new();
		let live = LiveWorkers::default();
		spawn(
			Keywords::parse("draft"),
			options,
			Generation::new(1),
			mailbox.clone(),
			&live,
		)
		.unwrap();

		let results = wait_for(&mailbox, &live).expect("scan should deliver");
		assert_eq!(
			relative(dir.path(), &results),
			vec![(EntryKind::File, PathBuf::from("Downloads/report_draft.txt"))]
		);
	}

	#[test]
	fn retired_generation_never_delivers() {
		let dir = fixture();
		let options = Arc::new(SearchOptions::with_root(dir.path()));
		let mailbox = Mailbox::new();
		let live = LiveWorkers::default();
		let generation = Generation::new(1);
		mailbox.retire(&generation);
		spawn(Keywords::parse("report"), options, generation, mailbox.clone(), &live).unwrap();

		let deadline = Instant::now() + Duration::from_secs(5);
		while live.count() > 0 && Instant::now() < deadline {
			thread::sleep(Duration::from_millis(5));
		}
		assert_eq!(live.count(), 0);
		assert!(mailbox.take().is_none());
	}
}

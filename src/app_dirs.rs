//! Resolve the home and cache directories used by `nothree`.
//!
//! Both come from the platform conventions exposed by the `directories`
//! crate. Nothing here consults the environment directly.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::{BaseDirs, ProjectDirs};

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "nothree";
const APPLICATION: &str = "nothree";

const LOG_FILE_NAME: &str = "nothree.log";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for nothree"))
}

/// Return the current user's home directory, the fixed root of every scan.
pub fn get_home_dir() -> Result<PathBuf> {
	BaseDirs::new()
		.map(|dirs| dirs.home_dir().to_path_buf())
		.ok_or_else(|| anyhow!("unable to determine the home directory"))
}

/// Return the cache directory for the log file.
pub fn get_cache_dir() -> Result<PathBuf> {
	Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Return the path of the log file inside the cache directory.
pub fn get_log_file() -> Result<PathBuf> {
	Ok(get_cache_dir()?.join(LOG_FILE_NAME))
}

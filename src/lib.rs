//! Core crate exports for building and running the `nothree` terminal search.
//!
//! The background scanning machinery lives under [`systems`], the event loop,
//! state and rendering under [`ui`]. The root module re-exports the handful of
//! types an embedder needs to point the tool at a directory and run it.

pub mod app_dirs;
pub mod logging;
pub mod opener;
pub mod options;
pub mod systems;
pub mod ui;

pub use opener::{LaunchError, Launcher, Opener, SystemLauncher};
pub use options::{SearchOptions, WaitStrategy};
pub use systems::search::{EntryKind, Keywords, MatchEntry, ResultSet};
pub use ui::{App, Flow, run};

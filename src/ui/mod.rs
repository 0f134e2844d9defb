//! Interactive terminal UI for `nothree`.
//!
//! [`App`] is the coordinator: it owns the view state, the mailbox and the
//! active scan generation. The [`runtime`] module drives the tick cycle,
//! [`actions`] applies key events, and [`render`] draws the state through
//! ratatui.

mod actions;
pub mod input;
pub mod render;
mod runtime;
mod state;
pub mod theme;

pub use actions::Flow;
pub use input::{InputSource, TerminalInput};
pub use runtime::run;
pub use state::{App, ViewState};
pub use theme::Theme;

//! Background work that runs off the UI thread.

pub mod search;

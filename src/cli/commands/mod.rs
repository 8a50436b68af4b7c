//! Command implementations for quicktask.
//!
//! Each command returns the text to print, so `main` stays a thin dispatcher.

mod minutes;
mod parse;
mod shell;
mod stats;

pub use minutes::minutes;
pub use parse::parse;
pub use shell::completions;
pub use stats::stats;

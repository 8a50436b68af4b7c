//! Statistics over extracted tasks.
//!
//! Provides a summary of a batch of parsed tasks:
//! - Counts per priority and per assignee
//! - Due-date coverage, overdue and due-soon counts
//! - Bar charts for terminal output

mod chart;
mod summary;

pub use chart::render_bar_chart;
pub use summary::TaskSummary;

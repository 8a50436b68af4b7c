//! Core abstractions for quicktask.
//!
//! This module provides date resolution and task list filtering shared by
//! the parsers and the command-line surface.

mod datetime;
pub mod filter;

pub use datetime::{
    at_time_of_day, days_until_weekday, find_clock_time, find_date, remove_span,
    resolve_datetime, ClockMatch, DateDialect, DateMatch,
};
pub use filter::{filter_tasks, sort_tasks, SortKey, SortOrder, TaskFilter};

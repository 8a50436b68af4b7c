//! Output formatting for quicktask.
//!
//! This module provides formatters for displaying parsed tasks in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::QuickTaskError;
use crate::features::nlp::ParsedTask;
use crate::features::stats::TaskSummary;

pub use json::*;
pub use pretty::*;

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `QuickTaskError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[ParsedTask],
    title: &str,
    format: OutputFormat,
) -> Result<String, QuickTaskError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `QuickTaskError::Parse` if JSON serialization fails.
pub fn format_task(task: &ParsedTask, format: OutputFormat) -> Result<String, QuickTaskError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task)),
        OutputFormat::Json => format_task_json(task),
    }
}

/// Format a task summary based on output format
///
/// # Errors
///
/// Returns `QuickTaskError::Parse` if JSON serialization fails.
pub fn format_summary(summary: &TaskSummary, format: OutputFormat) -> Result<String, QuickTaskError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summary)),
        OutputFormat::Json => format_summary_json(summary),
    }
}

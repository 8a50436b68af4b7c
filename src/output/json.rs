//! JSON output formatting for quicktask.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::QuickTaskError;
use crate::features::nlp::ParsedTask;
use crate::features::stats::TaskSummary;

/// JSON object for one task, with `dueDate` as a local ISO timestamp or null.
#[must_use]
pub fn task_value(task: &ParsedTask) -> Value {
    json!({
        "title": task.title,
        "assignee": task.assignee,
        "dueDate": task.due_date_iso(),
        "priority": task.priority,
    })
}

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `QuickTaskError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[ParsedTask], list_name: &str) -> Result<String, QuickTaskError> {
    let items: Vec<Value> = tasks.iter().map(task_value).collect();
    let output = json!({
        "list": list_name,
        "count": tasks.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON
///
/// # Errors
///
/// Returns `QuickTaskError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &ParsedTask) -> Result<String, QuickTaskError> {
    Ok(serde_json::to_string_pretty(&task_value(task))?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `QuickTaskError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, QuickTaskError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a summary as JSON
///
/// # Errors
///
/// Returns `QuickTaskError::Parse` if JSON serialization fails.
pub fn format_summary_json(summary: &TaskSummary) -> Result<String, QuickTaskError> {
    to_json(summary)
}

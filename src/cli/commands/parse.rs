//! Single-sentence parse command.

use chrono::NaiveDateTime;

use crate::cli::args::OutputFormat;
use crate::error::QuickTaskError;
use crate::features::nlp::parse_task_at;
use crate::output::format_task;

/// Execute the parse command on the joined `words`.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse(
    words: &[String],
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, QuickTaskError> {
    let input = words.join(" ");
    let task = parse_task_at(&input, now);
    format_task(&task, format)
}

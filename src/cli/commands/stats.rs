//! Statistics command implementation.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::cli::args::OutputFormat;
use crate::cli::read_input;
use crate::error::QuickTaskError;
use crate::features::nlp::parse_transcript_at;
use crate::features::stats::TaskSummary;
use crate::output::format_summary;

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if the transcript cannot be read or output formatting fails.
pub fn stats(
    file: Option<&Path>,
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, QuickTaskError> {
    let transcript = read_input(file)?;
    let tasks = parse_transcript_at(&transcript, now);
    let summary = TaskSummary::from_tasks(&tasks, now);
    format_summary(&summary, format)
}

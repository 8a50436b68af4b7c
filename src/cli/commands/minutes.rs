//! Meeting transcript command.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::cli::args::{MinutesArgs, OutputFormat};
use crate::cli::read_input;
use crate::config::MinutesConfig;
use crate::core::{filter_tasks, sort_tasks, SortOrder, TaskFilter};
use crate::error::QuickTaskError;
use crate::features::nlp::parse_transcript_at;
use crate::output::format_tasks;

const LIST_TITLE: &str = "Action items";

/// Execute the minutes command.
///
/// Flags win over the `minutes` section of the config file; `--desc`
/// always forces descending order.
///
/// # Errors
///
/// Returns an error if the transcript cannot be read or output formatting fails.
pub fn minutes(
    args: &MinutesArgs,
    defaults: &MinutesConfig,
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, QuickTaskError> {
    let transcript = read_input(args.file.as_deref())?;
    let tasks = parse_transcript_at(&transcript, now);
    let extracted = tasks.len();

    let filter = TaskFilter {
        search: args.search.clone(),
        assignee: args.assignee.clone(),
        priority: args.priority,
    };
    let mut tasks = filter_tasks(tasks, &filter);
    debug!(extracted, kept = tasks.len(), "filtered action items");

    if let Some(key) = args.sort.or(defaults.sort_by) {
        let order = if args.desc {
            SortOrder::Desc
        } else {
            defaults.sort_order
        };
        debug!(?key, ?order, "sorting action items");
        sort_tasks(&mut tasks, key, order);
    }

    format_tasks(&tasks, LIST_TITLE, format)
}

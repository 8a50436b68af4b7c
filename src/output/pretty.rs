use colored::{ColoredString, Colorize};

use crate::features::nlp::{ParsedTask, Priority};
use crate::features::stats::{render_bar_chart, TaskSummary};

const DUE_FORMAT: &str = "%a %b %-d %Y %H:%M";

fn priority_badge(priority: Priority) -> ColoredString {
    let badge = format!("[{priority}]");
    match priority {
        Priority::P1 => badge.red().bold(),
        Priority::P2 => badge.yellow(),
        Priority::P3 => badge.normal(),
        Priority::P4 => badge.dimmed(),
    }
}

/// Format a list of tasks as a pretty table
#[must_use]
pub fn format_tasks_pretty(tasks: &[ParsedTask], title: &str) -> String {
    if tasks.is_empty() {
        return format!("{title} (0 items)\n  No items");
    }

    let mut output = format!("{title} ({} items)\n", tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let mut line = format!("{} {}", priority_badge(task.priority), task.title.bold());

        if task.has_assignee() {
            line.push_str(&format!("  {}", format!("@{}", task.assignee).cyan()));
        }

        if let Some(due) = &task.due_date {
            line.push_str(&format!("  {}", due.format(DUE_FORMAT).to_string().yellow()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single task as pretty output
#[must_use]
pub fn format_task_pretty(task: &ParsedTask) -> String {
    let mut output = format!("{}\n", task.title.bold());

    let assignee = if task.has_assignee() {
        task.assignee.cyan()
    } else {
        "-".dimmed()
    };
    output.push_str(&format!("  {}: {}\n", "Assignee".dimmed(), assignee));

    let due = task.due_date.map_or_else(
        || "-".dimmed(),
        |d| d.format(DUE_FORMAT).to_string().yellow(),
    );
    output.push_str(&format!("  {}: {}\n", "Due".dimmed(), due));

    output.push_str(&format!(
        "  {}: {} ({})\n",
        "Priority".dimmed(),
        priority_badge(task.priority),
        task.priority.label()
    ));

    output
}

/// Format a task summary with bar charts
#[must_use]
pub fn format_summary_pretty(summary: &TaskSummary) -> String {
    let mut output = Vec::new();

    output.push("TASK SUMMARY".bold().to_string());
    output.push("─".repeat(50));
    output.push(format!(
        "  Total: {}  Assigned: {}  Unassigned: {}",
        summary.total.to_string().cyan(),
        (summary.total - summary.unassigned).to_string().green(),
        summary.unassigned
    ));
    output.push(format!(
        "  With due date: {}  Overdue: {}  Due within a week: {}",
        summary.with_due_date,
        if summary.overdue > 0 {
            summary.overdue.to_string().red().to_string()
        } else {
            "0".green().to_string()
        },
        summary.due_soon.to_string().yellow()
    ));
    output.push(String::new());

    output.push("BY PRIORITY".bold().to_string());
    output.push("─".repeat(50));
    output.push(render_bar_chart(&summary.priority_rows(), 10, 30));

    if !summary.by_assignee.is_empty() {
        output.push(String::new());
        output.push("BY ASSIGNEE".bold().to_string());
        output.push("─".repeat(50));
        output.push(render_bar_chart(&summary.assignee_rows(), 10, 30));
    }

    output.join("\n")
}

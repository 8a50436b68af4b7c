//! Summary counts over a list of parsed tasks.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::features::nlp::{ParsedTask, Priority};

/// How many days ahead count as "due soon".
const DUE_SOON_DAYS: i64 = 7;

/// Counts describing a batch of extracted tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    /// Number of tasks.
    pub total: usize,
    /// Tasks per priority level; every level is present.
    pub by_priority: BTreeMap<Priority, usize>,
    /// Tasks per named assignee, sorted by name.
    pub by_assignee: BTreeMap<String, usize>,
    /// Tasks nobody was named for.
    pub unassigned: usize,
    /// Tasks with a due date.
    pub with_due_date: usize,
    /// Tasks whose due date is before the reference moment.
    pub overdue: usize,
    /// Tasks due within the next seven days.
    pub due_soon: usize,
}

impl TaskSummary {
    /// Summarize `tasks` relative to `now`.
    #[must_use]
    pub fn from_tasks(tasks: &[ParsedTask], now: NaiveDateTime) -> Self {
        let horizon = now
            .checked_add_signed(Duration::days(DUE_SOON_DAYS))
            .unwrap_or(NaiveDateTime::MAX);

        let mut by_priority: BTreeMap<Priority, usize> =
            Priority::ALL.iter().map(|p| (*p, 0)).collect();
        let mut by_assignee: BTreeMap<String, usize> = BTreeMap::new();

        for task in tasks {
            *by_priority.entry(task.priority).or_default() += 1;
            if task.has_assignee() {
                *by_assignee.entry(task.assignee.clone()).or_default() += 1;
            }
        }

        let dated = || tasks.iter().filter_map(|t| t.due_date);

        Self {
            total: tasks.len(),
            by_priority,
            by_assignee,
            unassigned: tasks.iter().filter(|t| !t.has_assignee()).count(),
            with_due_date: dated().count(),
            overdue: dated().filter(|due| *due < now).count(),
            due_soon: dated().filter(|due| *due >= now && *due < horizon).count(),
        }
    }

    /// Priority counts as chart rows, most urgent first.
    #[must_use]
    pub fn priority_rows(&self) -> Vec<(String, usize)> {
        self.by_priority
            .iter()
            .map(|(p, n)| (format!("{p} {}", p.label()), *n))
            .collect()
    }

    /// Assignee counts as chart rows, busiest first.
    #[must_use]
    pub fn assignee_rows(&self) -> Vec<(String, usize)> {
        let mut rows: Vec<_> = self
            .by_assignee
            .iter()
            .map(|(name, n)| (name.clone(), *n))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        rows
    }
}

//! Filtering and sorting for lists of parsed tasks.
//!
//! A [`TaskFilter`] keeps tasks that satisfy every condition it sets:
//! - `search` - case-insensitive substring of the title or assignee
//! - `assignee` - case-insensitive exact assignee name
//! - `priority` - exact priority level
//!
//! [`sort_tasks`] orders by due date, priority or assignee. Tasks without a
//! due date sort after dated ones in ascending order; descending order
//! reverses the whole comparison. Sorting is stable, so ties keep transcript
//! order.

use std::cmp::Ordering;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::features::nlp::{ParsedTask, Priority};

/// Conditions a task must meet to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Substring searched in title and assignee.
    pub search: Option<String>,
    /// Assignee name.
    pub assignee: Option<String>,
    /// Priority level.
    pub priority: Option<Priority>,
}

impl TaskFilter {
    /// Check whether the filter sets no conditions at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.search.is_none() && self.assignee.is_none() && self.priority.is_none()
    }

    /// Check whether `task` satisfies every condition.
    #[must_use]
    pub fn matches(&self, task: &ParsedTask) -> bool {
        let search_ok = self.search.as_deref().map_or(true, |needle| {
            let needle = needle.to_lowercase();
            task.title.to_lowercase().contains(&needle)
                || task.assignee.to_lowercase().contains(&needle)
        });

        let assignee_ok = self
            .assignee
            .as_deref()
            .map_or(true, |name| task.assignee.eq_ignore_ascii_case(name.trim()));

        let priority_ok = self.priority.map_or(true, |p| task.priority == p);

        search_ok && assignee_ok && priority_ok
    }
}

/// Field to sort tasks by.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Earliest due date first; undated tasks last.
    Due,
    /// Most urgent first.
    Priority,
    /// Alphabetical by assignee.
    Assignee,
}

/// Sort direction.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// Keep only the tasks matching `filter`, preserving order.
#[must_use]
pub fn filter_tasks(tasks: Vec<ParsedTask>, filter: &TaskFilter) -> Vec<ParsedTask> {
    if filter.is_empty() {
        return tasks;
    }
    tasks.into_iter().filter(|t| filter.matches(t)).collect()
}

/// Stable sort of `tasks` by `key` in `order`.
pub fn sort_tasks(tasks: &mut [ParsedTask], key: SortKey, order: SortOrder) {
    tasks.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &ParsedTask, b: &ParsedTask, key: SortKey) -> Ordering {
    match key {
        SortKey::Due => match (a.due_date, b.due_date) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Priority => a.priority.cmp(&b.priority),
        SortKey::Assignee => a.assignee.to_lowercase().cmp(&b.assignee.to_lowercase()),
    }
}

//! Task records produced by the parsers.

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Priority levels for tasks, most urgent first.
///
/// The derived ordering sorts `P1` before `P4`, so an ascending sort lists
/// the most urgent work first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Priority {
    /// Urgent.
    P1,
    /// High.
    P2,
    /// Normal; used when no cue is present.
    #[default]
    P3,
    /// Low.
    P4,
}

impl Priority {
    /// All levels in urgency order.
    pub const ALL: [Self; 4] = [Self::P1, Self::P2, Self::P3, Self::P4];

    /// Short code (`"P1"`..`"P4"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::P4 => "P4",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::P1 => "urgent",
            Self::P2 => "high",
            Self::P3 => "normal",
            Self::P4 => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "p1" | "1" | "urgent" => Ok(Self::P1),
            "p2" | "2" | "high" => Ok(Self::P2),
            "p3" | "3" | "normal" => Ok(Self::P3),
            "p4" | "4" | "low" => Ok(Self::P4),
            other => Err(format!("unknown priority '{other}' (expected P1, P2, P3 or P4)")),
        }
    }
}

/// Result of parsing a sentence or one assignment in a transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTask {
    /// The task title after cue phrases were stripped.
    pub title: String,
    /// Who the task is for; empty when nobody was named.
    pub assignee: String,
    /// Resolved local due date-time, midnight when no clock time was given.
    pub due_date: Option<NaiveDateTime>,
    /// Task priority, `P3` unless a cue was found.
    pub priority: Priority,
}

impl ParsedTask {
    /// Check whether somebody was named.
    #[must_use]
    pub fn has_assignee(&self) -> bool {
        !self.assignee.is_empty()
    }

    /// Due date-time as an ISO 8601 local timestamp.
    #[must_use]
    pub fn due_date_iso(&self) -> Option<String> {
        self.due_date
            .map(|due| due.format("%Y-%m-%dT%H:%M:%S").to_string())
    }
}

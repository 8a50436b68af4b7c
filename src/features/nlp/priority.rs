//! Priority cue detection.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::Priority;

static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // P1..P4, "priority 1".."priority 4", urgent, critical, "high priority"
    Regex::new(r"(?i)\b(?:p[1-4]|priority\s+[1-4]|urgent|critical|high\s+priority)\b")
        .unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

/// A priority cue found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityMatch {
    /// The level the cue maps to.
    pub priority: Priority,
    /// Byte range of the cue.
    pub span: Range<usize>,
}

/// Find the leftmost priority cue in `text`.
#[must_use]
pub fn find_priority(text: &str) -> Option<PriorityMatch> {
    let m = PRIORITY_PATTERN.find(text)?;
    let priority = priority_for_token(m.as_str())?;
    Some(PriorityMatch {
        priority,
        span: m.range(),
    })
}

/// Read the priority cued in `text`, `P3` when there is none.
///
/// # Examples
///
/// ```
/// use quicktask::features::nlp::{extract_priority, Priority};
///
/// assert_eq!(extract_priority("P1 review doc"), Priority::P1);
/// assert_eq!(extract_priority("this is high priority"), Priority::P2);
/// assert_eq!(extract_priority("water the plants"), Priority::P3);
/// ```
#[must_use]
pub fn extract_priority(text: &str) -> Priority {
    find_priority(text).map_or_else(Priority::default, |m| m.priority)
}

fn priority_for_token(token: &str) -> Option<Priority> {
    let normalized = token
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    match normalized.as_str() {
        "p1" | "priority 1" | "urgent" | "critical" => Some(Priority::P1),
        "p2" | "priority 2" | "high priority" => Some(Priority::P2),
        "p3" | "priority 3" => Some(Priority::P3),
        "p4" | "priority 4" => Some(Priority::P4),
        _ => None,
    }
}

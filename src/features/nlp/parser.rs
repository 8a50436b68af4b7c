//! Single-sentence task parser.
//!
//! Parses strings like "Finish landing page Aman by 11pm 20th june P1"
//! into structured task data.

use std::ops::Range;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use super::assignee::find_assignee;
use super::priority::find_priority;
use super::types::{ParsedTask, Priority};
use crate::core::{at_time_of_day, find_clock_time, find_date, remove_span, DateDialect};

static TRAILING_CONNECTOR: Lazy<Regex> = Lazy::new(|| {
    // A dangling preposition or conjunction left after stripping
    Regex::new(r"(?i)\b(?:by|before|on|at|for|with|to|and|or)\s*$")
        .unwrap_or_else(|e| panic!("Invalid trailing connector regex: {e}"))
});

/// Values collected while folding over the extraction steps.
#[derive(Debug, Default)]
struct Extracted {
    priority: Priority,
    assignee: String,
    time: Option<NaiveTime>,
    date: Option<NaiveDate>,
}

/// One extraction step: record what it found in `Extracted` and return the
/// span of `text` to strip from the title.
type Step = fn(&mut Extracted, &str, NaiveDateTime) -> Option<Range<usize>>;

// Each step sees the text left over by the previous ones.
const STEPS: [(&str, Step); 4] = [
    ("priority", take_priority),
    ("assignee", take_assignee),
    ("clock", take_clock),
    ("date", take_date),
];

/// Parse a single natural language task sentence, relative to the current
/// local time.
///
/// See [`parse_task_at`].
#[must_use]
pub fn parse_task(input: &str) -> ParsedTask {
    parse_task_at(input, Local::now().naive_local())
}

/// Parse a single natural language task sentence relative to `now`.
///
/// Priority, assignee, clock time and date are extracted in that order, each
/// removing its phrase from the title. If nothing is left of the title the
/// original input is used.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quicktask::features::nlp::{parse_task_at, Priority};
///
/// let now = NaiveDate::from_ymd_opt(2025, 1, 15)
///     .and_then(|d| d.and_hms_opt(9, 0, 0))
///     .unwrap();
///
/// let task = parse_task_at("Finish landing page Aman by 11pm 20th june", now);
/// assert_eq!(task.title, "Finish landing page");
/// assert_eq!(task.assignee, "Aman");
/// assert_eq!(task.due_date_iso().as_deref(), Some("2025-06-20T23:00:00"));
/// assert_eq!(task.priority, Priority::P3);
/// ```
#[must_use]
pub fn parse_task_at(input: &str, now: NaiveDateTime) -> ParsedTask {
    let (extracted, remaining) = STEPS.iter().fold(
        (Extracted::default(), input.to_string()),
        |(mut extracted, text), (name, step)| match step(&mut extracted, &text, now) {
            Some(span) => {
                trace!(step = name, stripped = &text[span.clone()], "stripped from title");
                let rest = remove_span(&text, &span);
                (extracted, rest)
            },
            None => (extracted, text),
        },
    );

    let title = clean_title(&remaining);
    let title = if title.is_empty() {
        input.to_string()
    } else {
        title
    };

    let due_date = extracted
        .date
        .map(|date| at_time_of_day(date, extracted.time));

    debug!(
        %title,
        assignee = %extracted.assignee,
        due = ?due_date,
        priority = %extracted.priority,
        "parsed task"
    );

    ParsedTask {
        title,
        assignee: extracted.assignee,
        due_date,
        priority: extracted.priority,
    }
}

fn take_priority(out: &mut Extracted, text: &str, _now: NaiveDateTime) -> Option<Range<usize>> {
    let found = find_priority(text)?;
    out.priority = found.priority;
    Some(found.span)
}

fn take_assignee(out: &mut Extracted, text: &str, _now: NaiveDateTime) -> Option<Range<usize>> {
    let found = find_assignee(text)?;
    out.assignee = found.name;
    Some(found.span)
}

fn take_clock(out: &mut Extracted, text: &str, _now: NaiveDateTime) -> Option<Range<usize>> {
    let found = find_clock_time(text)?;
    out.time = Some(found.time);
    Some(found.span)
}

fn take_date(out: &mut Extracted, text: &str, now: NaiveDateTime) -> Option<Range<usize>> {
    let found = find_date(text, now, DateDialect::Sentence)?;
    out.date = Some(found.date);
    Some(found.span)
}

/// Collapse whitespace and drop one dangling connector word at the end.
fn clean_title(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    TRAILING_CONNECTOR
        .replace(&collapsed, "")
        .trim()
        .to_string()
}

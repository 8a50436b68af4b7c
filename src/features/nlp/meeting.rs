//! Meeting transcript parser.
//!
//! Splits a transcript into sentences and turns each assignment sentence
//! ("Aman you take the landing page by 10pm tomorrow") into a task.

use chrono::{Local, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, trace};

use super::priority::extract_priority;
use super::types::ParsedTask;
use crate::core::{resolve_datetime, DateDialect};

static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+").unwrap_or_else(|e| panic!("Invalid sentence regex: {e}"))
});

static ACTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "Name [you] [please] <verb> <task> [by <time>]"
    Regex::new(concat!(
        r"(?i)\b(\w+)\s+(?:you\s+)?(?:please\s+)?",
        r"(?:take\s+(?:care\s+of\s+)?|do\s+|handle\s+|work\s+on\s+|complete\s+|finish\s+",
        r"|review\s+|prepare\s+|create\s+|update\s+|fix\s+)",
        r"([^,]+?)(?:\s+by\s+(.+?))?$",
    ))
    .unwrap_or_else(|e| panic!("Invalid action regex: {e}"))
});

static OBLIGATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "Name needs to|should|must|will <task> [by <time>]"
    Regex::new(r"(?i)\b(\w+)\s+(?:needs\s+to|should|must|will)\s+([^,]+?)(?:\s+by\s+(.+?))?$")
        .unwrap_or_else(|e| panic!("Invalid obligation regex: {e}"))
});

static DELEGATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "assign|give <task> to Name [by <time>]"
    Regex::new(r"(?i)\b(?:assign|give)\s+([^,]+?)\s+to\s+(\w+)(?:\s+by\s+(.+?))?$")
        .unwrap_or_else(|e| panic!("Invalid delegation regex: {e}"))
});

static LEADING_ARTICLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:the|a|an)\s+").unwrap_or_else(|e| panic!("Invalid article regex: {e}"))
});

/// Words the unanchored name slot can catch that are never names, as in
/// "Aman will handle ..." where "will" sits right before an action verb.
const NOT_NAMES: &[&str] = &[
    "i", "we", "you", "they", "he", "she", "someone", "please", "will", "should", "must",
    "needs", "to",
];

/// Task phrases too vague to become a task.
const FILLER_PHRASES: &[&str] = &["it", "this", "that", "you", "me", "us"];

const MIN_TITLE_CHARS: usize = 3;

/// Capture group holding the name and the task phrase for a rule.
struct AssignmentRule {
    name: &'static str,
    pattern: &'static Lazy<Regex>,
    assignee_group: usize,
    task_group: usize,
}

static ASSIGNMENT_RULES: [AssignmentRule; 3] = [
    AssignmentRule {
        name: "action",
        pattern: &ACTION_PATTERN,
        assignee_group: 1,
        task_group: 2,
    },
    AssignmentRule {
        name: "obligation",
        pattern: &OBLIGATION_PATTERN,
        assignee_group: 1,
        task_group: 2,
    },
    AssignmentRule {
        name: "delegation",
        pattern: &DELEGATION_PATTERN,
        assignee_group: 2,
        task_group: 1,
    },
];

const TIME_GROUP: usize = 3;

/// Parse a meeting transcript relative to the current local time.
///
/// See [`parse_transcript_at`].
#[must_use]
pub fn parse_transcript(transcript: &str) -> Vec<ParsedTask> {
    parse_transcript_at(transcript, Local::now().naive_local())
}

/// Extract one task per assignment sentence, in transcript order.
///
/// Sentences end at `.`, `!` or `?`. Each sentence is matched against the
/// assignment rules in order and yields at most one task; sentences that
/// match nothing, or whose task phrase is too vague, yield nothing.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quicktask::features::nlp::parse_transcript_at;
///
/// let now = NaiveDate::from_ymd_opt(2025, 1, 15)
///     .and_then(|d| d.and_hms_opt(9, 0, 0))
///     .unwrap();
///
/// let tasks = parse_transcript_at(
///     "Aman you take the landing page by 10pm tomorrow. \
///      Rajeev you take care of client follow-up by Wednesday.",
///     now,
/// );
///
/// assert_eq!(tasks.len(), 2);
/// assert_eq!(tasks[0].assignee, "Aman");
/// assert_eq!(tasks[0].title, "landing page");
/// assert_eq!(tasks[1].assignee, "Rajeev");
/// assert_eq!(tasks[1].title, "client follow-up");
/// ```
#[must_use]
pub fn parse_transcript_at(transcript: &str, now: NaiveDateTime) -> Vec<ParsedTask> {
    let tasks: Vec<ParsedTask> = split_sentences(transcript)
        .filter_map(|sentence| parse_sentence(sentence, now))
        .collect();

    debug!(count = tasks.len(), "extracted tasks from transcript");
    tasks
}

/// Split on runs of sentence punctuation, dropping blank pieces.
pub fn split_sentences(transcript: &str) -> impl Iterator<Item = &str> {
    SENTENCE_BREAK
        .split(transcript)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_sentence(sentence: &str, now: NaiveDateTime) -> Option<ParsedTask> {
    let (rule, caps) = ASSIGNMENT_RULES.iter().find_map(|rule| {
        let caps = rule.pattern.captures(sentence)?;
        let name = caps.get(rule.assignee_group)?.as_str();
        if NOT_NAMES.iter().any(|w| w.eq_ignore_ascii_case(name)) {
            trace!(rule = rule.name, %name, "not a name, trying next rule");
            return None;
        }
        Some((rule, caps))
    })?;

    let assignee = caps.get(rule.assignee_group)?.as_str();
    let title = clean_task_phrase(caps.get(rule.task_group)?.as_str());

    if is_vague(&title) {
        trace!(rule = rule.name, %sentence, %title, "sentence rejected");
        return None;
    }

    let due_date = time_phrase(&caps)
        .and_then(|phrase| resolve_datetime(phrase, now, DateDialect::Transcript));

    trace!(rule = rule.name, %sentence, "assignment matched");

    Some(ParsedTask {
        title,
        assignee: assignee.to_string(),
        due_date,
        priority: extract_priority(sentence),
    })
}

fn time_phrase<'t>(caps: &Captures<'t>) -> Option<&'t str> {
    caps.get(TIME_GROUP).map(|m| m.as_str().trim())
}

/// Drop one leading article and normalize whitespace.
fn clean_task_phrase(phrase: &str) -> String {
    LEADING_ARTICLE
        .replace(phrase.trim_start(), "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_vague(title: &str) -> bool {
    title.chars().count() < MIN_TITLE_CHARS
        || FILLER_PHRASES.iter().any(|f| f.eq_ignore_ascii_case(title))
}

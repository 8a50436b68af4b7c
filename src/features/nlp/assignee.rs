//! Assignee detection for single-sentence input.
//!
//! Names are Title-Case words found next to a trigger: `for Priya`,
//! `Priya should ...`, `Priya by friday`. Trigger words are matched in any
//! case, names only when capitalized.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static TRIGGER_BEFORE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "assigned to Priya Shah", "for Aman", "with Sarah Jones"
    Regex::new(r"\b(?i:assign(?:ed)?\s+to|for|with|by|to)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\b")
        .unwrap_or_else(|e| panic!("Invalid assignee trigger regex: {e}"))
});

static OBLIGATION_AFTER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "Priya should", "Sarah Jones needs to"
    Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+(?i:should|needs\s+to|must|will)\b")
        .unwrap_or_else(|e| panic!("Invalid assignee obligation regex: {e}"))
});

static TEMPORAL_AFTER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "Aman by", "Priya before"
    Regex::new(r"\b([A-Z][a-z]+)\s+(?i:by|before|on|at)\b")
        .unwrap_or_else(|e| panic!("Invalid assignee temporal regex: {e}"))
});

static NAME_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]+").unwrap_or_else(|e| panic!("Invalid name regex: {e}")));

/// Words that look like names when capitalized but never are.
const NOT_NAMES: &[&str] = &[
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "today",
    "tomorrow",
    "morning",
    "afternoon",
    "evening",
    "night",
    "am",
    "pm",
];

/// Which end of the candidate touches the trigger phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Trigger comes first ("for Priya").
    Leading,
    /// Trigger follows the name ("Priya should").
    Trailing,
}

struct AssigneeRule {
    name: &'static str,
    pattern: &'static Lazy<Regex>,
    anchor: Anchor,
    strip_trigger: bool,
}

static ASSIGNEE_RULES: [AssigneeRule; 3] = [
    AssigneeRule {
        name: "trigger-before",
        pattern: &TRIGGER_BEFORE_PATTERN,
        anchor: Anchor::Leading,
        strip_trigger: true,
    },
    AssigneeRule {
        name: "obligation-after",
        pattern: &OBLIGATION_AFTER_PATTERN,
        anchor: Anchor::Trailing,
        strip_trigger: true,
    },
    AssigneeRule {
        name: "temporal-after",
        pattern: &TEMPORAL_AFTER_PATTERN,
        anchor: Anchor::Trailing,
        strip_trigger: false,
    },
];

/// A name found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssigneeMatch {
    /// The name, words separated by single spaces.
    pub name: String,
    /// Byte range to remove from the title.
    pub span: Range<usize>,
}

/// Find the assignee named in `text`.
///
/// Rules are tried in order. A candidate made only of day or time words is
/// rejected and the next rule is tried; a longer candidate is cut at the
/// first such word counted from the trigger side.
#[must_use]
pub fn find_assignee(text: &str) -> Option<AssigneeMatch> {
    ASSIGNEE_RULES.iter().find_map(|rule| {
        let caps = rule.pattern.captures(text)?;
        let whole = caps.get(0)?;
        let candidate = caps.get(1)?;

        let Some(name_span) = accepted_name(text, candidate.range(), rule.anchor) else {
            trace!(rule = rule.name, candidate = candidate.as_str(), "assignee rejected");
            return None;
        };

        let span = match (rule.strip_trigger, rule.anchor) {
            (false, _) => name_span.clone(),
            (true, Anchor::Leading) => whole.start()..name_span.end,
            (true, Anchor::Trailing) => name_span.start..whole.end(),
        };

        let name = text[name_span].split_whitespace().collect::<Vec<_>>().join(" ");
        trace!(rule = rule.name, %name, "assignee matched");
        Some(AssigneeMatch { name, span })
    })
}

/// Read the assignee named in `text`; empty when nobody is named.
///
/// # Examples
///
/// ```
/// use quicktask::features::nlp::extract_assignee;
///
/// assert_eq!(extract_assignee("Send the deck to Priya"), "Priya");
/// assert_eq!(extract_assignee("Rajeev should call the vendor"), "Rajeev");
/// assert_eq!(extract_assignee("Plan offsite for Monday"), "");
/// ```
#[must_use]
pub fn extract_assignee(text: &str) -> String {
    find_assignee(text).map(|m| m.name).unwrap_or_default()
}

/// The longest run of name words adjacent to the anchor.
fn accepted_name(text: &str, candidate: Range<usize>, anchor: Anchor) -> Option<Range<usize>> {
    let offset = candidate.start;
    let words: Vec<Range<usize>> = NAME_WORD
        .find_iter(&text[candidate])
        .map(|w| offset + w.start()..offset + w.end())
        .collect();

    let is_name = |w: &&Range<usize>| !is_reserved_word(&text[(*w).clone()]);

    let (first, last) = match anchor {
        Anchor::Leading => {
            let kept: Vec<_> = words.iter().take_while(is_name).collect();
            (kept.first().copied()?.clone(), kept.last().copied()?.clone())
        },
        Anchor::Trailing => {
            let kept: Vec<_> = words.iter().rev().take_while(is_name).collect();
            (kept.last().copied()?.clone(), kept.first().copied()?.clone())
        },
    };

    Some(first.start..last.end)
}

fn is_reserved_word(word: &str) -> bool {
    NOT_NAMES.iter().any(|w| w.eq_ignore_ascii_case(word))
}

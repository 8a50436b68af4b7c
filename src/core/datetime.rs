//! Date and time resolution for natural language fragments.
//!
//! Everything here works on local wall-clock values (`NaiveDateTime`) and
//! takes the reference moment as a parameter, so results are reproducible.
//! Only English weekday and month names are understood.

use std::ops::Range;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, trace};

/// Which optional date forms a caller recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateDialect {
    /// Single-sentence entry: `next <weekday>` and numeric `M/D[/Y]` forms,
    /// no `tonight`.
    #[default]
    Sentence,
    /// Meeting transcripts: `tonight` is a synonym for `today`, no
    /// `next <weekday>`, no numeric dates.
    Transcript,
}

/// A clock time found in text, with the byte span it occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockMatch {
    /// The 24-hour time, seconds zeroed.
    pub time: NaiveTime,
    /// Byte range of the matched clock expression.
    pub span: Range<usize>,
}

/// A date expression found in text, with the byte span it occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// The resolved calendar date.
    pub date: NaiveDate,
    /// Byte range of the matched date expression.
    pub span: Range<usize>,
    /// Name of the rule that matched.
    pub rule: &'static str,
}

const WEEKDAYS: &str = "sunday|monday|tuesday|wednesday|thursday|friday|saturday";
const MONTHS: &str =
    "january|february|march|april|may|june|july|august|september|october|november|december";

static CLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // 3pm, 3 pm, 11:30am
    Regex::new(r"(?i)\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)\b")
        .unwrap_or_else(|e| panic!("Invalid clock regex: {e}"))
});

static CONNECTOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:by|before|on|at|this|next|the)\b")
        .unwrap_or_else(|e| panic!("Invalid connector regex: {e}"))
});

static TOMORROW_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btomorrow\b").unwrap_or_else(|e| panic!("Invalid tomorrow regex: {e}"))
});

static TODAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btoday\b").unwrap_or_else(|e| panic!("Invalid today regex: {e}"))
});

static TONIGHT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btonight\b").unwrap_or_else(|e| panic!("Invalid tonight regex: {e}"))
});

static NEXT_WEEKDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\bnext\s+({WEEKDAYS})\b"))
        .unwrap_or_else(|e| panic!("Invalid next-weekday regex: {e}"))
});

static WEEKDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b({WEEKDAYS})\b"))
        .unwrap_or_else(|e| panic!("Invalid weekday regex: {e}"))
});

static DAY_MONTH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // 20th june, 1 may, 3rdmarch, 20 th june
    Regex::new(&format!(r"(?i)\b(\d{{1,2}})\s*(?:st|nd|rd|th)?\s*({MONTHS})\b"))
        .unwrap_or_else(|e| panic!("Invalid day-month regex: {e}"))
});

static NUMERIC_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // M/D, M/D/YY, M/D/YYYY
    Regex::new(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?\b")
        .unwrap_or_else(|e| panic!("Invalid numeric date regex: {e}"))
});

type Resolver = fn(&Captures<'_>, NaiveDateTime) -> Option<NaiveDate>;

/// One entry of the ordered date rule table.
struct DateRule {
    name: &'static str,
    pattern: &'static Lazy<Regex>,
    sentence: bool,
    transcript: bool,
    resolve: Resolver,
}

impl DateRule {
    const fn enabled_for(&self, dialect: DateDialect) -> bool {
        match dialect {
            DateDialect::Sentence => self.sentence,
            DateDialect::Transcript => self.transcript,
        }
    }
}

// Order is precedence: the first rule that yields a real date wins.
static DATE_RULES: [DateRule; 7] = [
    DateRule {
        name: "tomorrow",
        pattern: &TOMORROW_PATTERN,
        sentence: true,
        transcript: true,
        resolve: resolve_tomorrow,
    },
    DateRule {
        name: "today",
        pattern: &TODAY_PATTERN,
        sentence: true,
        transcript: true,
        resolve: resolve_today,
    },
    DateRule {
        name: "tonight",
        pattern: &TONIGHT_PATTERN,
        sentence: false,
        transcript: true,
        resolve: resolve_today,
    },
    DateRule {
        name: "next-weekday",
        pattern: &NEXT_WEEKDAY_PATTERN,
        sentence: true,
        transcript: false,
        resolve: resolve_weekday,
    },
    DateRule {
        name: "weekday",
        pattern: &WEEKDAY_PATTERN,
        sentence: true,
        transcript: true,
        resolve: resolve_weekday,
    },
    DateRule {
        name: "day-month",
        pattern: &DAY_MONTH_PATTERN,
        sentence: true,
        transcript: true,
        resolve: resolve_day_month,
    },
    DateRule {
        name: "numeric",
        pattern: &NUMERIC_DATE_PATTERN,
        sentence: true,
        transcript: false,
        resolve: resolve_numeric,
    },
];

/// Resolve a free-form fragment like `"10pm tomorrow"` or `"by 20th june"`
/// into a local date-time.
///
/// Connector words (`by`, `before`, `on`, `at`, `this`, `next`, `the`) are
/// dropped first, then a clock time is pulled out, then the date rules are
/// tried in order. Without a date expression the result is `None`, even when
/// a clock time was present.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quicktask::core::{resolve_datetime, DateDialect};
///
/// // A Wednesday morning.
/// let now = NaiveDate::from_ymd_opt(2025, 1, 15)
///     .and_then(|d| d.and_hms_opt(9, 0, 0))
///     .unwrap();
///
/// let due = resolve_datetime("by 10pm tomorrow", now, DateDialect::Transcript).unwrap();
/// assert_eq!(due.to_string(), "2025-01-16 22:00:00");
///
/// assert!(resolve_datetime("5pm", now, DateDialect::Transcript).is_none());
/// ```
#[must_use]
pub fn resolve_datetime(
    fragment: &str,
    now: NaiveDateTime,
    dialect: DateDialect,
) -> Option<NaiveDateTime> {
    let lowered = fragment.to_lowercase();
    let normalized = CONNECTOR_PATTERN.replace_all(&lowered, "");

    let (time, remaining) = match find_clock_time(&normalized) {
        Some(clock) => (Some(clock.time), remove_span(&normalized, &clock.span)),
        None => (None, normalized.into_owned()),
    };

    let found = find_date(&remaining, now, dialect)?;
    Some(at_time_of_day(found.date, time))
}

/// Find the first valid clock expression (`3pm`, `11:30 am`) in `text`.
///
/// Hours above 12 or minutes above 59 are not clock times and are skipped.
#[must_use]
pub fn find_clock_time(text: &str) -> Option<ClockMatch> {
    CLOCK_PATTERN.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
        let minute: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        let is_pm = caps.get(3)?.as_str().eq_ignore_ascii_case("pm");

        let time = to_24_hour(hour, minute, is_pm)?;
        trace!(matched = whole.as_str(), %time, "clock time matched");
        Some(ClockMatch {
            time,
            span: whole.range(),
        })
    })
}

/// Find the first date expression in `text`, honoring rule precedence.
///
/// A rule whose captures do not form a real calendar date (`31st june`,
/// `13/40`) counts as unmatched and the next rule is tried.
#[must_use]
pub fn find_date(text: &str, now: NaiveDateTime, dialect: DateDialect) -> Option<DateMatch> {
    DATE_RULES
        .iter()
        .filter(|rule| rule.enabled_for(dialect))
        .find_map(|rule| {
            let caps = rule.pattern.captures(text)?;
            let whole = caps.get(0)?;
            let date = (rule.resolve)(&caps, now)?;
            debug!(rule = rule.name, matched = whole.as_str(), %date, "date expression matched");
            Some(DateMatch {
                date,
                span: whole.range(),
                rule: rule.name,
            })
        })
}

/// Combine a date with an optional time of day; midnight when absent.
#[must_use]
pub fn at_time_of_day(date: NaiveDate, time: Option<NaiveTime>) -> NaiveDateTime {
    date.and_time(time.unwrap_or_default())
}

/// Days from `current` until the next `target`, always in `1..=7`.
///
/// Naming today's weekday means the same weekday next week.
#[must_use]
pub fn days_until_weekday(current: Weekday, target: Weekday) -> i64 {
    let current = i64::from(current.num_days_from_sunday());
    let target = i64::from(target.num_days_from_sunday());

    if target <= current {
        7 - current + target
    } else {
        target - current
    }
}

/// Remove a byte range from `text`.
#[must_use]
pub fn remove_span(text: &str, span: &Range<usize>) -> String {
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..span.start]);
    out.push_str(&text[span.end..]);
    out
}

fn to_24_hour(hour: u32, minute: u32, is_pm: bool) -> Option<NaiveTime> {
    if hour > 12 {
        return None;
    }

    let hour = match (is_pm, hour) {
        (true, h) if h != 12 => h + 12,
        (false, 12) => 0,
        (_, h) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn resolve_tomorrow(_caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDate> {
    now.date().checked_add_signed(Duration::days(1))
}

fn resolve_today(_caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDate> {
    Some(now.date())
}

fn resolve_weekday(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDate> {
    let target = weekday_from_name(&caps.get(1)?.as_str().to_lowercase())?;
    let today = now.date();
    today.checked_add_signed(Duration::days(days_until_weekday(today.weekday(), target)))
}

fn resolve_day_month(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDate> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month = month_from_name(&caps.get(2)?.as_str().to_lowercase())?;

    // Leap days can be up to eight years apart.
    (now.year()..=now.year() + 8)
        .filter_map(|year| NaiveDate::from_ymd_opt(year, month, day))
        .find(|date| at_time_of_day(*date, None) >= now)
}

fn resolve_numeric(caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDate> {
    let month: u32 = caps.get(1)?.as_str().parse().ok()?;
    let day: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year: i32 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => now.year(),
    };
    let year = if year < 100 { 2000 + year } else { year };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "sunday" => Some(Weekday::Sun),
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        _ => None,
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    match name {
        "january" => Some(1),
        "february" => Some(2),
        "march" => Some(3),
        "april" => Some(4),
        "may" => Some(5),
        "june" => Some(6),
        "july" => Some(7),
        "august" => Some(8),
        "september" => Some(9),
        "october" => Some(10),
        "november" => Some(11),
        "december" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wednesday, 15 January 2025, 09:30.
    fn wednesday() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn resolve(fragment: &str) -> Option<NaiveDateTime> {
        resolve_datetime(fragment, wednesday(), DateDialect::Transcript)
    }

    // ==============
    // Relative Dates
    // ==============

    #[test]
    fn test_tomorrow_is_next_day_at_midnight() {
        assert_eq!(resolve("tomorrow"), Some(at(2025, 1, 16, 0, 0)));
    }

    #[test]
    fn test_today_and_tonight() {
        assert_eq!(resolve("today"), Some(at(2025, 1, 15, 0, 0)));
        assert_eq!(resolve("tonight"), Some(at(2025, 1, 15, 0, 0)));
    }

    #[test]
    fn test_tonight_only_in_transcript_dialect() {
        assert!(resolve_datetime("tonight", wednesday(), DateDialect::Sentence).is_none());
    }

    #[test]
    fn test_weekday_later_this_week() {
        assert_eq!(resolve("friday"), Some(at(2025, 1, 17, 0, 0)));
    }

    #[test]
    fn test_weekday_already_passed_goes_to_next_week() {
        assert_eq!(resolve("monday"), Some(at(2025, 1, 20, 0, 0)));
    }

    #[test]
    fn test_same_weekday_is_a_full_week_ahead() {
        assert_eq!(resolve("wednesday"), Some(at(2025, 1, 22, 0, 0)));
    }

    #[test]
    fn test_next_weekday_uses_same_formula() {
        let found = find_date("meet next friday", wednesday(), DateDialect::Sentence).unwrap();
        assert_eq!(found.date, NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
        assert_eq!(found.rule, "next-weekday");
        assert_eq!(&"meet next friday"[found.span], "next friday");
    }

    #[test]
    fn test_days_until_weekday() {
        assert_eq!(days_until_weekday(Weekday::Wed, Weekday::Thu), 1);
        assert_eq!(days_until_weekday(Weekday::Wed, Weekday::Mon), 5);
        assert_eq!(days_until_weekday(Weekday::Wed, Weekday::Wed), 7);
        assert_eq!(days_until_weekday(Weekday::Sat, Weekday::Sun), 1);
        assert_eq!(days_until_weekday(Weekday::Sun, Weekday::Sat), 6);
    }

    // ===========
    // Month Names
    // ===========

    #[test]
    fn test_day_month_later_this_year() {
        assert_eq!(resolve("20th june"), Some(at(2025, 6, 20, 0, 0)));
        assert_eq!(resolve("1 march"), Some(at(2025, 3, 1, 0, 0)));
    }

    #[test]
    fn test_day_month_in_the_past_rolls_to_next_year() {
        assert_eq!(resolve("10th january"), Some(at(2026, 1, 10, 0, 0)));
    }

    #[test]
    fn test_day_month_earlier_today_rolls_to_next_year() {
        // Midnight of the 15th is already behind 09:30 on the 15th.
        assert_eq!(resolve("15th january"), Some(at(2026, 1, 15, 0, 0)));
    }

    #[test]
    fn test_leap_day_moves_to_next_leap_year() {
        let after_leap_day = at(2024, 3, 1, 9, 0);
        assert_eq!(
            resolve_datetime("29th february", after_leap_day, DateDialect::Transcript),
            Some(at(2028, 2, 29, 0, 0))
        );
        assert_eq!(resolve("29 february"), Some(at(2028, 2, 29, 0, 0)));
        assert_eq!(
            resolve_datetime("29th february", at(2024, 2, 1, 9, 0), DateDialect::Sentence),
            Some(at(2024, 2, 29, 0, 0))
        );
    }

    #[test]
    fn test_ordinal_suffix_may_be_spaced() {
        assert_eq!(resolve("by 20 th june"), Some(at(2025, 6, 20, 0, 0)));
        assert_eq!(
            resolve_datetime("20 th june", wednesday(), DateDialect::Sentence),
            Some(at(2025, 6, 20, 0, 0))
        );
    }

    #[test]
    fn test_impossible_day_month_is_unmatched() {
        assert!(resolve("31st june").is_none());
        assert!(resolve("30 february").is_none());
    }

    // =============
    // Numeric Dates
    // =============

    #[test]
    fn test_numeric_dates_in_sentence_dialect() {
        let resolve = |s| resolve_datetime(s, wednesday(), DateDialect::Sentence);
        assert_eq!(resolve("3/4"), Some(at(2025, 3, 4, 0, 0)));
        assert_eq!(resolve("12/25/26"), Some(at(2026, 12, 25, 0, 0)));
        assert_eq!(resolve("1/2/2027"), Some(at(2027, 1, 2, 0, 0)));
        assert!(resolve("13/40").is_none());
    }

    #[test]
    fn test_numeric_dates_ignored_in_transcript_dialect() {
        assert!(resolve("3/4").is_none());
    }

    // ===========
    // Clock Times
    // ===========

    #[test]
    fn test_clock_time_is_applied_to_date() {
        assert_eq!(resolve("tomorrow 5pm"), Some(at(2025, 1, 16, 17, 0)));
        assert_eq!(resolve("by 10pm tomorrow"), Some(at(2025, 1, 16, 22, 0)));
        assert_eq!(resolve("friday at 9:45 am"), Some(at(2025, 1, 17, 9, 45)));
    }

    #[test]
    fn test_noon_and_midnight_conversion() {
        assert_eq!(resolve("12pm today"), Some(at(2025, 1, 15, 12, 0)));
        assert_eq!(resolve("12am today"), Some(at(2025, 1, 15, 0, 0)));
    }

    #[test]
    fn test_clock_time_without_date_is_absent() {
        assert!(resolve("5pm").is_none());
        assert!(resolve("at 11:30am").is_none());
    }

    #[test]
    fn test_find_clock_time_span() {
        let clock = find_clock_time("call Bob 3:15 PM sharp").unwrap();
        assert_eq!(clock.time, NaiveTime::from_hms_opt(15, 15, 0).unwrap());
        assert_eq!(&"call Bob 3:15 PM sharp"[clock.span], "3:15 PM");
    }

    #[test]
    fn test_out_of_range_clock_is_not_a_time() {
        assert!(find_clock_time("13pm").is_none());
        assert!(find_clock_time("5:75pm").is_none());
        let clock = find_clock_time("13pm or 4pm").unwrap();
        assert_eq!(clock.time, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    }

    // =========
    // Precedence
    // =========

    #[test]
    fn test_tomorrow_beats_weekday() {
        assert_eq!(resolve("monday or tomorrow"), Some(at(2025, 1, 16, 0, 0)));
    }

    #[test]
    fn test_connectors_only_removed_as_whole_words() {
        // "on" inside "monday" and "month" must survive.
        assert_eq!(resolve("on monday"), Some(at(2025, 1, 20, 0, 0)));
        assert!(resolve("end of the month").is_none());
    }

    #[test]
    fn test_unrecognized_fragments() {
        assert!(resolve("").is_none());
        assert!(resolve("whenever").is_none());
        assert!(resolve("sundays").is_none());
    }

    #[test]
    fn test_remove_span() {
        assert_eq!(remove_span("buy milk today", &(9..14)), "buy milk ");
    }
}

//! Command-line interface for quicktask.
//!
//! [`args`] holds the clap definitions, [`commands`] the command bodies.
//! The helpers here turn raw CLI values into what the commands need.

pub mod args;
pub mod commands;

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use crate::core::at_time_of_day;
use crate::error::QuickTaskError;

/// Resolve the `--now` flag into the reference moment.
///
/// `None` means the current local time. Accepted formats are
/// `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD` (midnight) and
/// RFC 3339, which is converted to local time.
///
/// # Errors
///
/// Returns `QuickTaskError::InvalidArgument` if the value matches no format.
pub fn reference_time(now: Option<&str>) -> Result<NaiveDateTime, QuickTaskError> {
    let Some(raw) = now.map(str::trim) else {
        return Ok(Local::now().naive_local());
    };

    for format in ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(moment) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(moment);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(at_time_of_day(date, None));
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|moment| moment.with_timezone(&Local).naive_local())
        .map_err(|_| {
            QuickTaskError::InvalidArgument(format!(
                "--now '{raw}' is not a date (expected \"YYYY-MM-DD HH:MM\", \"YYYY-MM-DD\" or RFC 3339)"
            ))
        })
}

/// Read the whole input from `file`, or stdin when it is absent or `-`.
///
/// # Errors
///
/// Returns `QuickTaskError::Io` if reading fails.
pub fn read_input(file: Option<&Path>) -> Result<String, QuickTaskError> {
    match file {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading transcript file");
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            tracing::debug!("reading transcript from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

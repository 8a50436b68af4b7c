//! quicktask - natural language task extraction
//!
//! This crate turns free-form English into structured tasks: a single
//! sentence such as "Finish landing page by tomorrow 5pm for Aman p1", or a
//! whole meeting transcript with one action item per assignment sentence.
//! Extraction is deterministic and rule-based; the parsers never fail.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::QuickTaskError;
pub use features::nlp::{parse_task, parse_task_at, parse_transcript, parse_transcript_at, ParsedTask, Priority};
pub use features::stats::TaskSummary;

//! Feature implementations for quicktask.
//!
//! This module contains:
//! - Natural language task extraction (single sentences and transcripts)
//! - Statistics over extracted tasks
//! - Shell completions

pub mod nlp;
pub mod shell;
pub mod stats;

//! Error types for quicktask.
//!
//! The parsers themselves never fail; these errors cover the boundaries
//! around them (config files, input files, serialization, CLI values).

use thiserror::Error;

/// Errors produced outside the parsing core.
#[derive(Debug, Error)]
pub enum QuickTaskError {
    /// Configuration could not be located, read, or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A command-line value could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

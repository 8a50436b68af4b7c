//! Path resolution for quicktask configuration.
//!
//! All quicktask data is stored in `~/.quicktask/`:
//! - `config.yaml` - Main configuration file
//!
//! `QUICKTASK_HOME` replaces the root directory when set.

use std::path::PathBuf;

use crate::error::QuickTaskError;

/// Environment variable overriding the root directory.
pub const HOME_ENV: &str = "QUICKTASK_HOME";

/// Paths to quicktask configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.quicktask/`
    pub root: PathBuf,
    /// Config file: `~/.quicktask/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Resolve paths from `QUICKTASK_HOME`, or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, QuickTaskError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME").map_err(|_| {
            QuickTaskError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".quicktask")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

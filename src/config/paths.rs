//! Path resolution for tally configuration and data files.
//!
//! All tally data is stored in `~/.tally/`:
//! - `config.yaml` - Main configuration file
//! - `habits.json` - The habit document store

use std::path::PathBuf;

use crate::error::TallyError;

/// Paths to tally configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tally/`
    pub root: PathBuf,
    /// Config file: `~/.tally/config.yaml`
    pub config_file: PathBuf,
    /// Habit store: `~/.tally/habits.json`
    pub habits_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TallyError> {
        let home = std::env::var("HOME")
            .map_err(|_| TallyError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".tally");

        Ok(Self {
            config_file: root.join("config.yaml"),
            habits_file: root.join("habits.json"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            habits_file: root.join("habits.json"),
            root,
        }
    }

    /// Ensure the data directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TallyError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TallyError::Config(format!("Failed to create directory {:?}: {}", self.root, e))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".tally"))
        })
    }
}

//! Configuration settings for tally.
//!
//! Settings are loaded from `~/.tally/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::TallyError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Habit defaults.
    pub habits: HabitsConfig,
    /// Statistics settings.
    pub stats: StatsConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Defaults applied when creating habits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitsConfig {
    /// Weekly target used when none is given for a weekly habit.
    #[serde(default = "default_weekly_target")]
    pub weekly_target: u32,
}

/// Statistics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Days shown in the calendar heatmap.
    #[serde(default = "default_heatmap_days")]
    pub heatmap_days: u32,
    /// Days shown in the completion trend.
    #[serde(default = "default_trend_days")]
    pub trend_days: u32,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_weekly_target() -> u32 {
    3
}

const fn default_heatmap_days() -> u32 {
    90
}

const fn default_trend_days() -> u32 {
    30
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for HabitsConfig {
    fn default() -> Self {
        Self {
            weekly_target: default_weekly_target(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            heatmap_days: default_heatmap_days(),
            trend_days: default_trend_days(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, TallyError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TallyError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TallyError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TallyError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), TallyError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TallyError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TallyError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TallyError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

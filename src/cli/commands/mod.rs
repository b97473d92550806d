//! Command implementations for tally.
//!
//! Every command takes the habit repository, its parsed arguments, and the
//! requested output format, and returns the rendered output as a string.

mod habit;
mod shell;
mod stats;
mod track;

pub use habit::{add, list};
pub use shell::completions;
pub use stats::stats;
pub use track::{done, miss};

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::core::HabitRepository;
use crate::error::TallyError;
use crate::output::{format_habit, to_json};

/// Execute pause command
///
/// # Errors
///
/// Returns an error if the habit does not exist or the store cannot be
/// written.
pub fn pause(
    repo: &dyn HabitRepository,
    name: &str,
    format: OutputFormat,
) -> Result<String, TallyError> {
    let mut habit = repo.find(name)?;
    habit.active = false;
    repo.update(&habit)?;

    match format {
        OutputFormat::Json => format_habit(&habit, format),
        OutputFormat::Pretty => Ok(format!(
            "{} Paused '{}' - history is kept, tracking stops",
            "‖".yellow(),
            habit.name.bold()
        )),
    }
}

/// Execute resume command
///
/// # Errors
///
/// Returns an error if the habit does not exist or the store cannot be
/// written.
pub fn resume(
    repo: &dyn HabitRepository,
    name: &str,
    format: OutputFormat,
) -> Result<String, TallyError> {
    let mut habit = repo.find(name)?;
    habit.active = true;
    repo.update(&habit)?;

    match format {
        OutputFormat::Json => format_habit(&habit, format),
        OutputFormat::Pretty => Ok(format!(
            "{} Resumed '{}'",
            "▸".green(),
            habit.name.bold()
        )),
    }
}

/// Execute remove command
///
/// # Errors
///
/// Returns an error if the habit does not exist or the store cannot be
/// written.
pub fn remove(
    repo: &dyn HabitRepository,
    name: &str,
    format: OutputFormat,
) -> Result<String, TallyError> {
    let habit = repo.find(name)?;
    repo.remove(habit.id)?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "removed": habit.name,
            "entries": habit.entries.len(),
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} Removed '{}' and {} entries",
            "✗".red(),
            habit.name.bold(),
            habit.entries.len()
        )),
    }
}

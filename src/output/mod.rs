//! Output formatting for tally.
//!
//! This module provides formatters for displaying habit data in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TallyError;
use crate::habits::Habit;

pub use json::*;
pub use pretty::*;

/// Format habits based on output format
///
/// # Errors
///
/// Returns `TallyError::Json` if JSON serialization fails.
pub fn format_habits(
    habits: &[Habit],
    title: &str,
    format: OutputFormat,
) -> Result<String, TallyError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(habits, title)),
        OutputFormat::Json => format_habits_json(habits, title),
    }
}

/// Format a single habit based on output format
///
/// # Errors
///
/// Returns `TallyError::Json` if JSON serialization fails.
pub fn format_habit(habit: &Habit, format: OutputFormat) -> Result<String, TallyError> {
    match format {
        OutputFormat::Pretty => Ok(format_habit_pretty(habit)),
        OutputFormat::Json => format_habit_json(habit),
    }
}

//! JSON output formatting for tally.

use serde::Serialize;
use serde_json::json;

use crate::error::TallyError;
use crate::habits::Habit;

/// Format habits as JSON
///
/// # Errors
///
/// Returns `TallyError::Json` if serialization fails.
pub fn format_habits_json(habits: &[Habit], list_name: &str) -> Result<String, TallyError> {
    let output = json!({
        "list": list_name,
        "count": habits.len(),
        "items": habits
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single habit as JSON
///
/// # Errors
///
/// Returns `TallyError::Json` if serialization fails.
pub fn format_habit_json(habit: &Habit) -> Result<String, TallyError> {
    Ok(serde_json::to_string_pretty(habit)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TallyError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TallyError> {
    Ok(serde_json::to_string_pretty(value)?)
}

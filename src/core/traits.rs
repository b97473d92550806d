//! The repository seam between storage and the command layer.
//!
//! Commands depend on this trait rather than on the concrete JSON store, so
//! they can be unit-tested against a mock and the persistence format can
//! change without touching presentation code.

use chrono::NaiveDate;

use crate::error::TallyError;
use crate::habits::{Frequency, Habit};

/// Access to the habit collection.
#[cfg_attr(test, mockall::automock)]
pub trait HabitRepository {
    /// List all habits in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list(&self) -> Result<Vec<Habit>, TallyError>;

    /// Find a habit by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `TallyError::NotFound` if no habit matches.
    fn find(&self, name: &str) -> Result<Habit, TallyError>;

    /// Create a new habit and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if a habit with the same name already exists or the
    /// store cannot be written.
    fn insert(&self, name: &str, frequency: Frequency, target: u32) -> Result<Habit, TallyError>;

    /// Persist changes to an existing habit.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::NotFound` if the habit id is unknown.
    fn update(&self, habit: &Habit) -> Result<(), TallyError>;

    /// Delete a habit and its history.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::NotFound` if the habit id is unknown.
    fn remove(&self, id: u64) -> Result<(), TallyError>;

    /// Record completion status for one day of a habit.
    ///
    /// Upserts by date; recording the same date twice overwrites the earlier
    /// flag (last write wins).
    ///
    /// # Errors
    ///
    /// Returns `TallyError::NotFound` if the habit id is unknown.
    fn record_entry(&self, id: u64, date: NaiveDate, completed: bool) -> Result<(), TallyError>;
}

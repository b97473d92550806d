//! Habit domain types and persistence.

mod store;
mod types;

pub use store::HabitStore;
pub use types::{EntryRecord, Frequency, Habit, HabitEntry, ENTRY_DATE_FORMAT};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TallyError;

/// Date format used for entry dates in the habit store.
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default = "default_target")]
    pub target: u32,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
}

/// One day's completion record, as stored in the habit document.
///
/// The date is kept in its stored string form; converting to a typed
/// [`HabitEntry`] is the point where malformed dates are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub date: String,
    pub completed: bool,
}

/// A typed completion record used by the analytics core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitEntry {
    pub date: NaiveDate,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
        }
    }
}

const fn default_target() -> u32 {
    1
}

const fn default_active() -> bool {
    true
}

impl EntryRecord {
    /// Create a record for a typed date.
    #[must_use]
    pub fn new(date: NaiveDate, completed: bool) -> Self {
        Self {
            date: date.format(ENTRY_DATE_FORMAT).to_string(),
            completed,
        }
    }

    /// Parse the stored date into a typed entry.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidEntry` if the stored date string does not
    /// parse as `YYYY-MM-DD`.
    pub fn parse(&self) -> Result<HabitEntry, TallyError> {
        let date = NaiveDate::parse_from_str(&self.date, ENTRY_DATE_FORMAT).map_err(|_| {
            TallyError::InvalidEntry(format!("unparseable entry date '{}'", self.date))
        })?;

        Ok(HabitEntry {
            date,
            completed: self.completed,
        })
    }
}

impl HabitEntry {
    /// Create a new typed entry.
    #[must_use]
    pub const fn new(date: NaiveDate, completed: bool) -> Self {
        Self { date, completed }
    }
}

impl Habit {
    /// Create a new habit with an empty history.
    #[must_use]
    pub fn new(id: u64, name: &str, frequency: Frequency, target: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            frequency,
            target,
            active: true,
            created_at: Utc::now(),
            entries: Vec::new(),
        }
    }

    /// Parse the full entry history into typed entries.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidEntry` for the first entry whose date does
    /// not parse; malformed dates are reported rather than skipped so that
    /// corrupt history is visible instead of silently shifting streak math.
    pub fn history(&self) -> Result<Vec<HabitEntry>, TallyError> {
        self.entries
            .iter()
            .map(|record| {
                record.parse().map_err(|_| {
                    TallyError::InvalidEntry(format!(
                        "habit '{}' has unparseable entry date '{}'",
                        self.name, record.date
                    ))
                })
            })
            .collect()
    }

    /// Get the stored record for a specific date, if any.
    #[must_use]
    pub fn entry_on(&self, date: NaiveDate) -> Option<&EntryRecord> {
        let date_str = date.format(ENTRY_DATE_FORMAT).to_string();
        self.entries.iter().find(|e| e.date == date_str)
    }

    /// Check whether the habit was completed on a specific date.
    #[must_use]
    pub fn is_done_on(&self, date: NaiveDate) -> bool {
        self.entry_on(date).is_some_and(|e| e.completed)
    }

    /// Record completion status for a date.
    ///
    /// Upserts by date: if a record for the date already exists its flag is
    /// overwritten (last write wins), otherwise a new record is appended.
    pub fn record(&mut self, date: NaiveDate, completed: bool) {
        let date_str = date.format(ENTRY_DATE_FORMAT).to_string();

        if let Some(existing) = self.entries.iter_mut().find(|e| e.date == date_str) {
            existing.completed = completed;
        } else {
            self.entries.push(EntryRecord {
                date: date_str,
                completed,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_appends_new_entry() {
        let mut habit = Habit::new(1, "Reading", Frequency::Daily, 1);
        habit.record(date(2024, 1, 5), true);

        assert_eq!(habit.entries.len(), 1);
        assert_eq!(habit.entries[0].date, "2024-01-05");
        assert!(habit.entries[0].completed);
    }

    #[test]
    fn test_record_last_write_wins() {
        let mut habit = Habit::new(1, "Reading", Frequency::Daily, 1);
        habit.record(date(2024, 1, 5), true);
        habit.record(date(2024, 1, 5), false);

        assert_eq!(habit.entries.len(), 1);
        assert!(!habit.entries[0].completed);
    }

    #[test]
    fn test_history_parses_dates() {
        let mut habit = Habit::new(1, "Reading", Frequency::Daily, 1);
        habit.record(date(2024, 1, 5), true);
        habit.record(date(2024, 1, 6), false);

        let history = habit.history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], HabitEntry::new(date(2024, 1, 5), true));
        assert_eq!(history[1], HabitEntry::new(date(2024, 1, 6), false));
    }

    #[test]
    fn test_history_reports_malformed_date() {
        let mut habit = Habit::new(1, "Reading", Frequency::Daily, 1);
        habit.entries.push(EntryRecord {
            date: "not-a-date".to_string(),
            completed: true,
        });

        let err = habit.history().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Reading"));
        assert!(message.contains("not-a-date"));
    }

    #[test]
    fn test_is_done_on() {
        let mut habit = Habit::new(1, "Reading", Frequency::Daily, 1);
        habit.record(date(2024, 1, 5), true);
        habit.record(date(2024, 1, 6), false);

        assert!(habit.is_done_on(date(2024, 1, 5)));
        assert!(!habit.is_done_on(date(2024, 1, 6)));
        assert!(!habit.is_done_on(date(2024, 1, 7)));
    }

    #[test]
    fn test_frequency_serde_roundtrip() {
        let json = serde_json::to_string(&Frequency::Weekly).unwrap();
        assert_eq!(json, "\"weekly\"");
        let back: Frequency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Frequency::Weekly);
    }
}

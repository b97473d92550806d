//! Habit persistence.
//!
//! All habits live in a single JSON document file (`~/.tally/habits.json`).
//! Every operation is a read-modify-write of the whole file; the store is
//! single-writer and owned by the running process.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::core::HabitRepository;
use crate::error::TallyError;
use crate::habits::{Frequency, Habit};

/// On-disk document: the full habit collection.
#[derive(Debug, Default, Serialize, Deserialize)]
struct HabitFile {
    habits: Vec<Habit>,
}

/// JSON-file-backed habit store.
pub struct HabitStore {
    data_file: PathBuf,
}

impl HabitStore {
    /// Create a store at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new() -> Result<Self, TallyError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;

        Ok(Self {
            data_file: paths.habits_file,
        })
    }

    /// Create a store backed by a specific file (for testing).
    #[must_use]
    pub const fn with_file(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    /// Load the full collection. A missing file is an empty store.
    fn load(&self) -> Result<Vec<Habit>, TallyError> {
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.data_file).map_err(TallyError::Io)?;
        let file: HabitFile = serde_json::from_str(&content).map_err(|e| {
            TallyError::Store(format!(
                "Failed to parse {}: {e}",
                self.data_file.display()
            ))
        })?;

        Ok(file.habits)
    }

    /// Write the full collection back to disk.
    fn save(&self, habits: Vec<Habit>) -> Result<(), TallyError> {
        let file = HabitFile { habits };
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| TallyError::Store(format!("Failed to serialize habits: {e}")))?;

        std::fs::write(&self.data_file, content).map_err(TallyError::Io)?;
        Ok(())
    }
}

impl HabitRepository for HabitStore {
    fn list(&self) -> Result<Vec<Habit>, TallyError> {
        self.load()
    }

    fn find(&self, name: &str) -> Result<Habit, TallyError> {
        self.load()?
            .into_iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| TallyError::NotFound(format!("Habit '{name}'")))
    }

    fn insert(&self, name: &str, frequency: Frequency, target: u32) -> Result<Habit, TallyError> {
        let mut habits = self.load()?;

        if habits.iter().any(|h| h.name.eq_ignore_ascii_case(name)) {
            return Err(TallyError::Store(format!(
                "A habit named '{name}' already exists"
            )));
        }

        let next_id = habits.iter().map(|h| h.id).max().unwrap_or(0) + 1;
        let habit = Habit::new(next_id, name, frequency, target);

        habits.push(habit.clone());
        self.save(habits)?;

        Ok(habit)
    }

    fn update(&self, habit: &Habit) -> Result<(), TallyError> {
        let mut habits = self.load()?;

        let slot = habits
            .iter_mut()
            .find(|h| h.id == habit.id)
            .ok_or_else(|| TallyError::NotFound(format!("Habit '{}'", habit.name)))?;
        *slot = habit.clone();

        self.save(habits)
    }

    fn remove(&self, id: u64) -> Result<(), TallyError> {
        let mut habits = self.load()?;
        let before = habits.len();
        habits.retain(|h| h.id != id);

        if habits.len() == before {
            return Err(TallyError::NotFound(format!("Habit #{id}")));
        }

        self.save(habits)
    }

    fn record_entry(&self, id: u64, date: NaiveDate, completed: bool) -> Result<(), TallyError> {
        let mut habits = self.load()?;

        let habit = habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| TallyError::NotFound(format!("Habit #{id}")))?;
        habit.record(date, completed);

        self.save(habits)
    }
}

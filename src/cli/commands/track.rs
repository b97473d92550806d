//! Entry recording commands (done / miss).

use chrono::{Local, NaiveDate};
use colored::Colorize;

use crate::cli::args::{OutputFormat, TrackArgs};
use crate::core::{analytics, parse_entry_date, HabitRepository};
use crate::error::TallyError;
use crate::output::to_json;

/// Execute done command
///
/// # Errors
///
/// Returns an error if the habit does not exist, the date cannot be parsed,
/// or the store cannot be written.
pub fn done(
    repo: &dyn HabitRepository,
    args: &TrackArgs,
    format: OutputFormat,
) -> Result<String, TallyError> {
    record(repo, args, true, format)
}

/// Execute miss command
///
/// # Errors
///
/// Returns an error if the habit does not exist, the date cannot be parsed,
/// or the store cannot be written.
pub fn miss(
    repo: &dyn HabitRepository,
    args: &TrackArgs,
    format: OutputFormat,
) -> Result<String, TallyError> {
    record(repo, args, false, format)
}

fn record(
    repo: &dyn HabitRepository,
    args: &TrackArgs,
    completed: bool,
    format: OutputFormat,
) -> Result<String, TallyError> {
    let today = Local::now().date_naive();
    let date = resolve_date(args.date.as_deref(), today)?;

    let mut habit = repo.find(&args.habit)?;
    repo.record_entry(habit.id, date, completed)?;

    // Mirror the write locally so the streak reflects the new entry without
    // a second store read.
    habit.record(date, completed);
    let streak = analytics::current_streak(&habit.history()?, today);

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "habit": habit.name,
            "date": date,
            "completed": completed,
            "current_streak": streak,
        })),
        OutputFormat::Pretty => {
            let day = if date == today {
                "today".to_string()
            } else {
                date.format("%Y-%m-%d").to_string()
            };

            if completed {
                let mut line = format!("{} {} done for {}", "✓".green(), habit.name.bold(), day);
                if streak > 1 {
                    line.push_str(&format!("  {}", format!("🔥 {streak} day streak").yellow()));
                }
                Ok(line)
            } else {
                Ok(format!(
                    "{} {} marked missed for {}",
                    "✗".red(),
                    habit.name.bold(),
                    day
                ))
            }
        },
    }
}

fn resolve_date(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate, TallyError> {
    match input {
        None => Ok(today),
        Some(raw) => parse_entry_date(raw, today)
            .ok_or_else(|| TallyError::Parse(format!("Unrecognized date '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MockHabitRepository;
    use crate::habits::{Frequency, Habit};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_done_records_today() {
        let today = Local::now().date_naive();

        let mut repo = MockHabitRepository::new();
        repo.expect_find()
            .returning(|_| Ok(Habit::new(1, "Reading", Frequency::Daily, 1)));
        repo.expect_record_entry()
            .withf(move |id, d, completed| *id == 1 && *d == today && *completed)
            .returning(|_, _, _| Ok(()));

        let args = TrackArgs {
            habit: "Reading".to_string(),
            date: None,
        };

        let output = done(&repo, &args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Reading"));
        assert!(output.contains("done for today"));
    }

    #[test]
    fn test_done_with_explicit_date() {
        let mut repo = MockHabitRepository::new();
        repo.expect_find()
            .returning(|_| Ok(Habit::new(1, "Reading", Frequency::Daily, 1)));
        repo.expect_record_entry()
            .withf(|_, d, completed| *d == date(2024, 1, 5) && *completed)
            .returning(|_, _, _| Ok(()));

        let args = TrackArgs {
            habit: "Reading".to_string(),
            date: Some("2024-01-05".to_string()),
        };

        let output = done(&repo, &args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("2024-01-05"));
    }

    #[test]
    fn test_miss_records_incomplete_entry() {
        let today = Local::now().date_naive();

        let mut repo = MockHabitRepository::new();
        repo.expect_find()
            .returning(|_| Ok(Habit::new(1, "Reading", Frequency::Daily, 1)));
        repo.expect_record_entry()
            .withf(move |_, d, completed| *d == today && !*completed)
            .returning(|_, _, _| Ok(()));

        let args = TrackArgs {
            habit: "Reading".to_string(),
            date: None,
        };

        let output = miss(&repo, &args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("marked missed"));
    }

    #[test]
    fn test_done_reports_streak() {
        let today = Local::now().date_naive();

        let mut repo = MockHabitRepository::new();
        repo.expect_find().returning(move |_| {
            let mut habit = Habit::new(1, "Reading", Frequency::Daily, 1);
            habit.record(today - chrono::Duration::days(1), true);
            Ok(habit)
        });
        repo.expect_record_entry().returning(|_, _, _| Ok(()));

        let args = TrackArgs {
            habit: "Reading".to_string(),
            date: None,
        };

        let output = done(&repo, &args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("2 day streak"));
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let mut repo = MockHabitRepository::new();
        repo.expect_find()
            .returning(|_| Ok(Habit::new(1, "Reading", Frequency::Daily, 1)));

        let args = TrackArgs {
            habit: "Reading".to_string(),
            date: Some("someday".to_string()),
        };

        let result = done(&repo, &args, OutputFormat::Pretty);
        assert!(matches!(result, Err(TallyError::Parse(_))));
    }
}

//! Habit creation and listing commands.

use chrono::Local;
use colored::Colorize;

use crate::cli::args::{AddArgs, ListArgs, OutputFormat};
use crate::config::Config;
use crate::core::HabitRepository;
use crate::error::TallyError;
use crate::features::stats::{render_progress_bar, HabitStatus};
use crate::habits::Frequency;
use crate::output::to_json;

/// Execute add command
///
/// # Errors
///
/// Returns an error if a habit with the same name exists or the store cannot
/// be written.
pub fn add(
    repo: &dyn HabitRepository,
    args: &AddArgs,
    format: OutputFormat,
) -> Result<String, TallyError> {
    let frequency: Frequency = args.frequency.into();

    let target = match (args.target, frequency) {
        (Some(target), _) => target,
        (None, Frequency::Weekly) => Config::load().unwrap_or_default().habits.weekly_target,
        (None, Frequency::Daily) => 1,
    };

    if target == 0 {
        return Err(TallyError::InvalidParameter(
            "target must be at least 1".to_string(),
        ));
    }

    let habit = repo.insert(&args.name, frequency, target)?;

    match format {
        OutputFormat::Json => to_json(&habit),
        OutputFormat::Pretty => {
            let mut line = format!("{} Added habit: {}", "✓".green(), habit.name.bold());
            if habit.frequency == Frequency::Weekly {
                line.push_str(&format!(" ({}x/week)", habit.target));
            }
            Ok(line)
        },
    }
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if the store cannot be read or a stored entry date is
/// malformed.
pub fn list(
    repo: &dyn HabitRepository,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<String, TallyError> {
    let today = Local::now().date_naive();

    let mut habits = repo.list()?;
    if !args.all {
        habits.retain(|h| h.active);
    }

    let rows = HabitStatus::collect(&habits, today)?;

    match format {
        OutputFormat::Json => to_json(&rows),
        OutputFormat::Pretty => {
            if rows.is_empty() {
                return Ok(format!(
                    "No habits yet. Add one with {}",
                    "tally add \"<name>\"".cyan()
                ));
            }

            let mut output = Vec::new();
            output.push(format!("Habits for {}", today.format("%A, %b %d")).bold().to_string());
            output.push("─".repeat(60));

            for row in &rows {
                let checkbox = if row.done_today {
                    "[x]".green()
                } else {
                    "[ ]".white()
                };

                let name = if row.active {
                    row.name.bold().to_string()
                } else {
                    format!("{} (paused)", row.name).dimmed().to_string()
                };

                let mut line = format!("{checkbox} {name}");

                if row.current_streak > 0 {
                    line.push_str(&format!(
                        "  {}",
                        format!("🔥 {} days", row.current_streak).yellow()
                    ));
                }

                line.push_str(&format!(
                    "  {}",
                    format!("30d: {:.0}%", row.rate_30d).dimmed()
                ));

                if let Some(progress) = &row.week_progress {
                    line.push_str(&format!(
                        "  {} {}/{} this week",
                        render_progress_bar(progress.completed, progress.target as usize, 10),
                        progress.completed,
                        progress.target
                    ));
                }

                output.push(line);
            }

            Ok(output.join("\n"))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::FrequencyArg;
    use crate::core::MockHabitRepository;
    use crate::habits::Habit;

    #[test]
    fn test_add_daily_habit() {
        let mut repo = MockHabitRepository::new();
        repo.expect_insert()
            .withf(|name, frequency, target| {
                name == "Reading" && *frequency == Frequency::Daily && *target == 1
            })
            .returning(|name, frequency, target| Ok(Habit::new(1, name, frequency, target)));

        let args = AddArgs {
            name: "Reading".to_string(),
            frequency: FrequencyArg::Daily,
            target: None,
        };

        let output = add(&repo, &args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Added habit"));
        assert!(output.contains("Reading"));
    }

    #[test]
    fn test_add_weekly_habit_with_target() {
        let mut repo = MockHabitRepository::new();
        repo.expect_insert()
            .withf(|_, frequency, target| *frequency == Frequency::Weekly && *target == 2)
            .returning(|name, frequency, target| Ok(Habit::new(1, name, frequency, target)));

        let args = AddArgs {
            name: "Long run".to_string(),
            frequency: FrequencyArg::Weekly,
            target: Some(2),
        };

        let output = add(&repo, &args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("2x/week"));
    }

    #[test]
    fn test_add_rejects_zero_target() {
        let repo = MockHabitRepository::new();
        let args = AddArgs {
            name: "Reading".to_string(),
            frequency: FrequencyArg::Daily,
            target: Some(0),
        };

        let result = add(&repo, &args, OutputFormat::Pretty);
        assert!(matches!(result, Err(TallyError::InvalidParameter(_))));
    }

    #[test]
    fn test_list_empty_store() {
        let mut repo = MockHabitRepository::new();
        repo.expect_list().returning(|| Ok(Vec::new()));

        let args = ListArgs { all: false };
        let output = list(&repo, &args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("No habits yet"));
    }

    #[test]
    fn test_list_hides_paused_by_default() {
        let mut repo = MockHabitRepository::new();
        repo.expect_list().returning(|| {
            let active = Habit::new(1, "Reading", Frequency::Daily, 1);
            let mut paused = Habit::new(2, "Running", Frequency::Daily, 1);
            paused.active = false;
            Ok(vec![active, paused])
        });

        let args = ListArgs { all: false };
        let output = list(&repo, &args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Reading"));
        assert!(!output.contains("Running"));
    }

    #[test]
    fn test_list_all_includes_paused() {
        let mut repo = MockHabitRepository::new();
        repo.expect_list().returning(|| {
            let mut paused = Habit::new(2, "Running", Frequency::Daily, 1);
            paused.active = false;
            Ok(vec![paused])
        });

        let args = ListArgs { all: true };
        let output = list(&repo, &args, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Running"));
        assert!(output.contains("paused"));
    }
}

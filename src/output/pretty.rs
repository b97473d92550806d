use colored::Colorize;

use crate::habits::{Frequency, Habit};

/// Format a list of habits as a pretty table
#[must_use]
pub fn format_habits_pretty(habits: &[Habit], title: &str) -> String {
    if habits.is_empty() {
        return format!("{} (0 habits)\n  No habits", title);
    }

    let mut output = format!("{} ({} habits)\n", title, habits.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for habit in habits {
        let status_icon = if habit.active {
            "[▸]".green()
        } else {
            "[‖]".yellow()
        };

        let mut line = format!("{} {}", status_icon, habit.name.bold());
        line.push_str(&format!("  {}", habit.frequency.to_string().dimmed()));

        if habit.frequency == Frequency::Weekly {
            line.push_str(&format!("  {}", format!("{}x/week", habit.target).cyan()));
        }

        if !habit.entries.is_empty() {
            line.push_str(&format!(
                "  {}",
                format!("{} entries", habit.entries.len()).dimmed()
            ));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single habit as pretty output
#[must_use]
pub fn format_habit_pretty(habit: &Habit) -> String {
    let status_icon = if habit.active {
        "[▸]".green()
    } else {
        "[‖]".yellow()
    };

    let mut output = format!("{} {}\n", status_icon, habit.name.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), habit.id));
    output.push_str(&format!("  {}: {}\n", "Frequency".dimmed(), habit.frequency));

    if habit.frequency == Frequency::Weekly {
        output.push_str(&format!(
            "  {}: {} times per week\n",
            "Target".dimmed(),
            habit.target
        ));
    }

    output.push_str(&format!(
        "  {}: {}\n",
        "Tracked since".dimmed(),
        habit.created_at.format("%Y-%m-%d")
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Entries".dimmed(),
        habit.entries.len()
    ));

    output
}

//! Statistics command implementation.
//!
//! Handles the stats subcommands for habit analytics.

use chrono::{Duration, Local, NaiveDate};
use colored::Colorize;

use crate::cli::args::{OutputFormat, StatsCommands};
use crate::config::Config;
use crate::core::{analytics, HabitRepository};
use crate::error::TallyError;
use crate::features::stats::{
    generate_insights, render_calendar_heatmap, render_progress_bar, render_sparkline,
    HabitMetrics, HabitStatus, InsightLevel,
};
use crate::output::to_json;

/// Execute stats subcommands.
///
/// # Errors
///
/// Returns an error if the store cannot be read, a named habit does not
/// exist, or a stored entry date is malformed.
pub fn stats(
    repo: &dyn HabitRepository,
    cmd: Option<StatsCommands>,
    format: OutputFormat,
) -> Result<String, TallyError> {
    let today = Local::now().date_naive();

    match cmd {
        None | Some(StatsCommands::Summary) => render_summary(repo, today, format),
        Some(StatsCommands::Habit { name }) => render_habit(repo, &name, today, format),
        Some(StatsCommands::Heatmap { name, days }) => {
            render_heatmap_cmd(repo, &name, days, today, format)
        },
        Some(StatsCommands::Insights) => render_insights(repo, today, format),
    }
}

/// Render the all-habit summary.
fn render_summary(
    repo: &dyn HabitRepository,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TallyError> {
    let habits = repo.list()?;
    let rows = HabitStatus::collect(&habits, today)?;

    match format {
        OutputFormat::Json => to_json(&rows),
        OutputFormat::Pretty => {
            if habits.is_empty() {
                return Ok("No habits tracked yet.".to_string());
            }

            let active = habits.iter().filter(|h| h.active).count();
            let done_today = habits
                .iter()
                .filter(|h| h.active && h.is_done_on(today))
                .count();

            let mut output = Vec::new();

            output.push("📊 HABIT SUMMARY".bold().to_string());
            output.push("─".repeat(50));
            output.push(format!(
                "  Active: {}  Paused: {}  Done today: {}/{}",
                active.to_string().green(),
                habits.len() - active,
                done_today.to_string().green(),
                active
            ));
            output.push(String::new());

            for row in rows.iter().filter(|r| r.active) {
                let checkbox = if row.done_today {
                    "[x]".green()
                } else {
                    "[ ]".white()
                };
                output.push(format!(
                    "  {} {:<20} 🔥 {:<3}  30d: {:>3.0}%",
                    checkbox,
                    row.name,
                    row.current_streak,
                    row.rate_30d
                ));
            }

            // Completions across all habits, one sparkline bucket per day
            let week: Vec<usize> = (0..7)
                .rev()
                .map(|i| {
                    let day = today - Duration::days(i);
                    habits.iter().filter(|h| h.is_done_on(day)).count()
                })
                .collect();
            output.push(String::new());
            output.push(format!("  Last 7 days: {}", render_sparkline(&week)));

            Ok(output.join("\n"))
        },
    }
}

/// Render the detailed dashboard for one habit.
fn render_habit(
    repo: &dyn HabitRepository,
    name: &str,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TallyError> {
    let habit = repo.find(name)?;
    let metrics = HabitMetrics::calculate(&habit, today)?;

    match format {
        OutputFormat::Json => to_json(&metrics),
        OutputFormat::Pretty => {
            let config = Config::load().unwrap_or_default();
            let history = habit.history()?;

            let mut output = Vec::new();

            output.push(format!("🎯 {}", habit.name).bold().to_string());
            output.push("═".repeat(50));
            output.push(String::new());

            output.push("🔥 STREAKS".bold().to_string());
            output.push("─".repeat(50));
            let current_display = if metrics.current_streak > 0 {
                format!("{} days", metrics.current_streak).green().to_string()
            } else {
                "0 days".dimmed().to_string()
            };
            output.push(format!(
                "  Current: {}  Best: {} days",
                current_display, metrics.best_streak
            ));
            output.push(String::new());

            output.push("✅ COMPLETIONS".bold().to_string());
            output.push("─".repeat(50));
            output.push(format!(
                "  Total: {}  7-day rate: {:.0}%  30-day rate: {:.0}%",
                metrics.total_completions, metrics.rate_7d, metrics.rate_30d
            ));
            output.push(format!(
                "  Consistency since start: {:.1}%",
                metrics.consistency
            ));

            if let Some(progress) = &metrics.week_progress {
                output.push(format!(
                    "  This week: {} {}/{}",
                    render_progress_bar(progress.completed, progress.target as usize, 15),
                    progress.completed,
                    progress.target
                ));
            }
            output.push(String::new());

            // Trend over the configured window, one bucket per day
            let trend_days = i64::from(config.stats.trend_days.max(1));
            let trend = analytics::heatmap_window(&history, trend_days, today)?;
            let values: Vec<usize> = trend.iter().map(|d| usize::from(d.completed)).collect();
            output.push(format!("📈 Last {trend_days} days: {}", render_sparkline(&values)));
            output.push(String::new());

            output.push(format!("📅 HEATMAP (Last {} days)", config.stats.heatmap_days).bold().to_string());
            output.push("─".repeat(50));
            let window =
                analytics::heatmap_window(&history, i64::from(config.stats.heatmap_days.max(1)), today)?;
            output.push(render_calendar_heatmap(&window));

            Ok(output.join("\n"))
        },
    }
}

/// Render the calendar heatmap for one habit.
fn render_heatmap_cmd(
    repo: &dyn HabitRepository,
    name: &str,
    days: Option<u32>,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TallyError> {
    let habit = repo.find(name)?;
    let history = habit.history()?;

    let window_days = i64::from(
        days.unwrap_or_else(|| Config::load().unwrap_or_default().stats.heatmap_days),
    );
    let window = analytics::heatmap_window(&history, window_days, today)?;

    match format {
        OutputFormat::Json => to_json(&window),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push(
                format!("📅 {} (Last {} days)", habit.name, window_days)
                    .bold()
                    .to_string(),
            );
            output.push("═".repeat(50));
            output.push(String::new());
            output.push(render_calendar_heatmap(&window));

            let rate = analytics::completion_rate(&history, window_days, today)?;
            output.push(String::new());
            output.push(format!("Completion rate: {rate:.0}%"));

            Ok(output.join("\n"))
        },
    }
}

/// Render insights.
fn render_insights(
    repo: &dyn HabitRepository,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TallyError> {
    let habits = repo.list()?;
    let insights = generate_insights(&habits, today)?;

    match format {
        OutputFormat::Json => to_json(&insights),
        OutputFormat::Pretty => {
            if insights.is_empty() {
                return Ok(
                    "No insights yet. Track a few habits for a while to generate them.".to_string()
                );
            }

            let mut output = Vec::new();
            output.push("💡 Habit Insights".bold().to_string());
            output.push("═".repeat(50));

            let mut current_category = String::new();
            for insight in insights {
                if insight.category != current_category {
                    output.push(format!("\n{}", insight.category.bold()));
                    output.push("─".repeat(40));
                    current_category.clone_from(&insight.category);
                }

                let icon = match insight.level {
                    InsightLevel::High => insight.level.icon().red().to_string(),
                    InsightLevel::Medium => insight.level.icon().yellow().to_string(),
                    InsightLevel::Low => insight.level.icon().blue().to_string(),
                };

                output.push(format!("{} {}", icon, insight.message));
                if let Some(suggestion) = insight.suggestion {
                    output.push(format!("   → {}", suggestion.dimmed()));
                }
            }

            Ok(output.join("\n"))
        },
    }
}

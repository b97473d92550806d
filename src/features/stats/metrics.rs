//! Metric calculations for habits.
//!
//! Aggregates the analytics core into per-habit metric bundles for display.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::analytics;
use crate::error::TallyError;
use crate::habits::{Frequency, Habit};

/// Progress toward a weekly habit's target for the current week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekProgress {
    /// Completions recorded since Monday of the current week.
    pub completed: usize,
    /// Times-per-week target.
    pub target: u32,
    /// Progress percentage, capped at 100.
    pub percent: f64,
}

/// Full analytics for one habit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitMetrics {
    /// Habit name
    pub name: String,
    /// Consecutive completed days ending today
    pub current_streak: usize,
    /// Longest completed run in the whole history
    pub best_streak: usize,
    /// Total completed entries, all time
    pub total_completions: usize,
    /// Completion rate over the last 7 days
    pub rate_7d: f64,
    /// Completion rate over the last 30 days
    pub rate_30d: f64,
    /// Completions per day since the habit was created, as a percentage
    pub consistency: f64,
    /// Week progress for weekly habits
    pub week_progress: Option<WeekProgress>,
}

impl HabitMetrics {
    /// Calculate all metrics for a habit.
    ///
    /// # Errors
    ///
    /// Returns an error if the habit's stored history contains an
    /// unparseable entry date.
    pub fn calculate(habit: &Habit, today: NaiveDate) -> Result<Self, TallyError> {
        let history = habit.history()?;

        let current_streak = analytics::current_streak(&history, today);
        let best_streak = analytics::best_streak(&history);
        let total_completions = history.iter().filter(|e| e.completed).count();
        let rate_7d = analytics::completion_rate(&history, 7, today)?;
        let rate_30d = analytics::completion_rate(&history, 30, today)?;

        let days_since_start = (today - habit.created_at.date_naive()).num_days();
        #[allow(clippy::cast_precision_loss)]
        let consistency = if days_since_start > 0 {
            total_completions as f64 / days_since_start as f64 * 100.0
        } else {
            0.0
        };

        let week_progress = (habit.frequency == Frequency::Weekly)
            .then(|| week_progress(habit, &history, today));

        Ok(Self {
            name: habit.name.clone(),
            current_streak,
            best_streak,
            total_completions,
            rate_7d,
            rate_30d,
            consistency,
            week_progress,
        })
    }
}

/// Count this week's completions against the weekly target.
fn week_progress(
    habit: &Habit,
    history: &[crate::habits::HabitEntry],
    today: NaiveDate,
) -> WeekProgress {
    let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let completed = history
        .iter()
        .filter(|e| e.completed && e.date >= week_start)
        .count();

    let target = habit.target.max(1);
    #[allow(clippy::cast_precision_loss)]
    let percent = (completed as f64 / f64::from(target) * 100.0).min(100.0);

    WeekProgress {
        completed,
        target,
        percent,
    }
}

/// One row of the tracking list view.
#[derive(Debug, Clone, Serialize)]
pub struct HabitStatus {
    /// Habit name
    pub name: String,
    /// Daily or weekly
    pub frequency: Frequency,
    /// Whether the habit is being tracked
    pub active: bool,
    /// Whether a completed entry exists for today
    pub done_today: bool,
    /// Consecutive completed days ending today
    pub current_streak: usize,
    /// Completion rate over the last 30 days
    pub rate_30d: f64,
    /// Week progress for weekly habits
    pub week_progress: Option<WeekProgress>,
}

impl HabitStatus {
    /// Build status rows for a list of habits.
    ///
    /// # Errors
    ///
    /// Returns an error if any habit's stored history contains an
    /// unparseable entry date.
    pub fn collect(habits: &[Habit], today: NaiveDate) -> Result<Vec<Self>, TallyError> {
        habits
            .iter()
            .map(|habit| {
                let metrics = HabitMetrics::calculate(habit, today)?;
                Ok(Self {
                    name: habit.name.clone(),
                    frequency: habit.frequency,
                    active: habit.active,
                    done_today: habit.is_done_on(today),
                    current_streak: metrics.current_streak,
                    rate_30d: metrics.rate_30d,
                    week_progress: metrics.week_progress,
                })
            })
            .collect()
    }
}

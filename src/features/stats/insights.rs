//! Insights generation from habit metrics.
//!
//! Provides actionable observations based on streaks and completion rates.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::metrics::HabitMetrics;
use crate::error::TallyError;
use crate::habits::Habit;

/// Insight importance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightLevel {
    /// High priority - needs attention
    High,
    /// Medium priority - worth noting
    Medium,
    /// Low priority - informational
    Low,
}

impl InsightLevel {
    /// Get icon for this level.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::High => "!",
            Self::Medium => "*",
            Self::Low => "-",
        }
    }
}

/// An actionable insight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// The insight message
    pub message: String,
    /// Importance level
    pub level: InsightLevel,
    /// Category of insight
    pub category: String,
    /// Optional suggestion
    pub suggestion: Option<String>,
}

impl Insight {
    fn new(message: &str, level: InsightLevel, category: &str) -> Self {
        Self {
            message: message.to_string(),
            level,
            category: category.to_string(),
            suggestion: None,
        }
    }

    fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

/// Generate insights for all habits.
///
/// # Errors
///
/// Returns an error if any habit's stored history contains an unparseable
/// entry date.
pub fn generate_insights(habits: &[Habit], today: NaiveDate) -> Result<Vec<Insight>, TallyError> {
    let mut insights = Vec::new();

    let active: Vec<&Habit> = habits.iter().filter(|h| h.active).collect();

    if active.is_empty() {
        insights.push(
            Insight::new("No active habits", InsightLevel::Medium, "Tracking")
                .with_suggestion("Add one with 'tally add' or resume a paused habit"),
        );
        return Ok(insights);
    }

    let mut untracked_today = 0;

    for habit in &active {
        let metrics = HabitMetrics::calculate(habit, today)?;

        insights.extend(streak_insights(habit, &metrics, today));
        insights.extend(rate_insights(&metrics));

        if !habit.is_done_on(today) {
            untracked_today += 1;
        }
    }

    if untracked_today == active.len() {
        insights.push(
            Insight::new("Nothing checked off yet today", InsightLevel::Medium, "Tracking")
                .with_suggestion("Mark a habit with 'tally done <habit>'"),
        );
    }

    // Sort by priority
    insights.sort_by_key(|i| match i.level {
        InsightLevel::High => 0,
        InsightLevel::Medium => 1,
        InsightLevel::Low => 2,
    });

    Ok(insights)
}

fn streak_insights(habit: &Habit, metrics: &HabitMetrics, today: NaiveDate) -> Vec<Insight> {
    let mut insights = Vec::new();

    if metrics.current_streak >= 30 {
        insights.push(Insight::new(
            &format!(
                "'{}' has a {} day streak - a month and counting!",
                habit.name, metrics.current_streak
            ),
            InsightLevel::Low,
            "Streaks",
        ));
    } else if metrics.current_streak >= 7 {
        insights.push(Insight::new(
            &format!(
                "'{}' is on a {} day streak - keep it going!",
                habit.name, metrics.current_streak
            ),
            InsightLevel::Low,
            "Streaks",
        ));
    }

    // A streak that ends today unless the habit gets checked off
    let yesterday = today - Duration::days(1);
    if !habit.is_done_on(today) && habit.is_done_on(yesterday) {
        insights.push(
            Insight::new(
                &format!("'{}' streak is at risk today", habit.name),
                InsightLevel::High,
                "Streaks",
            )
            .with_suggestion(&format!("Run 'tally done {}' to keep the chain", habit.name)),
        );
    }

    if metrics.best_streak > 0 && metrics.current_streak > 0 {
        let to_beat = metrics.best_streak.saturating_sub(metrics.current_streak);
        if to_beat > 0 && to_beat <= 3 {
            insights.push(Insight::new(
                &format!(
                    "'{}' is {} days from matching its best streak of {}",
                    habit.name, to_beat, metrics.best_streak
                ),
                InsightLevel::Low,
                "Streaks",
            ));
        }
    }

    if metrics.current_streak == 0 && metrics.best_streak >= 7 {
        insights.push(
            Insight::new(
                &format!(
                    "'{}' once ran {} days straight but the streak is broken",
                    habit.name, metrics.best_streak
                ),
                InsightLevel::Medium,
                "Streaks",
            )
            .with_suggestion("A single completion starts a new chain"),
        );
    }

    insights
}

fn rate_insights(metrics: &HabitMetrics) -> Vec<Insight> {
    let mut insights = Vec::new();

    // Only judge rates once there is enough history to be meaningful
    if metrics.total_completions < 5 {
        return insights;
    }

    if metrics.rate_30d >= 80.0 {
        insights.push(Insight::new(
            &format!(
                "'{}' is at {:.0}% over the last 30 days - excellent consistency",
                metrics.name, metrics.rate_30d
            ),
            InsightLevel::Low,
            "Rates",
        ));
    } else if metrics.rate_30d < 30.0 {
        insights.push(
            Insight::new(
                &format!(
                    "'{}' is at only {:.0}% over the last 30 days",
                    metrics.name, metrics.rate_30d
                ),
                InsightLevel::Medium,
                "Rates",
            )
            .with_suggestion("Consider pausing it or picking a smaller daily version"),
        );
    }

    insights
}

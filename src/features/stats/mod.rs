//! Statistics and insights module.
//!
//! Provides habit analytics views over the pure core:
//! - Per-habit metric bundles (streaks, rates, consistency)
//! - Actionable insights
//! - Terminal visualization (sparkline, bars, calendar heatmap)

pub mod insights;
pub mod metrics;
pub mod visualization;

pub use insights::{generate_insights, Insight, InsightLevel};
pub use metrics::{HabitMetrics, HabitStatus, WeekProgress};
pub use visualization::{
    render_bar_chart, render_calendar_heatmap, render_progress_bar, render_sparkline,
};

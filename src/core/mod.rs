//! Core abstractions for tally.
//!
//! This module holds the pure analytics engine, date parsing, and the
//! repository trait shared across commands.

pub mod analytics;
mod datetime;
mod traits;

pub use analytics::{best_streak, completion_rate, current_streak, heatmap_window};
pub use datetime::parse_entry_date;
pub use traits::HabitRepository;

#[cfg(test)]
pub use traits::MockHabitRepository;

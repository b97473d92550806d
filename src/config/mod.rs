//! Configuration for tally.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, GeneralConfig, HabitsConfig, StatsConfig};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::habits::Frequency;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "A fast command-line habit tracker with streaks and analytics")]
#[command(long_about = "tally - A habit tracker for your terminal

Track daily and weekly habits in a local JSON store, and watch streaks,
completion rates, and calendar heatmaps build up over time.

QUICK START:
  tally add \"Morning meditation\"     Start tracking a habit
  tally done meditation              Check it off for today
  tally list                         See today's habits and streaks
  tally stats habit meditation       Streaks, rates, and heatmap

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  tally <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Habit frequency, as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrequencyArg {
    /// Track every day.
    #[default]
    Daily,
    /// Track a number of times per week.
    Weekly,
}

impl From<FrequencyArg> for Frequency {
    fn from(value: FrequencyArg) -> Self {
        match value {
            FrequencyArg::Daily => Self::Daily,
            FrequencyArg::Weekly => Self::Weekly,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start tracking a new habit
    ///
    /// Creates a habit with an empty history. Daily habits count toward
    /// streaks every day; weekly habits additionally show progress toward a
    /// times-per-week target.
    ///
    /// # Examples
    ///
    ///   tally add "Morning meditation"
    ///   tally add "Long run" --frequency weekly --target 2
    #[command(alias = "a")]
    Add(AddArgs),

    /// Mark a habit done for a day
    ///
    /// Records a completed entry for the given day (default: today).
    /// Recording the same day twice overwrites the earlier entry.
    ///
    /// # Examples
    ///
    ///   tally done meditation
    ///   tally done meditation --date yesterday
    ///   tally done meditation --date "2 days ago"
    ///   tally done meditation --date 2024-06-01
    #[command(alias = "d")]
    Done(TrackArgs),

    /// Mark a habit missed for a day
    ///
    /// Records an explicit not-completed entry. A recorded miss breaks
    /// streaks exactly like an untracked day, but makes the miss visible in
    /// the history instead of leaving a gap.
    ///
    /// # Examples
    ///
    ///   tally miss meditation
    ///   tally miss meditation --date yesterday
    Miss(TrackArgs),

    /// List habits with today's status and streaks
    ///
    /// Shows active habits with a checkbox for today, the current streak,
    /// and the 30-day completion rate. Weekly habits include this week's
    /// progress toward their target.
    ///
    /// # Examples
    ///
    ///   tally list              Active habits
    ///   tally ls --all          Include paused habits
    ///   tally list -o json      Output as JSON for scripting
    #[command(alias = "ls")]
    List(ListArgs),

    /// Pause a habit
    ///
    /// Paused habits keep their history but drop out of the daily list and
    /// insights until resumed.
    Pause {
        /// Habit name
        habit: String,
    },

    /// Resume a paused habit
    Resume {
        /// Habit name
        habit: String,
    },

    /// Delete a habit and its entire history
    ///
    /// This cannot be undone; pause the habit instead if you may want the
    /// history back later.
    #[command(alias = "rm")]
    Remove {
        /// Habit name
        habit: String,
    },

    /// Show statistics and analytics
    ///
    /// Without a subcommand, prints the summary across all habits.
    ///
    /// # Examples
    ///
    ///   tally stats                        Summary of all habits
    ///   tally stats habit meditation       One habit in detail
    ///   tally stats heatmap meditation     90-day calendar heatmap
    ///   tally stats insights               Actionable observations
    #[command(alias = "s")]
    Stats(StatsArgs),

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   tally completions bash > ~/.local/share/bash-completion/completions/tally
    ///   tally completions zsh > ~/.zfunc/_tally
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for adding a habit.
#[derive(Args)]
pub struct AddArgs {
    /// Habit name
    pub name: String,

    /// How often the habit should be done
    #[arg(short, long, value_enum, default_value = "daily")]
    pub frequency: FrequencyArg,

    /// Times per week (weekly habits only; defaults from config)
    #[arg(short, long)]
    pub target: Option<u32>,
}

/// Arguments for recording an entry.
#[derive(Args)]
pub struct TrackArgs {
    /// Habit name
    pub habit: String,

    /// Day to record: today, yesterday, 'N days ago', a weekday name,
    /// or YYYY-MM-DD (default: today)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for listing habits.
#[derive(Args)]
pub struct ListArgs {
    /// Include paused habits
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the stats command.
#[derive(Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: Option<StatsCommands>,
}

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Summary across all habits
    Summary,

    /// Detailed dashboard for one habit
    Habit {
        /// Habit name
        name: String,
    },

    /// Calendar heatmap for one habit
    Heatmap {
        /// Habit name
        name: String,

        /// Window size in days (defaults from config, normally 90)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Actionable insights across all habits
    Insights,
}

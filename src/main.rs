use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tally::cli::args::{Cli, Commands};
use tally::cli::commands;
use tally::error::TallyError;
use tally::habits::HabitStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TallyError> {
    let cli = Cli::parse();
    let store = HabitStore::new()?;
    let format = cli.output;

    let output = match cli.command {
        Commands::Add(args) => commands::add(&store, &args, format)?,
        Commands::Done(args) => commands::done(&store, &args, format)?,
        Commands::Miss(args) => commands::miss(&store, &args, format)?,
        Commands::List(args) => commands::list(&store, &args, format)?,
        Commands::Pause { habit } => commands::pause(&store, &habit, format)?,
        Commands::Resume { habit } => commands::resume(&store, &habit, format)?,
        Commands::Remove { habit } => commands::remove(&store, &habit, format)?,
        Commands::Stats(args) => commands::stats(&store, args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

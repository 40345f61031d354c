//! Project status CLI
//!
//! Replays recorded status events and prints the transition table.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use repo_status::logging;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Verbose mode logs every transition to stderr
    logging::init(cli.verbose)?;
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Replay { trace, config, json } => {
            commands::run_replay(&trace, config.as_deref(), json)
        }
        Commands::Table => commands::run_table(),
    }
}

//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect how project status events are resolved
#[derive(Parser, Debug)]
#[command(name = "repo-status")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log every transition to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Replay an event trace against a fresh tracker
    ///
    /// Examples:
    ///   repo-status replay trace.toml
    ///   repo-status replay trace.json --config status.toml --json
    Replay {
        /// Trace file (.toml, .json, .yaml)
        trace: PathBuf,

        /// Tracker configuration file
        #[arg(short, long, env = "REPO_STATUS_CONFIG")]
        config: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the transition table
    Table,
}

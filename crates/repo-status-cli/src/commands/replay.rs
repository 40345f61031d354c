//! Replay command implementation

use std::path::Path;

use colored::Colorize;
use repo_status::{EventTrace, ProjectState, StatusConfig, TraceStep};
use serde::Serialize;

use crate::error::Result;

/// JSON report for a replayed trace
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub name: Option<String>,
    pub final_state: ProjectState,
    pub dirty: bool,
    pub up_to_date: bool,
    pub steps: Vec<StepReport>,
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    #[serde(flatten)]
    pub step: TraceStep,
    pub dropped: bool,
}

/// Run the replay command
pub fn run_replay(trace_path: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let trace = EventTrace::load(trace_path)?;
    let report = replay(&trace, config_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(trace_path, &report);
    Ok(())
}

/// Replay `trace` against a tracker built from `config_path` or defaults.
///
/// The trace name is used as the debug name unless the config sets one.
pub fn replay(trace: &EventTrace, config_path: Option<&Path>) -> Result<ReplayReport> {
    let mut config = match config_path {
        Some(path) => StatusConfig::load(path)?,
        None => StatusConfig::default(),
    };
    if config.name.is_none() {
        config.name = trace.name.clone();
    }

    let status = config.build();
    tracing::debug!(events = trace.events.len(), "Replaying trace");
    let steps = trace.replay(&status);
    let final_state = status.state();

    Ok(ReplayReport {
        name: config.name,
        final_state,
        dirty: final_state.is_dirty(),
        up_to_date: final_state.is_up_to_date(),
        steps: steps
            .into_iter()
            .map(|step| StepReport {
                dropped: step.was_dropped(),
                step,
            })
            .collect(),
    })
}

fn print_report(trace_path: &Path, report: &ReplayReport) {
    println!("{}", "Status Replay".bold());
    println!();
    println!("{}:   {}", "Trace".dimmed(), trace_path.display());
    if let Some(name) = &report.name {
        println!("{}:    {}", "Name".dimmed(), name.cyan());
    }
    println!();

    if report.steps.is_empty() {
        println!("  {}", "No events".dimmed());
    }
    for (i, entry) in report.steps.iter().enumerate() {
        let step = &entry.step;
        let marker = if entry.dropped {
            "stale".yellow()
        } else {
            "applied".green()
        };
        println!(
            "  {:>3}. {:<16} {} -> {} ({})",
            i + 1,
            step.event.to_string(),
            step.before,
            step.after,
            marker
        );
    }
    println!();

    let state = report.final_state.to_string();
    let state = if report.dirty {
        state.red().bold()
    } else if report.up_to_date {
        state.green().bold()
    } else {
        state.yellow().bold()
    };
    println!("{}: {}", "Final".bold(), state);
}

//! Table command implementation

use colored::Colorize;
use repo_status::{EventKind, StampPolicy, StateKind, transition};

use crate::error::Result;

/// Run the table command
pub fn run_table() -> Result<()> {
    println!("{}", "Transition Table".bold());
    println!();

    print!("  {:<14}", "state \\ event".dimmed());
    for event in EventKind::ALL {
        print!("{:<26}", event.as_str().bold());
    }
    println!();

    for state in StateKind::ALL {
        print!("  {:<14}", state.as_str().cyan());
        for event in EventKind::ALL {
            print!("{:<26}", cell_label(state, event));
        }
        println!();
    }

    println!();
    println!(
        "  {} fires only for a strictly later stamp; {} always fires and keeps the later stamp",
        StampPolicy::IfFuture.as_str().yellow(),
        StampPolicy::WithFuture.as_str().green()
    );
    Ok(())
}

fn cell_label(state: StateKind, event: EventKind) -> String {
    let (policy, target) = transition::cell(state, event);
    format!("{} ({})", target, policy.as_str())
}

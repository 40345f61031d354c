//! Command implementations for repo-status-cli

pub mod replay;
pub mod table;

pub use replay::run_replay;
pub use table::run_table;

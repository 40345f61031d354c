//! Error types for repo-status-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from repo-status
    #[error(transparent)]
    Status(#[from] repo_status::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

//! Error types for repo-status
//!
//! Status tracking itself cannot fail; these cover loading configuration and
//! event traces from disk.

use std::path::PathBuf;

/// Result type for repo-status operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading status configuration or traces
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} file at {path}: {message}")]
    Parse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Failed to parse {format} input: {message}")]
    ParseInput { format: String, message: String },

    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_displays_path() {
        let err = Error::io(
            "/tmp/status.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let display = err.to_string();
        assert!(display.contains("/tmp/status.toml"), "got: {}", display);
        assert!(display.contains("missing"), "got: {}", display);
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = Error::UnsupportedFormat {
            extension: "ini".into(),
        };
        assert_eq!(err.to_string(), "Unsupported config format: ini");
    }
}

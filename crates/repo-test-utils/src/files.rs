//! Temporary config and trace files.

use std::fs;
use std::path::{Path, PathBuf};

use repo_status::{EventTrace, ProjectEvent, StatusConfig};
use tempfile::TempDir;

/// A temporary directory holding status fixtures.
///
/// The directory is removed when the value is dropped.
pub struct Fixtures {
    temp_dir: TempDir,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw `content` to `name` and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Fixtures::write: failed to write {}: {e}", path.display()));
        path
    }

    /// Write `events` as a TOML trace file.
    pub fn write_trace(&self, name: &str, trace_name: Option<&str>, events: &[ProjectEvent]) -> PathBuf {
        let trace = EventTrace {
            name: trace_name.map(str::to_owned),
            events: events.to_vec(),
        };
        let content = toml::to_string(&trace).expect("Fixtures::write_trace: serialize failed");
        self.write(name, &content)
    }

    /// Write `config` as a TOML config file.
    pub fn write_config(&self, name: &str, config: &StatusConfig) -> PathBuf {
        let content = toml::to_string(config).expect("Fixtures::write_config: serialize failed");
        self.write(name, &content)
    }
}

//! Tracker configuration and format-agnostic file loading

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::observer::NoopObserver;
use crate::state::{ProjectState, Stamp};
use crate::tracker::ProjectStatus;
use crate::{Error, Result};

/// Serialization format, detected from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Detect the format from a file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Toml => "TOML",
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }

    /// Deserialize `content` in this format.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        self.parse_raw(content).map_err(|message| Error::ParseInput {
            format: self.name().into(),
            message,
        })
    }

    fn parse_raw<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Read and deserialize a file, picking the format from its extension.
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    format.parse_raw(&content).map_err(|message| Error::Parse {
        path: path.to_path_buf(),
        format: format.name().into(),
        message,
    })
}

/// Settings for building a [`ProjectStatus`].
///
/// ```toml
/// name = "workspace"
/// trace_transitions = true
/// initial_stamp = -1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Label prefixed to diagnostic output
    pub name: Option<String>,
    /// Log every transition through `tracing`
    pub trace_transitions: bool,
    /// Stamp of the initial synchronized state
    pub initial_stamp: Stamp,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            name: None,
            trace_transitions: true,
            initial_stamp: ProjectState::INITIAL.stamp(),
        }
    }
}

impl StatusConfig {
    /// Load from a `.toml`, `.json`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_file(path.as_ref())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Format::Toml.parse(content)
    }

    /// Build a fresh tracker from these settings.
    pub fn build(&self) -> ProjectStatus {
        let status = ProjectStatus::starting_at(
            self.name.clone(),
            ProjectState::Synchronized(self.initial_stamp),
        );
        if self.trace_transitions {
            status
        } else {
            status.with_observer(Arc::new(NoopObserver))
        }
    }
}

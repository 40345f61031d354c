//! Recorded event traces
//!
//! A trace is an ordered list of events, typically captured from a session
//! and replayed to see how the tracker resolved them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{Format, load_file};
use crate::state::{ProjectEvent, ProjectState};
use crate::tracker::ProjectStatus;
use crate::transition::{StampPolicy, policy_for};
use crate::Result;

/// An ordered sequence of events.
///
/// ```toml
/// name = "session"
///
/// [[events]]
/// kind = "invalidate"
/// stamp = 5
///
/// [[events]]
/// kind = "synchronize"
/// stamp = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTrace {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub events: Vec<ProjectEvent>,
}

impl EventTrace {
    pub fn new(events: Vec<ProjectEvent>) -> Self {
        Self { name: None, events }
    }

    /// Load from a `.toml`, `.json`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_file(path.as_ref())
    }

    pub fn parse(format: Format, content: &str) -> Result<Self> {
        format.parse(content)
    }

    /// Apply every event in order to `status`.
    pub fn replay(&self, status: &ProjectStatus) -> Vec<TraceStep> {
        self.events
            .iter()
            .map(|&event| {
                let before = status.state();
                let after = status.update(event);
                TraceStep {
                    before,
                    event,
                    after,
                }
            })
            .collect()
    }
}

/// One replayed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub before: ProjectState,
    pub event: ProjectEvent,
    pub after: ProjectState,
}

impl TraceStep {
    /// True when the event was discarded as stale.
    ///
    /// Only meaningful for single-threaded replay, where `before` is the
    /// state the event was actually applied to.
    pub fn was_dropped(&self) -> bool {
        let policy = policy_for(self.before.kind(), self.event.kind());
        policy == StampPolicy::IfFuture && self.event.stamp() <= self.before.stamp()
    }
}

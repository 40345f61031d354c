//! Observer that records every transition a tracker reports.

use std::sync::Mutex;

use repo_status::{ProjectEvent, ProjectState, StatusObserver};

/// One recorded `on_transition` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub name: Option<String>,
    pub event: ProjectEvent,
    pub after: ProjectState,
}

/// Captures transitions in the order the observer was called.
///
/// Under concurrency the call order can differ from the order in which
/// updates were linearized; use [`RecordingObserver::count`] there.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use repo_status::ProjectStatus;
/// use repo_test_utils::observer::RecordingObserver;
///
/// let recorder = Arc::new(RecordingObserver::new());
/// let status = ProjectStatus::new().with_observer(recorder.clone());
/// status.mark_modified(1);
/// assert_eq!(recorder.count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events_seen: Mutex<Vec<(ProjectState, ProjectEvent)>>,
    transitions: Mutex<Vec<Recorded>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions recorded so far.
    pub fn transitions(&self) -> Vec<Recorded> {
        self.transitions.lock().unwrap().clone()
    }

    /// `(before, event)` pairs reported ahead of each update.
    pub fn events_seen(&self) -> Vec<(ProjectState, ProjectEvent)> {
        self.events_seen.lock().unwrap().clone()
    }

    /// Number of completed updates.
    pub fn count(&self) -> usize {
        self.transitions.lock().unwrap().len()
    }

    /// States reached, in recording order.
    pub fn states(&self) -> Vec<ProjectState> {
        self.transitions().into_iter().map(|r| r.after).collect()
    }
}

impl StatusObserver for RecordingObserver {
    fn on_event(&self, _name: Option<&str>, before: ProjectState, event: ProjectEvent) {
        self.events_seen.lock().unwrap().push((before, event));
    }

    fn on_transition(&self, name: Option<&str>, event: ProjectEvent, after: ProjectState) {
        self.transitions.lock().unwrap().push(Recorded {
            name: name.map(str::to_owned),
            event,
            after,
        });
    }
}

//! Project status tracker updated by compare-and-swap
//!
//! The state cell is a `crossbeam` `AtomicCell`. A 16-byte state has no
//! native atomic, so crossbeam guards the swap with a striped seqlock; the
//! lock is held only for the swap, never while the next state is computed.

use std::fmt;
use std::sync::Arc;

use crossbeam::atomic::AtomicCell;

use crate::observer::{StatusObserver, TracingObserver};
use crate::state::{ProjectEvent, ProjectState, Stamp};
use crate::transition::next;

/// Tracks whether the in-memory view of a project is still in sync with its
/// on-disk configuration.
///
/// Producers report events concurrently through the `mark_*` methods. Each
/// report is applied exactly once with a compare-and-swap retry loop, so
/// concurrent reports are linearized and none is lost. Stale reports are
/// dropped by the transition table, never by contention.
///
/// # Example
///
/// ```
/// use repo_status::{ProjectState, ProjectStatus};
///
/// let status = ProjectStatus::new();
/// status.mark_dirty(5);
/// assert!(status.is_dirty());
///
/// status.mark_synchronized(10);
/// assert!(status.is_up_to_date());
///
/// // A modification reported before the sync is stale.
/// assert_eq!(status.mark_modified(2), ProjectState::Synchronized(10));
/// ```
pub struct ProjectStatus {
    debug_name: Option<String>,
    state: AtomicCell<ProjectState>,
    observer: Arc<dyn StatusObserver>,
}

impl ProjectStatus {
    /// Create an unnamed tracker in [`ProjectState::INITIAL`].
    pub fn new() -> Self {
        Self::starting_at(None, ProjectState::INITIAL)
    }

    /// Create a tracker whose diagnostics are prefixed with `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::starting_at(Some(name.into()), ProjectState::INITIAL)
    }

    pub(crate) fn starting_at(debug_name: Option<String>, initial: ProjectState) -> Self {
        Self {
            debug_name,
            state: AtomicCell::new(initial),
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_observer(mut self, observer: Arc<dyn StatusObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn debug_name(&self) -> Option<&str> {
        self.debug_name.as_deref()
    }

    /// Current state, read atomically.
    pub fn state(&self) -> ProjectState {
        self.state.load()
    }

    pub fn is_dirty(&self) -> bool {
        self.state().is_dirty()
    }

    /// True while the project is synchronized or reverted.
    pub fn is_up_to_date(&self) -> bool {
        self.state().is_up_to_date()
    }

    /// Report an external change to the configuration.
    pub fn mark_dirty(&self, stamp: Stamp) -> ProjectState {
        self.update(ProjectEvent::Invalidate(stamp))
    }

    /// Report an edit of the in-memory model.
    pub fn mark_modified(&self, stamp: Stamp) -> ProjectState {
        self.update(ProjectEvent::Modify(stamp))
    }

    /// Report that an edit was undone.
    pub fn mark_reverted(&self, stamp: Stamp) -> ProjectState {
        self.update(ProjectEvent::Revert(stamp))
    }

    /// Report a completed synchronization.
    pub fn mark_synchronized(&self, stamp: Stamp) -> ProjectState {
        self.update(ProjectEvent::Synchronize(stamp))
    }

    /// Apply `event` and return the resulting state.
    pub fn update(&self, event: ProjectEvent) -> ProjectState {
        let name = self.debug_name();
        let mut current = self.state.load();
        self.observer.on_event(name, current, event);

        let new_state = loop {
            let candidate = next(current, event);
            match self.state.compare_exchange(current, candidate) {
                Ok(_) => break candidate,
                Err(actual) => current = actual,
            }
        };

        self.observer.on_transition(name, event, new_state);
        new_state
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStatus")
            .field("debug_name", &self.debug_name)
            .field("state", &self.state())
            .finish()
    }
}

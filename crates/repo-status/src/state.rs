//! State and event types for project status tracking
//!
//! Every state and event carries a [`Stamp`], a caller-supplied logical clock
//! value. Stamps only need to be totally ordered; they are not wall-clock time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical clock value supplied by the caller. Higher is causally later.
pub type Stamp = i64;

/// Synchronization status of a project as of a given stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "stamp", rename_all = "lowercase")]
pub enum ProjectState {
    /// On-disk configuration and in-memory model agree
    Synchronized(Stamp),
    /// On-disk configuration changed externally and is not reconciled
    Dirty(Stamp),
    /// In-memory model changed and has not been pushed
    Modified(Stamp),
    /// A modification was undone; agreement is intended but unconfirmed
    Reverted(Stamp),
}

impl ProjectState {
    /// State of a freshly created tracker: synchronized, never observed.
    pub const INITIAL: ProjectState = ProjectState::Synchronized(-1);

    /// Stamp at which this state was entered.
    pub fn stamp(&self) -> Stamp {
        match *self {
            ProjectState::Synchronized(stamp)
            | ProjectState::Dirty(stamp)
            | ProjectState::Modified(stamp)
            | ProjectState::Reverted(stamp) => stamp,
        }
    }

    pub fn kind(&self) -> StateKind {
        match self {
            ProjectState::Synchronized(_) => StateKind::Synchronized,
            ProjectState::Dirty(_) => StateKind::Dirty,
            ProjectState::Modified(_) => StateKind::Modified,
            ProjectState::Reverted(_) => StateKind::Reverted,
        }
    }

    /// Build a state of the given kind at `stamp`.
    pub fn of_kind(kind: StateKind, stamp: Stamp) -> Self {
        match kind {
            StateKind::Synchronized => ProjectState::Synchronized(stamp),
            StateKind::Dirty => ProjectState::Dirty(stamp),
            StateKind::Modified => ProjectState::Modified(stamp),
            StateKind::Reverted => ProjectState::Reverted(stamp),
        }
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self, ProjectState::Dirty(_))
    }

    /// True for `Synchronized` and `Reverted`, false for `Modified` and `Dirty`.
    pub fn is_up_to_date(&self) -> bool {
        match self {
            ProjectState::Modified(_) | ProjectState::Dirty(_) => false,
            ProjectState::Synchronized(_) | ProjectState::Reverted(_) => true,
        }
    }
}

impl Default for ProjectState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for ProjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind(), self.stamp())
    }
}

/// Something that happened to the project, reported by a producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "stamp", rename_all = "lowercase")]
pub enum ProjectEvent {
    /// A sync job finished reconciling configuration and model
    Synchronize(Stamp),
    /// An external change to the configuration was detected
    Invalidate(Stamp),
    /// The in-memory model was edited
    Modify(Stamp),
    /// An edit was undone
    Revert(Stamp),
}

impl ProjectEvent {
    pub fn stamp(&self) -> Stamp {
        match *self {
            ProjectEvent::Synchronize(stamp)
            | ProjectEvent::Invalidate(stamp)
            | ProjectEvent::Modify(stamp)
            | ProjectEvent::Revert(stamp) => stamp,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            ProjectEvent::Synchronize(_) => EventKind::Synchronize,
            ProjectEvent::Invalidate(_) => EventKind::Invalidate,
            ProjectEvent::Modify(_) => EventKind::Modify,
            ProjectEvent::Revert(_) => EventKind::Revert,
        }
    }

    /// Build an event of the given kind at `stamp`.
    pub fn of_kind(kind: EventKind, stamp: Stamp) -> Self {
        match kind {
            EventKind::Synchronize => ProjectEvent::Synchronize(stamp),
            EventKind::Invalidate => ProjectEvent::Invalidate(stamp),
            EventKind::Modify => ProjectEvent::Modify(stamp),
            EventKind::Revert => ProjectEvent::Revert(stamp),
        }
    }
}

impl fmt::Display for ProjectEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind(), self.stamp())
    }
}

/// Variant of a [`ProjectState`] without its stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateKind {
    Synchronized,
    Dirty,
    Modified,
    Reverted,
}

impl StateKind {
    pub const ALL: [StateKind; 4] = [
        StateKind::Synchronized,
        StateKind::Dirty,
        StateKind::Modified,
        StateKind::Reverted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateKind::Synchronized => "synchronized",
            StateKind::Dirty => "dirty",
            StateKind::Modified => "modified",
            StateKind::Reverted => "reverted",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant of a [`ProjectEvent`] without its stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Synchronize,
    Invalidate,
    Modify,
    Revert,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Synchronize,
        EventKind::Invalidate,
        EventKind::Modify,
        EventKind::Revert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Synchronize => "synchronize",
            EventKind::Invalidate => "invalidate",
            EventKind::Modify => "modify",
            EventKind::Revert => "revert",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

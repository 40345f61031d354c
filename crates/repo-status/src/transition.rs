//! Transition table for project status
//!
//! Each (state, event) cell names the target state and how stamps combine:
//!
//! | state \ event | synchronize          | invalidate        | modify              | revert              |
//! |---------------|----------------------|-------------------|---------------------|---------------------|
//! | synchronized  | synchronized (max)   | dirty (if-future) | modified (if-future)| reverted (if-future)|
//! | dirty         | synchronized (if-future) | dirty (max)   | dirty (max)         | dirty (max)         |
//! | modified      | synchronized (if-future) | dirty (max)   | modified (max)      | reverted (if-future)|
//! | reverted      | synchronized (if-future) | dirty (max)   | modified (if-future)| reverted (max)      |
//!
//! Only a strictly later `synchronize` can leave `dirty`.

use crate::state::{EventKind, ProjectEvent, ProjectState, Stamp, StateKind};

/// How a transition combines the event stamp with the current state stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampPolicy {
    /// Always fires; the new stamp is the later of the two.
    WithFuture,
    /// Fires only when the event is strictly later, otherwise the event is
    /// stale and the current state is kept.
    IfFuture,
}

impl StampPolicy {
    /// Move `current` to a state of kind `target` according to this policy.
    pub fn apply(self, current: ProjectState, event_stamp: Stamp, target: StateKind) -> ProjectState {
        match self {
            StampPolicy::WithFuture => {
                ProjectState::of_kind(target, event_stamp.max(current.stamp()))
            }
            StampPolicy::IfFuture => {
                if event_stamp > current.stamp() {
                    ProjectState::of_kind(target, event_stamp)
                } else {
                    current
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StampPolicy::WithFuture => "with-future",
            StampPolicy::IfFuture => "if-future",
        }
    }
}

/// Table cell for a (state, event) pair: the policy and the target kind.
pub fn cell(state: StateKind, event: EventKind) -> (StampPolicy, StateKind) {
    use EventKind as E;
    use StampPolicy::{IfFuture, WithFuture};
    use StateKind as S;

    match (state, event) {
        (S::Synchronized, E::Synchronize) => (WithFuture, S::Synchronized),
        (S::Synchronized, E::Invalidate) => (IfFuture, S::Dirty),
        (S::Synchronized, E::Modify) => (IfFuture, S::Modified),
        (S::Synchronized, E::Revert) => (IfFuture, S::Reverted),

        (S::Dirty, E::Synchronize) => (IfFuture, S::Synchronized),
        (S::Dirty, E::Invalidate) => (WithFuture, S::Dirty),
        (S::Dirty, E::Modify) => (WithFuture, S::Dirty),
        (S::Dirty, E::Revert) => (WithFuture, S::Dirty),

        (S::Modified, E::Synchronize) => (IfFuture, S::Synchronized),
        (S::Modified, E::Invalidate) => (WithFuture, S::Dirty),
        (S::Modified, E::Modify) => (WithFuture, S::Modified),
        (S::Modified, E::Revert) => (IfFuture, S::Reverted),

        (S::Reverted, E::Synchronize) => (IfFuture, S::Synchronized),
        (S::Reverted, E::Invalidate) => (WithFuture, S::Dirty),
        (S::Reverted, E::Modify) => (IfFuture, S::Modified),
        (S::Reverted, E::Revert) => (WithFuture, S::Reverted),
    }
}

/// Policy used for a (state, event) pair.
pub fn policy_for(state: StateKind, event: EventKind) -> StampPolicy {
    cell(state, event).0
}

/// Apply `event` to `current`. Pure and total.
pub fn next(current: ProjectState, event: ProjectEvent) -> ProjectState {
    let (policy, target) = cell(current.kind(), event.kind());
    policy.apply(current, event.stamp(), target)
}

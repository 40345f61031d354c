//! Diagnostic sinks for status transitions
//!
//! Observers never influence the tracker; they only see what happened.

use crate::state::{ProjectEvent, ProjectState};

/// Receives the state before and after every applied event.
///
/// `name` is the tracker's debug name, if one was configured. The `before`
/// state is a snapshot taken prior to the update and may already be
/// superseded by a concurrent event by the time the update runs.
pub trait StatusObserver: Send + Sync {
    /// Called before `event` is applied.
    fn on_event(&self, _name: Option<&str>, _before: ProjectState, _event: ProjectEvent) {}

    /// Called once `event` has been applied and `after` is the resulting state.
    fn on_transition(&self, _name: Option<&str>, _event: ProjectEvent, _after: ProjectState) {}
}

/// Logs every transition at debug level through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl StatusObserver for TracingObserver {
    fn on_event(&self, name: Option<&str>, before: ProjectState, event: ProjectEvent) {
        tracing::debug!(
            tracker = name.unwrap_or_default(),
            event = %event.kind(),
            event_stamp = event.stamp(),
            state = %before.kind(),
            state_stamp = before.stamp(),
            "{}Event {} happened at {}. Current state {} changed at {}",
            prefix(name),
            event.kind(),
            event.stamp(),
            before.kind(),
            before.stamp(),
        );
    }

    fn on_transition(&self, name: Option<&str>, event: ProjectEvent, after: ProjectState) {
        tracing::debug!(
            tracker = name.unwrap_or_default(),
            event = %event.kind(),
            event_stamp = event.stamp(),
            state = %after.kind(),
            state_stamp = after.stamp(),
            "{}State is {} at {} after event {} that happened at {}",
            prefix(name),
            after.kind(),
            after.stamp(),
            event.kind(),
            event.stamp(),
        );
    }
}

fn prefix(name: Option<&str>) -> String {
    name.map(|n| format!("{n}: ")).unwrap_or_default()
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StatusObserver for NoopObserver {}

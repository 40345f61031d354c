//! Synchronization status tracking for Repository Manager projects
//!
//! A [`ProjectStatus`] answers "is my cached view of the project's on-disk
//! configuration still valid?" without rescanning anything. File watchers,
//! edit listeners and sync jobs report events concurrently and out of order;
//! each event carries a caller-supplied [`Stamp`] and the tracker resolves
//! them into one monotonically consistent [`ProjectState`].
//!
//! - **state**: [`ProjectState`], [`ProjectEvent`] and their stamp-free kinds
//! - **transition**: the pure, total transition table ([`next`])
//! - **tracker**: [`ProjectStatus`], the compare-and-swap tracker
//! - **observer**: injectable diagnostic sinks
//! - **config**: [`StatusConfig`] and format-agnostic loading
//! - **trace**: recorded [`EventTrace`]s and replay
//!
//! # Example
//!
//! ```
//! use repo_status::{ProjectState, ProjectStatus};
//!
//! let status = ProjectStatus::named("workspace");
//! assert_eq!(status.mark_dirty(5), ProjectState::Dirty(5));
//! assert_eq!(status.mark_modified(3), ProjectState::Dirty(5));
//! assert_eq!(status.mark_synchronized(10), ProjectState::Synchronized(10));
//! assert_eq!(status.mark_modified(12), ProjectState::Modified(12));
//! assert!(!status.is_up_to_date());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod observer;
pub mod state;
pub mod trace;
pub mod tracker;
pub mod transition;

pub use config::{Format, StatusConfig};
pub use error::{Error, Result};
pub use observer::{NoopObserver, StatusObserver, TracingObserver};
pub use state::{EventKind, ProjectEvent, ProjectState, Stamp, StateKind};
pub use trace::{EventTrace, TraceStep};
pub use tracker::ProjectStatus;
pub use transition::{StampPolicy, next, policy_for};

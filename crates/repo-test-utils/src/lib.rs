//! Shared test utilities for the repository-manager workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`observer`] — [`RecordingObserver`](observer::RecordingObserver) that captures every transition
//! - [`files`] — temporary config and trace files
//! - [`serial`] — sequential reference results for concurrent runs

pub mod files;
pub mod observer;
pub mod serial;

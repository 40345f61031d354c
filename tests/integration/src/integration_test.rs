//! End-to-end integration test for status tracking
//!
//! Simulates the producers that share one tracker in practice: a file
//! watcher, an editor and an import job, each with its own stamp source.

use repo_status::{EventTrace, NoopObserver, ProjectEvent, ProjectState, ProjectStatus, StatusConfig};
use repo_test_utils::files::Fixtures;
use repo_test_utils::observer::RecordingObserver;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

/// Shared logical clock handing out increasing stamps
#[derive(Default)]
struct Clock(AtomicI64);

impl Clock {
    fn tick(&self) -> i64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

#[test]
fn test_final_sync_after_all_producers_leaves_project_up_to_date() {
    let clock = Arc::new(Clock::default());
    let recorder = Arc::new(RecordingObserver::new());
    let status = Arc::new(ProjectStatus::named("workspace").with_observer(recorder.clone()));
    let barrier = Arc::new(Barrier::new(3));

    let spawn_producer = |report: fn(&ProjectStatus, i64) -> ProjectState| {
        let clock = Arc::clone(&clock);
        let status = Arc::clone(&status);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..300 {
                report(&status, clock.tick());
            }
        })
    };

    let handles = vec![
        spawn_producer(|s, t| s.mark_dirty(t)),
        spawn_producer(|s, t| s.mark_modified(t)),
        spawn_producer(|s, t| s.mark_reverted(t)),
    ];
    for handle in handles {
        handle.join().expect("Producer should not panic");
    }

    // Once any invalidation has landed, only a later sync clears it
    assert!(status.is_dirty());
    assert!(!status.is_up_to_date());

    let stamp = clock.tick();
    assert_eq!(status.mark_synchronized(stamp), ProjectState::Synchronized(stamp));
    assert!(status.is_up_to_date());
    assert_eq!(recorder.count(), 901);
    assert!(
        recorder
            .transitions()
            .iter()
            .all(|t| t.name.as_deref() == Some("workspace"))
    );
}

#[test]
fn test_slow_sync_job_cannot_hide_newer_edit() {
    let status = ProjectStatus::new().with_observer(Arc::new(NoopObserver));
    let clock = Clock::default();

    // The import job starts and records its stamp
    let sync_started = clock.tick();
    // An edit happens while the import is running
    let edit = clock.tick();
    status.mark_modified(edit);
    // The import finishes late, reporting its start stamp
    status.mark_synchronized(sync_started);

    assert_eq!(status.state(), ProjectState::Modified(edit));
    assert!(!status.is_up_to_date());
}

#[test]
fn test_late_watcher_event_is_ignored_after_newer_sync() {
    let status = ProjectStatus::new().with_observer(Arc::new(NoopObserver));

    status.mark_synchronized(10);
    // A watcher event generated at 7 arrives after the sync at 10
    status.mark_dirty(7);

    assert!(!status.is_dirty());
    assert_eq!(status.state(), ProjectState::Synchronized(10));
}

#[test]
fn test_configured_tracker_replays_recorded_session() {
    let fixtures = Fixtures::new();
    let config_path = fixtures.write_config(
        "status.toml",
        &StatusConfig {
            name: Some("session".into()),
            trace_transitions: false,
            initial_stamp: 0,
        },
    );
    let trace_path = fixtures.write_trace(
        "trace.toml",
        None,
        &[
            ProjectEvent::Modify(1),
            ProjectEvent::Revert(2),
            ProjectEvent::Invalidate(3),
            ProjectEvent::Revert(4),
            ProjectEvent::Synchronize(5),
        ],
    );

    let config = StatusConfig::load(&config_path).unwrap();
    let trace = EventTrace::load(&trace_path).unwrap();
    let status = config.build();
    let steps = trace.replay(&status);

    let reached: Vec<ProjectState> = steps.iter().map(|s| s.after).collect();
    assert_eq!(
        reached,
        vec![
            ProjectState::Modified(1),
            ProjectState::Reverted(2),
            ProjectState::Dirty(3),
            ProjectState::Dirty(4),
            ProjectState::Synchronized(5),
        ]
    );
    assert!(steps.iter().all(|s| !s.was_dropped()));
}

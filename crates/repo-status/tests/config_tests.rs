//! Loading status configuration and event traces from disk

use pretty_assertions::assert_eq;
use repo_status::{Error, EventTrace, ProjectEvent, ProjectState, StatusConfig};
use repo_test_utils::files::Fixtures;
use repo_test_utils::observer::RecordingObserver;
use std::sync::Arc;

#[test]
fn test_load_toml_config() {
    let fixtures = Fixtures::new();
    let path = fixtures.write(
        "status.toml",
        r#"
name = "workspace"
trace_transitions = false
initial_stamp = 7
"#,
    );

    let config = StatusConfig::load(&path).unwrap();
    assert_eq!(
        config,
        StatusConfig {
            name: Some("workspace".into()),
            trace_transitions: false,
            initial_stamp: 7,
        }
    );

    let status = config.build();
    assert_eq!(status.debug_name(), Some("workspace"));
    assert_eq!(status.state(), ProjectState::Synchronized(7));
}

#[test]
fn test_load_json_and_yaml_config() {
    let fixtures = Fixtures::new();
    let json = fixtures.write("status.json", r#"{ "name": "from-json" }"#);
    let yaml = fixtures.write("status.yaml", "name: from-yaml\ninitial_stamp: 3\n");

    assert_eq!(
        StatusConfig::load(&json).unwrap().name.as_deref(),
        Some("from-json")
    );
    let config = StatusConfig::load(&yaml).unwrap();
    assert_eq!(config.name.as_deref(), Some("from-yaml"));
    assert_eq!(config.initial_stamp, 3);
    assert!(config.trace_transitions);
}

#[test]
fn test_written_config_roundtrips() {
    let fixtures = Fixtures::new();
    let config = StatusConfig {
        name: Some("roundtrip".into()),
        ..Default::default()
    };
    let path = fixtures.write_config("status.toml", &config);
    assert_eq!(StatusConfig::load(&path).unwrap(), config);
}

#[test]
fn test_missing_config_is_io_error() {
    let fixtures = Fixtures::new();
    let err = StatusConfig::load(fixtures.root().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got: {:?}", err);
}

#[test]
fn test_unsupported_extension() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("status.ini", "name = x");
    let err = StatusConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "ini"));
}

#[test]
fn test_malformed_config_reports_path_and_format() {
    let fixtures = Fixtures::new();
    let path = fixtures.write("status.json", "{ not json");
    let err = StatusConfig::load(&path).unwrap_err();

    match &err {
        Error::Parse { path: p, format, .. } => {
            assert_eq!(p, &path);
            assert_eq!(format, "JSON");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_trace_file_replays_through_configured_tracker() {
    let fixtures = Fixtures::new();
    let events = [
        ProjectEvent::Invalidate(5),
        ProjectEvent::Modify(3),
        ProjectEvent::Synchronize(10),
        ProjectEvent::Modify(2),
        ProjectEvent::Modify(12),
    ];
    let path = fixtures.write_trace("trace.toml", Some("session"), &events);

    let trace = EventTrace::load(&path).unwrap();
    assert_eq!(trace.name.as_deref(), Some("session"));
    assert_eq!(trace.events, events.to_vec());

    let recorder = Arc::new(RecordingObserver::new());
    let status = StatusConfig {
        name: trace.name.clone(),
        ..Default::default()
    }
    .build()
    .with_observer(recorder.clone());

    let steps = trace.replay(&status);
    let dropped: Vec<_> = steps.iter().map(|s| s.was_dropped()).collect();
    assert_eq!(dropped, vec![false, false, false, true, false]);
    assert_eq!(status.state(), ProjectState::Modified(12));

    let transitions = recorder.transitions();
    assert_eq!(transitions.len(), 5);
    assert!(transitions.iter().all(|t| t.name.as_deref() == Some("session")));
    assert_eq!(
        recorder.states(),
        vec![
            ProjectState::Dirty(5),
            ProjectState::Dirty(5),
            ProjectState::Synchronized(10),
            ProjectState::Synchronized(10),
            ProjectState::Modified(12),
        ]
    );
}

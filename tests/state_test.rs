use chrono::{TimeZone, Utc};
use std::fs;
use tempfile::tempdir;
use timereg_prompt::config::Config;
use timereg_prompt::error::SegmentError;
use timereg_prompt::segment::{render_segment, try_render};
use timereg_prompt::state::TrackingStatus;

const ACTIVE_WITH_BREAKS: &str = r#"{
  "active": {
    "issue": 512,
    "repo": "gitea-timereg",
    "started_at": "2026-10-19T07:00:00Z",
    "breaks": [
      {"start": "2026-10-19T09:00:00Z", "end": "2026-10-19T09:30:00Z"},
      {"start": "2026-10-19T11:45:00+02:00", "end": "2026-10-19T12:00:00+02:00"}
    ]
  },
  "paused": [
    {"issue": 9, "repo": "gitea-docs", "started_at": "2026-10-18T07:00:00Z"}
  ]
}"#;

#[test]
fn test_load_written_state() {
    let dir = tempdir().unwrap();
    let state_path = dir.path().join("tracking.json");
    fs::write(&state_path, ACTIVE_WITH_BREAKS).unwrap();

    let loaded = TrackingStatus::load(&state_path).unwrap();
    let active = loaded.active.unwrap();
    assert_eq!(active.issue, 512);
    assert_eq!(active.breaks.len(), 2);
    assert!(active.pending.is_none());
    assert_eq!(loaded.paused[0]["issue"], 9);
}

#[test]
fn test_segment_nets_out_breaks() {
    let dir = tempdir().unwrap();
    let state_path = dir.path().join("tracking.json");
    fs::write(&state_path, ACTIVE_WITH_BREAKS).unwrap();

    // 5h wall clock, 30m + 15m of breaks
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
    let segments = render_segment(&state_path, &Config::default(), now);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].content, "#512 timereg | 4h15m");
    assert!(!segments[0].idle);
}

#[test]
fn test_idle_marker_switches_background() {
    let dir = tempdir().unwrap();
    let state_path = dir.path().join("tracking.json");
    fs::write(
        &state_path,
        r#"{"active": {"issue": 1, "repo": "infra",
            "started_at": "2026-10-19T07:00:00Z",
            "pending_break": {"idle_since": "2026-10-19T07:40:00Z"}}}"#,
    )
    .unwrap();

    let config = Config::default();
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
    let segments = render_segment(&state_path, &config, now);

    assert_eq!(segments[0].content, "#1 infra | 1h00m");
    assert_eq!(segments[0].background, config.theme.idle_background);
}

#[test]
fn test_no_active_entry_renders_nothing() {
    let dir = tempdir().unwrap();
    let state_path = dir.path().join("tracking.json");
    fs::write(
        &state_path,
        r#"{"active": null, "paused": [
            {"issue": 9, "repo": "docs", "started_at": "2026-10-18T07:00:00Z"}]}"#,
    )
    .unwrap();

    assert!(render_segment(&state_path, &Config::default(), Utc::now()).is_empty());
    assert!(matches!(
        try_render(&state_path, &Config::default(), Utc::now()),
        Err(SegmentError::NoActive)
    ));
}

#[test]
fn test_truncated_file_renders_nothing() {
    let dir = tempdir().unwrap();
    let state_path = dir.path().join("tracking.json");
    fs::write(&state_path, &ACTIVE_WITH_BREAKS[..40]).unwrap();

    assert!(render_segment(&state_path, &Config::default(), Utc::now()).is_empty());
}

#[test]
fn test_active_without_start_renders_nothing() {
    let dir = tempdir().unwrap();
    let state_path = dir.path().join("tracking.json");
    fs::write(&state_path, r#"{"active": {"issue": 1, "repo": "infra"}}"#).unwrap();

    assert!(render_segment(&state_path, &Config::default(), Utc::now()).is_empty());
}

fn render_at_ten(json: &str) -> Vec<timereg_prompt::segment::Segment> {
    let dir = tempdir().unwrap();
    let state_path = dir.path().join("tracking.json");
    fs::write(&state_path, json).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap();
    render_segment(&state_path, &Config::default(), now)
}

#[test]
fn test_writer_snapshot_with_null_lists() {
    let segments = render_at_ten(
        r#"{"active":{"issue":4,"repo":"gitea-api","started_at":"2026-10-19T09:15:00Z",
            "breaks":null},"paused":null}"#,
    );
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].content, "#4 api | 45m");
}

#[test]
fn test_paused_entry_with_missing_fields() {
    let segments = render_at_ten(
        r#"{"active":{"issue":4,"repo":"api","started_at":"2026-10-19T09:15:00Z"},
            "paused":[{"issue":2,"repo":"x"}]}"#,
    );
    assert_eq!(segments.len(), 1);
}

#[test]
fn test_empty_pending_break_still_idle() {
    let config = Config::default();
    let segments = render_at_ten(
        r#"{"active":{"issue":4,"repo":"api","started_at":"2026-10-19T09:15:00Z",
            "pending_break":{}},"paused":null}"#,
    );
    assert_eq!(segments.len(), 1);
    assert!(segments[0].idle);
    assert_eq!(segments[0].background, config.theme.idle_background);
}

#[test]
fn test_negative_issue_renders() {
    let segments = render_at_ten(
        r#"{"active":{"issue":-1,"repo":"api","started_at":"2026-10-19T09:15:00Z"},
            "paused":null}"#,
    );
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].content, "#-1 api | 45m");
}

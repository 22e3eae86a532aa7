use crate::state::{Break, TrackingState};
use chrono::{DateTime, TimeDelta, Utc};

/// Nanosecond precision, falling back to milliseconds for spans past
/// roughly 292 years.
fn as_minutes(delta: TimeDelta) -> f64 {
    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 60_000_000_000.0,
        None => delta.num_milliseconds() as f64 / 60_000.0,
    }
}

/// Total time spent in recorded breaks, in fractional minutes.
pub fn break_minutes(breaks: &[Break]) -> f64 {
    breaks.iter().map(|b| as_minutes(b.end - b.start)).sum()
}

/// Minutes worked since `started_at`, net of breaks, rounded to the
/// nearest minute. May be negative if the clock or the breaks disagree.
pub fn elapsed_minutes(state: &TrackingState, now: DateTime<Utc>) -> i64 {
    let wall = as_minutes(now - state.started_at);
    (wall - break_minutes(&state.breaks)).round() as i64
}

/// `1h05m` from one hour up, `42m` below. Negative input renders as `0m`.
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h{:02}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

use crate::config::Config;
use crate::duration::{elapsed_minutes, format_minutes};
use crate::error::SegmentError;
use crate::state::{TrackingState, TrackingStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

pub const SEGMENT_NAME: &str = "timereg";

/// A coloured unit of prompt text. Colours are xterm-256 indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub name: &'static str,
    pub content: String,
    pub foreground: u8,
    pub background: u8,
    pub idle: bool,
}

/// Build the segment for an active entry.
pub fn segment_for(state: &TrackingState, config: &Config, now: DateTime<Utc>) -> Segment {
    let elapsed = format_minutes(elapsed_minutes(state, now));
    let content = format!(
        "#{} {} | {}",
        state.issue,
        config.display_repo(&state.repo),
        elapsed
    );

    let theme = &config.theme;
    let idle = state.is_idle();
    let background = if idle {
        theme.idle_background
    } else {
        theme.background
    };

    Segment {
        name: SEGMENT_NAME,
        content,
        foreground: theme.foreground,
        background,
        idle,
    }
}

/// Read the state file and build its segment, keeping the reason when
/// there is nothing to show.
pub fn try_render(path: &Path, config: &Config, now: DateTime<Utc>) -> Result<Segment, SegmentError> {
    let active = TrackingStatus::load(path)?.into_active()?;
    Ok(segment_for(&active, config, now))
}

/// Segments to show for the state file at `path`: one when a task is being
/// tracked, none on any failure.
pub fn render_segment(path: &Path, config: &Config, now: DateTime<Utc>) -> Vec<Segment> {
    match try_render(path, config, now) {
        Ok(segment) => vec![segment],
        Err(err) => {
            tracing::debug!(error = %err, "timereg segment skipped");
            Vec::new()
        }
    }
}

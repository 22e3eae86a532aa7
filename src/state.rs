use crate::error::SegmentError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Snapshot of the tracker, as written by `timereg`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct TrackingStatus {
    pub active: Option<TrackingState>,
    /// Kept as raw JSON: paused entries are never rendered, so their shape
    /// must not decide whether the active one is.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub paused: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrackingState {
    pub issue: i64,
    pub repo: String,
    pub started_at: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub breaks: Vec<Break>,
    #[serde(rename = "pending_break", default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<PendingBreak>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Break {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Idle period the tracker noticed but the user has not confirmed yet.
/// Only its presence matters for rendering.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct PendingBreak {
    #[serde(default)]
    pub idle_since: Option<DateTime<Utc>>,
}

/// The writer emits `null` for an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl TrackingState {
    pub fn is_idle(&self) -> bool {
        self.pending.is_some()
    }
}

impl TrackingStatus {
    pub fn from_slice(path: &Path, bytes: &[u8]) -> Result<Self, SegmentError> {
        serde_json::from_slice(bytes).map_err(|source| SegmentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse the state file. Unlike the writer, a missing or empty
    /// file is an error here: the caller decides to render nothing.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SegmentError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| SegmentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(path, &bytes)
    }

    /// The active entry, or `NoActive` when nothing is being tracked.
    pub fn into_active(self) -> Result<TrackingState, SegmentError> {
        self.active.ok_or(SegmentError::NoActive)
    }
}

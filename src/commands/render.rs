use crate::OutputFormat;
use crate::config::Config;
use crate::output;
use crate::platform::resolve_state_path;
use crate::segment::render_segment;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;

/// Produce the prompt text for the current state. Never fails on a missing
/// or broken state file: those render as an empty string.
pub fn render_to_string(
    config: &Config,
    state_file: Option<&Path>,
    format: OutputFormat,
    now: DateTime<Utc>,
) -> Result<String> {
    let path = match resolve_state_path(state_file, config.state_file.as_deref()) {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!(error = %err, "no state file location");
            return Ok(String::new());
        }
    };

    let segments = render_segment(&path, config, now);
    output::render(&segments, format)
}

pub fn render(
    config: &Config,
    state_file: Option<&Path>,
    format: OutputFormat,
    now: Option<DateTime<Utc>>,
) -> Result<()> {
    let text = render_to_string(config, state_file, format, now.unwrap_or_else(Utc::now))?;
    if text.is_empty() {
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

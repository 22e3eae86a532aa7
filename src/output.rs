//! Shell-ready renderings of segments.

use crate::OutputFormat;
use crate::segment::Segment;
use anyhow::{Context, Result};

const RESET: &str = "\x1b[0m";

/// Wrap a non-printing escape so the shell's line editor ignores its width.
fn invisible(format: OutputFormat, escape: &str) -> String {
    match format {
        OutputFormat::Bash => format!("\\[{}\\]", escape),
        OutputFormat::Zsh => format!("%{{{}%}}", escape),
        _ => escape.to_string(),
    }
}

fn colored(segment: &Segment, format: OutputFormat) -> String {
    let start = format!(
        "\x1b[38;5;{}m\x1b[48;5;{}m",
        segment.foreground, segment.background
    );
    format!(
        "{} {} {}",
        invisible(format, &start),
        segment.content,
        invisible(format, RESET)
    )
}

/// Render `segments` in `format`. No segments means an empty string, with
/// no trailing newline, so the prompt stays untouched.
pub fn render(segments: &[Segment], format: OutputFormat) -> Result<String> {
    if segments.is_empty() {
        return Ok(String::new());
    }

    let out: String = match format {
        OutputFormat::Text => segments
            .iter()
            .map(|s| format!("{}\n", s.content))
            .collect(),
        OutputFormat::Json => {
            let json =
                serde_json::to_string(segments).context("Failed to serialize segments")?;
            format!("{}\n", json)
        }
        OutputFormat::Ansi | OutputFormat::Bash | OutputFormat::Zsh => {
            segments.iter().map(|s| colored(s, format)).collect()
        }
    };

    Ok(out)
}

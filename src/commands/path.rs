use crate::config::Config;
use crate::platform::resolve_state_path;
use anyhow::Result;
use std::path::Path;

/// Print the state file the segment would read.
pub fn path(config: &Config, state_file: Option<&Path>) -> Result<()> {
    let path = resolve_state_path(state_file, config.state_file.as_deref())?;
    println!("{}", path.display());
    Ok(())
}

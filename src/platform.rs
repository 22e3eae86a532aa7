//! Location of the files this crate reads.
//!
//! The tracker writes its state under the XDG state directory; our own
//! (optional) config lives under the XDG config directory.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const STATE_APP_DIR: &str = "timereg";
const STATE_FILE: &str = "tracking.json";
const CONFIG_APP_DIR: &str = "timereg-prompt";
const CONFIG_FILE: &str = "config.toml";

/// Non-empty value of an environment variable.
fn env_dir(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Resolve the tracker's state file from an `XDG_STATE_HOME` value and a
/// home directory.
///
/// Priority order:
/// 1. `$XDG_STATE_HOME/timereg/tracking.json` when set and non-empty
/// 2. `~/.local/state/timereg/tracking.json`
pub fn state_path_from(xdg_state_home: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = xdg_state_home.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir).join(STATE_APP_DIR).join(STATE_FILE));
    }
    let home = home.context("Could not find home directory")?;
    Ok(home
        .join(".local")
        .join("state")
        .join(STATE_APP_DIR)
        .join(STATE_FILE))
}

/// Default state file for the current environment.
pub fn default_state_path() -> Result<PathBuf> {
    state_path_from(std::env::var_os("XDG_STATE_HOME"), home::home_dir())
}

/// State file honouring overrides: the explicit flag first, then the
/// config value, then the environment.
pub fn resolve_state_path(flag: Option<&Path>, configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag.or(configured) {
        return Ok(path.to_path_buf());
    }
    default_state_path()
}

/// Default location of `config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    let base = env_dir("XDG_CONFIG_HOME")
        .or_else(dirs::config_dir)
        .context("Could not find config directory")?;
    Ok(base.join(CONFIG_APP_DIR).join(CONFIG_FILE))
}

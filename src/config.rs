use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Overrides the XDG location of the tracker's state file
    pub state_file: Option<PathBuf>,
    /// Prefixes removed from the repository name before display
    #[serde(default = "default_strip_repo_prefixes")]
    pub strip_repo_prefixes: Vec<String>,
    #[serde(default)]
    pub theme: ThemeConfig,
}

fn default_strip_repo_prefixes() -> Vec<String> {
    vec!["gitea-".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: None,
            strip_repo_prefixes: default_strip_repo_prefixes(),
            theme: ThemeConfig::default(),
        }
    }
}

/// xterm-256 colour indices for the segment.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ThemeConfig {
    #[serde(default = "default_foreground")]
    pub foreground: u8,
    #[serde(default = "default_background")]
    pub background: u8,
    #[serde(default = "default_idle_background")]
    pub idle_background: u8,
}

fn default_foreground() -> u8 {
    15
}

fn default_background() -> u8 {
    30
}

fn default_idle_background() -> u8 {
    166
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            foreground: default_foreground(),
            background: default_background(),
            idle_background: default_idle_background(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.state_file {
            if path.as_os_str().is_empty() {
                anyhow::bail!("state_file must not be empty");
            }
        }

        if self.strip_repo_prefixes.iter().any(|p| p.is_empty()) {
            anyhow::bail!("strip_repo_prefixes must not contain an empty prefix");
        }

        Ok(())
    }

    /// Repository name with the first matching configured prefix removed.
    pub fn display_repo<'a>(&self, repo: &'a str) -> &'a str {
        self.strip_repo_prefixes
            .iter()
            .find_map(|prefix| repo.strip_prefix(prefix.as_str()))
            .unwrap_or(repo)
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

/// Load `path`, or the default location when `None`. A missing file yields
/// the default config.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => crate::platform::default_config_path()?,
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    load_from_path(&path).with_context(|| format!("Invalid config at {}", path.display()))
}

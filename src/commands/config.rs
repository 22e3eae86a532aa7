use crate::config::Config;
use anyhow::{Context, Result};

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

/// Look up a dotted key, e.g. `theme.background`.
pub fn lookup(key: &str, config: &Config) -> Result<String> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", key))?;
    }

    Ok(match current {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        v => v.to_string(),
    })
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    println!("{}", lookup(key, config)?);
    Ok(())
}

//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config` flag
//! 2. `$QUADRA_CONFIG` environment variable
//! 3. `~/.config/quadra/config.toml`
//! 4. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub counter: CounterConfig,
}

/// Output formatting settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit JSON instead of plain text, without needing `--json`.
    pub json: bool,
}

/// Counter store settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Starting value for new counter runs.
    pub initial: i64,
}

/// Load config from disk. Returns defaults if no config file exists.
/// An explicit `--config` path that does not exist is an error.
pub fn load_config(override_path: Option<&Path>) -> Result<Config> {
    let path = match override_path {
        Some(p) => Some(p.to_path_buf()),
        None => config_path(),
    };

    if let Some(p) = &path {
        if p.exists() {
            let content =
                std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            let config: Config =
                toml::from_str(&content).with_context(|| format!("parsing {}", p.display()))?;
            return Ok(config);
        }
        if override_path.is_some() {
            bail!("config file not found: {}", p.display());
        }
    }

    Ok(Config::default())
}

/// Resolve the config file path.
fn config_path() -> Option<PathBuf> {
    // 1. Environment variable
    if let Ok(p) = std::env::var("QUADRA_CONFIG") {
        return Some(PathBuf::from(p));
    }

    // 2. ~/.config/quadra/config.toml
    if let Some(home) = dirs_home() {
        let p = home.join(".config").join("quadra").join("config.toml");
        return Some(p);
    }

    None
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Show the active config path (for `quadra config`).
pub fn show_config_path(override_path: Option<&Path>) -> String {
    let path = match override_path {
        Some(p) => Some(p.to_path_buf()),
        None => config_path(),
    };
    match path {
        Some(p) if p.exists() => format!("{} (loaded)", p.display()),
        Some(p) => format!("{} (not found, using defaults)", p.display()),
        None => "no config path resolved (using defaults)".into(),
    }
}

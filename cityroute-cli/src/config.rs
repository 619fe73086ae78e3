use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Settings read from `cityroute.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Edge list in `CityA-CityB,distance` format
    pub map_path: PathBuf,
    /// Traveler state as JSON
    pub traveler_path: PathBuf,
    /// Append-only action log
    pub journal_path: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("cities.txt"),
            traveler_path: PathBuf::from("traveler.json"),
            journal_path: PathBuf::from("journal.log"),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Read the config file, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

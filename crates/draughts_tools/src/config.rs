//! Playout configuration, read from TOML

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

/// Settings for a batch of random playouts. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayoutConfig {
    /// Number of games to play
    pub games: u32,
    /// Seed of the first game; game `i` uses `seed + i`
    pub seed: u64,
    /// Plies after which a game is recorded as unfinished
    pub max_plies: u32,
    /// Where to write the JSON report, if anywhere
    pub report: Option<PathBuf>,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 1,
            max_plies: 300,
            report: None,
        }
    }
}

impl PlayoutConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid playout config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

//! Configuration file support for the PheroMQ CLI.
//!
//! A TOML file can supply run defaults; command-line flags take
//! precedence over file values, which take precedence over built-ins.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// PheroMQ run configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub field: FieldSection,
    #[serde(default)]
    pub run: RunSection,
    #[serde(default)]
    pub spawn: SpawnSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSection {
    #[serde(default = "default_evap")]
    pub evap: f64,
    #[serde(default = "default_diff")]
    pub diff: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSection {
    #[serde(default = "default_rounds")]
    pub rounds: u64,
    #[serde(default = "default_target")]
    pub target_kw: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnSection {
    #[serde(default = "default_base_load")]
    pub base_load_kw: (f64, f64),
    #[serde(default = "default_max_shed")]
    pub max_shed_kw: (f64, f64),
}

// Default value functions
fn default_evap() -> f64 {
    0.82
}
fn default_diff() -> f64 {
    0.35
}
fn default_rounds() -> u64 {
    20
}
fn default_target() -> f64 {
    20.0
}
fn default_seed() -> u64 {
    42
}
fn default_base_load() -> (f64, f64) {
    (8.0, 15.0)
}
fn default_max_shed() -> (f64, f64) {
    (3.0, 8.0)
}

impl Default for FieldSection {
    fn default() -> Self {
        Self {
            evap: default_evap(),
            diff: default_diff(),
        }
    }
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            target_kw: default_target(),
            seed: default_seed(),
        }
    }
}

impl Default for SpawnSection {
    fn default() -> Self {
        Self {
            base_load_kw: default_base_load(),
            max_shed_kw: default_max_shed(),
        }
    }
}

impl Config {
    /// Load a config file, or the built-in defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(Path::new(path))
                    .with_context(|| format!("Failed to read config file: {}", path))?;
                toml::from_str(&text)
                    .with_context(|| format!("Failed to parse config file: {}", path))
            }
            None => Ok(Self::default()),
        }
    }
}

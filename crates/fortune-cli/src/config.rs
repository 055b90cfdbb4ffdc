//! CLI configuration
//!
//! Settings resolve with three layers:
//! 1. Command-line flags
//! 2. Config file (`--config PATH`, else `fortune.toml` in the working directory)
//! 3. Built-in defaults
//!
//! Analysis thresholds are compiled into fortune-core and are not configurable.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::cli::{HistoryArgs, OutputFormat};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "fortune.toml";

/// Contents of the config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default output format
    pub format: OutputFormat,
    /// Always sort readings oldest-first
    pub sort: bool,
    /// Fixed reference time, for reproducible reports
    pub now: Option<String>,
}

/// Effective settings for one command run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub format: OutputFormat,
    pub sort: bool,
    pub now: DateTime<Utc>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config file")
    }

    /// Load the explicit config file, or the default one if it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::read(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Merge command-line options over this config
    pub fn resolve(&self, args: &HistoryArgs, now: Option<&str>) -> Result<RunSettings> {
        let now = match now.or(self.now.as_deref()) {
            Some(value) => fortune_core::parse_timestamp(value)
                .with_context(|| format!("Invalid reference time: {}", value))?,
            None => Utc::now(),
        };

        Ok(RunSettings {
            format: args.format.unwrap_or(self.format),
            sort: args.sort || self.sort,
            now,
        })
    }
}

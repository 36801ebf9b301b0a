//! PlanTrack configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Local config file name, checked in the working directory
pub const LOCAL_CONFIG: &str = "plantrack.yml";

/// Main PlanTrack configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,

    /// Print the whole plan after every advance
    #[serde(rename = "show-plan")]
    pub show_plan: bool,

    /// Result passed to steps that were not given one on the command line
    #[serde(rename = "default-result")]
    pub default_result: Option<String>,
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// Explicit path, then `./plantrack.yml`, then
    /// `~/.config/plantrack/plantrack.yml`, then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        debug!(?config_path, "Config::load: called");
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for candidate in Self::default_paths() {
            if candidate.exists() {
                match Self::load_from_file(&candidate) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", candidate.display(), e);
                    }
                }
            }
        }

        debug!("Config::load: no config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, ignoring any error
    ///
    /// Used before logging is initialized, so failures are silent.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        match config_path {
            Some(path) => Self::load_from_file(path).ok()?.log_level,
            None => Self::default_paths()
                .into_iter()
                .filter(|p| p.exists())
                .find_map(|p| Self::load_from_file(&p).ok())
                .and_then(|c| c.log_level),
        }
    }

    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("plantrack").join("plantrack.yml"));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        debug!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

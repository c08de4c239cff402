use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{MatsideError, Result};

pub const DEFAULT_LOG_FILE: &str = "matside.log";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpsConfig {
    pub log_level: String,
    /// Appends logs here instead of stderr; the console owns the terminal.
    pub log_file: Option<String>,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_file: Some(DEFAULT_LOG_FILE.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Wall-clock interval between match clock ticks.
    pub tick_interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub capacity: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub max_log_rows: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { max_log_rows: 120 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatsideConfig {
    #[serde(default)]
    pub ops: OpsConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl MatsideConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|err| {
            MatsideError::Configuration(format!(
                "unable to read config file {}: {err}",
                path_ref.display()
            ))
        })?;
        toml::from_str(&contents).map_err(|err| {
            MatsideError::Configuration(format!(
                "failed to parse config file {}: {err}",
                path_ref.display()
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.clock.tick_interval_ms == 0 {
            return Err(MatsideError::Configuration(
                "clock.tick_interval_ms must be greater than zero".into(),
            ));
        }
        if self.feed.capacity == 0 {
            return Err(MatsideError::Configuration(
                "feed.capacity must be greater than zero".into(),
            ));
        }
        if self.console.max_log_rows == 0 {
            return Err(MatsideError::Configuration(
                "console.max_log_rows must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

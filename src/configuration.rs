use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::{
    Serialize,
    Deserialize
};
use thiserror::Error;
use tracing::warn;

use crate::holiday::simulatedholidaysource::DEFAULT_DELAY;
use crate::time::dateunit::DateUnit;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Artificial latency of the simulated holiday source.
    #[serde(default = "default_holiday_delay_ms")]
    pub holiday_delay_ms: u64,

    /// Unit used by `DateUtils::add_default`.
    #[serde(default)]
    pub default_unit: DateUnit,

    #[serde(default = "default_log_level")]
    pub log_level: String
}

fn default_holiday_delay_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            holiday_delay_ms: default_holiday_delay_ms(),
            default_unit: DateUnit::default(),
            log_level: default_log_level()
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies `DATEKIT_HOLIDAY_DELAY_MS`, `DATEKIT_DEFAULT_UNIT` and
    /// `DATEKIT_LOG_LEVEL`. Unparseable values are ignored.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>
    {
        if let Some(delay) = lookup("DATEKIT_HOLIDAY_DELAY_MS") {
            match delay.trim().parse::<u64>() {
                Ok(ms) => self.holiday_delay_ms = ms,
                Err(_) => warn!(value = %delay, "ignoring DATEKIT_HOLIDAY_DELAY_MS")
            }
        }

        if let Some(unit) = lookup("DATEKIT_DEFAULT_UNIT") {
            match unit.parse::<DateUnit>() {
                Ok(unit) => self.default_unit = unit,
                Err(error) => warn!(%error, "ignoring DATEKIT_DEFAULT_UNIT")
            }
        }

        if let Some(log_level) = lookup("DATEKIT_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    pub fn holiday_delay(&self) -> Duration {
        Duration::from_millis(self.holiday_delay_ms)
    }
}

//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `STATION_DASHBOARD_*` environment variables, then CLI overrides applied by
//! the command layer.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CACHE_CAPACITY, DEFAULT_DELTA_LAG,
    DEFAULT_LOG_LEVEL, DEFAULT_MAX_RECORDED_FAULTS, ENV_PREFIX, LOG_LEVELS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// What to do with a row whose numeric fields or field count are malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RowPolicy {
    /// Drop the row and record the fault in the parse statistics
    #[default]
    Reject,
    /// Fail the whole file on the first malformed row
    Abort,
}

impl FromStr for RowPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "abort" => Ok(Self::Abort),
            other => Err(Error::configuration(format!(
                "Invalid row policy '{}' (expected 'reject' or 'abort')",
                other
            ))),
        }
    }
}

/// Log parsing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Policy for malformed numeric fields and wrong field counts
    pub row_policy: RowPolicy,

    /// Maximum number of row faults kept in the parse statistics
    pub max_recorded_faults: usize,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            row_policy: RowPolicy::Reject,
            max_recorded_faults: DEFAULT_MAX_RECORDED_FAULTS,
        }
    }
}

/// Derived metric settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Number of samples between the latest reading and its delta reference
    pub delta_lag: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            delta_lag: DEFAULT_DELTA_LAG,
        }
    }
}

/// Snapshot cache settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of snapshots retained; 0 disables caching
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter for the crate
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Complete configuration for the station dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parsing: ParsingConfig,
    pub metrics: MetricsConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Default location of the configuration file
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Unable to determine user config directory"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        Self::from_toml_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Failed to parse TOML: {}", e)))
    }

    /// Load with layered approach (defaults -> file -> env) and validate
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Apply `STATION_DASHBOARD_*` overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(value) = var("ROW_POLICY") {
            self.parsing.row_policy = value.parse()?;
        }

        if let Some(value) = var("DELTA_LAG") {
            self.metrics.delta_lag = parse_env_usize("DELTA_LAG", &value)?;
        }

        if let Some(value) = var("CACHE_CAPACITY") {
            self.cache.capacity = parse_env_usize("CACHE_CAPACITY", &value)?;
        }

        if let Some(value) = var("LOG_LEVEL") {
            self.logging.level = value.trim().to_lowercase();
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.metrics.delta_lag == 0 {
            return Err(Error::configuration("metrics.delta_lag must be at least 1"));
        }

        if self.parsing.max_recorded_faults == 0 {
            return Err(Error::configuration(
                "parsing.max_recorded_faults must be at least 1",
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}' (expected one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

fn parse_env_usize(name: &str, value: &str) -> Result<usize> {
    value.trim().parse::<usize>().map_err(|e| {
        Error::configuration(format!(
            "Invalid {}{}: '{}' ({})",
            ENV_PREFIX, name, value, e
        ))
    })
}

//! Application constants for the station dashboard
//!
//! This module contains the log schema, derivation constants and default
//! configuration values used throughout the crate.

// =============================================================================
// Log File Schema
// =============================================================================

/// Number of positional fields in every log row
pub const FIELD_COUNT: usize = 9;

/// Positional field names, in file order
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "date",
    "time",
    "temperature",
    "humidity",
    "pressure",
    "light",
    "latitude",
    "longitude",
    "altitude",
];

/// Field positions within a row
pub mod field_index {
    pub const DATE: usize = 0;
    pub const TIME: usize = 1;
    pub const TEMPERATURE: usize = 2;
    pub const HUMIDITY: usize = 3;
    pub const PRESSURE: usize = 4;
    pub const LIGHT: usize = 5;
    pub const LATITUDE: usize = 6;
    pub const LONGITUDE: usize = 7;
    pub const ALTITUDE: usize = 8;
}

/// chrono format for the joined `date time` tokens (`251021 10:41:09`)
pub const TIMESTAMP_FORMAT: &str = "%d%m%y %H:%M:%S";

/// Exact shape of the date token: `DDMMYY`
pub const DATE_TOKEN_PATTERN: &str = r"^\d{6}$";

/// Exact shape of the time token: `HH:MM:SS`
pub const TIME_TOKEN_PATTERN: &str = r"^\d{2}:\d{2}:\d{2}$";

// =============================================================================
// Derivation Constants
// =============================================================================

/// Samples between the latest reading and its comparison reading
pub const DEFAULT_DELTA_LAG: usize = 10;

/// Scale applied to degree-space distances (planar approximation, not haversine)
pub const KM_PER_DEGREE: f64 = 111.0;

/// Light intensity thresholds in lux
pub mod light_thresholds {
    /// Readings strictly above this are "high"
    pub const HIGH_ABOVE: f64 = 800.0;

    /// Readings strictly above this (and not high) are "medium"
    pub const MEDIUM_ABOVE: f64 = 600.0;
}

// =============================================================================
// Parsing and Caching Defaults
// =============================================================================

/// Maximum number of row faults retained in parse statistics
pub const DEFAULT_MAX_RECORDED_FAULTS: usize = 1_000;

/// Percentage of parsed rows above which a load counts as successful
pub const SUCCESS_RATE_THRESHOLD: f64 = 90.0;

/// Snapshot cache capacity; one entry is enough for the single loaded file
pub const DEFAULT_CACHE_CAPACITY: usize = 1;

// =============================================================================
// Configuration Environment
// =============================================================================

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "station-dashboard";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "STATION_DASHBOARD_";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted by the configuration
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

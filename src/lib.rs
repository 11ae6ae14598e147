//! Station Dashboard Library
//!
//! A Rust library for turning weather-station log files into the data behind
//! a monitoring dashboard.
//!
//! This library provides tools for:
//! - Parsing headerless nine-column station logs with row-level fault isolation
//! - Deriving latest values, trailing deltas and per-column statistics
//! - Min-max normalization of the sensor series for overlay charts
//! - Approximate GPS trajectory distance and map centring
//! - Content-keyed caching of derived snapshots

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod log_parser;
        pub mod metrics;
        pub mod pipeline;
        pub mod snapshot_cache;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Column, Dataset, LightLevel, Reading};
pub use app::services::log_parser::{LogParser, ParseStats, RowFault};
pub use app::services::metrics::{DerivedSnapshot, MetricsCalculator};
pub use app::services::pipeline::{LoadedLog, Pipeline};
pub use config::Config;

/// Result type alias for the station dashboard
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for log parsing and metric derivation
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// The CSV reader itself failed (invalid UTF-8, broken quoting)
    #[error("CSV reading error: {message}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// A row-level fault raised under the abort policy
    #[error("Row rejected: {0}")]
    Row(RowFault),

    /// An operation needing a latest reading was given no rows
    #[error("Dataset is empty: no readings to derive metrics from")]
    EmptyDataset,

    /// A column has no valid values so its extrema and mean are undefined
    #[error("Column '{column}' has no valid values")]
    ColumnAllNull { column: &'static str },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Snapshot serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a CSV reading error with context
    pub fn csv(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            message: "CSV reading failed".to_string(),
            source: error,
        }
    }
}

impl From<RowFault> for Error {
    fn from(fault: RowFault) -> Self {
        Self::Row(fault)
    }
}

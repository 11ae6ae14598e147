//! Station log parser
//!
//! Turns a raw weather-station log into an ordered [`Dataset`] of typed
//! readings. Logs are headerless CSV with nine positional columns:
//!
//! ```text
//! date,time,temperature,humidity,pressure,light,latitude,longitude,altitude
//! 251021,10:41:09,23.5,55.4,992.0,801,50.604988,3.150694,50.0
//! ```
//!
//! ## Architecture
//!
//! - [`parser`] - Stream handling, row policy and statistics collection
//! - [`record_parser`] - Positional mapping of one record onto a reading
//! - [`field_parsers`] - Timestamp and numeric field parsing
//! - [`stats`] - Parse statistics and row-level faults
//!
//! ## Usage
//!
//! ```rust
//! use station_dashboard::app::services::log_parser::LogParser;
//!
//! # fn example() -> station_dashboard::Result<()> {
//! let parser = LogParser::default();
//! let dataset = parser.parse_bytes(b"251021,10:41:09,23.5,55.4,992.0,801,50.604988,3.150694,50.0\n")?;
//!
//! println!("Parsed {} readings from {} rows",
//!          dataset.len(),
//!          dataset.parse_stats().total_rows);
//! # Ok(())
//! # }
//! ```
//!
//! [`Dataset`]: crate::app::models::Dataset

pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::LogParser;
pub use stats::{ParseStats, RowFault};

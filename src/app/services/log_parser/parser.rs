//! Core station log parser implementation
//!
//! Handles reading the byte stream, walking records in file order and
//! applying the configured row policy to malformed rows.

use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use super::record_parser::{is_blank, parse_reading_record};
use super::stats::{ParseStats, RowFault};
use crate::app::models::Dataset;
use crate::config::{ParsingConfig, RowPolicy};
use crate::{Error, Result};

/// Parser for headerless nine-column station logs
///
/// - Fixed positional schema, no column-name resolution
/// - Row-level fault isolation: bad timestamps keep the row, bad numbers
///   reject it (or abort the file under [`RowPolicy::Abort`])
/// - Output preserves input row order
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    config: ParsingConfig,
}

impl LogParser {
    /// Create a new parser with the given parsing settings
    pub fn new(config: ParsingConfig) -> Self {
        Self { config }
    }

    /// Create a parser with default settings and the given row policy
    pub fn with_policy(row_policy: RowPolicy) -> Self {
        Self::new(ParsingConfig {
            row_policy,
            ..ParsingConfig::default()
        })
    }

    pub fn row_policy(&self) -> RowPolicy {
        self.config.row_policy
    }

    /// Parse a station log file from disk
    pub fn parse_file(&self, file_path: &Path) -> Result<Dataset> {
        info!("Parsing station log: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let file = std::fs::File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open log file {}", file_path.display()), e)
        })?;

        self.parse_reader(std::io::BufReader::new(file))
    }

    /// Parse a station log held in memory
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Dataset> {
        self.parse_reader(bytes)
    }

    /// Parse a station log from any byte stream
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Dataset> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut stats = ParseStats::new();
        let mut readings = Vec::new();
        let mut record = csv::StringRecord::new();
        let mut line = 0usize;

        loop {
            let row = match csv_reader.read_record(&mut record) {
                Ok(true) => {
                    line = record
                        .position()
                        .map(|p| p.line() as usize)
                        .unwrap_or(line + 1);
                    if is_blank(&record) {
                        continue;
                    }
                    stats.total_rows += 1;
                    Ok(line)
                }
                Ok(false) => break,
                Err(e) if e.is_io_error() => {
                    return Err(Error::csv("Failed to read station log", e));
                }
                Err(e) => {
                    line = e
                        .position()
                        .map(|p| p.line() as usize)
                        .unwrap_or(line + 1);
                    stats.total_rows += 1;
                    Err(RowFault::Unreadable {
                        row: line,
                        message: e.to_string(),
                    })
                }
            };

            let parsed = row.and_then(|row| parse_reading_record(&record, row));

            match parsed {
                Ok(parsed) => {
                    if let Some(fault) = parsed.timestamp_fault {
                        stats.untimed_rows += 1;
                        stats.record_fault(fault, self.config.max_recorded_faults);
                    }
                    readings.push(parsed.reading);
                    stats.rows_parsed += 1;
                }
                Err(fault) => {
                    if self.config.row_policy == RowPolicy::Abort {
                        warn!("Aborting parse: {}", fault);
                        return Err(Error::Row(fault));
                    }
                    debug!("Rejected row: {}", fault);
                    stats.rows_rejected += 1;
                    stats.record_fault(fault, self.config.max_recorded_faults);
                }
            }
        }

        if stats.rows_rejected > 0 {
            warn!(
                "Rejected {} of {} rows with malformed fields",
                stats.rows_rejected, stats.total_rows
            );
        }
        if stats.untimed_rows > 0 {
            warn!(
                "{} rows have malformed timestamps and are excluded from time-ordered views",
                stats.untimed_rows
            );
        }
        info!("Parsed station log: {}", stats.summary());

        Ok(Dataset::new(readings, stats))
    }
}

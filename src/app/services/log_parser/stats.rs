//! Parsing statistics and row-level faults for station log processing
//!
//! Row faults are isolated: they are counted and recorded here rather than
//! failing the whole file (unless the abort policy is in force).

use serde::Serialize;

use crate::app::models::Reading;
use crate::constants::SUCCESS_RATE_THRESHOLD;

/// A fault confined to a single log row
///
/// `row` is the 1-based line number in the input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowFault {
    /// Date and time tokens do not form a `DDMMYY HH:MM:SS` timestamp; the row is kept
    #[error("line {row}: malformed timestamp '{value}'")]
    MalformedTimestamp { row: usize, value: String },

    /// A numeric field could not be read as a finite real
    #[error("line {row}: malformed {column} value '{value}'")]
    MalformedNumericField {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// The row does not have exactly nine fields
    #[error("line {row}: expected {expected} fields, found {found}")]
    WrongFieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The CSV reader could not decode the row
    #[error("line {row}: unreadable row ({message})")]
    Unreadable { row: usize, message: String },
}

impl RowFault {
    pub fn row(&self) -> usize {
        match self {
            RowFault::MalformedTimestamp { row, .. }
            | RowFault::MalformedNumericField { row, .. }
            | RowFault::WrongFieldCount { row, .. }
            | RowFault::Unreadable { row, .. } => *row,
        }
    }

    /// Whether the row is dropped for this fault (timestamp faults keep it)
    pub fn rejects_row(&self) -> bool {
        !matches!(self, RowFault::MalformedTimestamp { .. })
    }
}

/// Statistics gathered while parsing one log file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseStats {
    /// Total number of non-blank rows encountered
    pub total_rows: usize,

    /// Rows turned into readings (including untimed ones)
    pub rows_parsed: usize,

    /// Rows dropped because of a malformed numeric field or field count
    pub rows_rejected: usize,

    /// Parsed rows whose timestamp could not be built
    pub untimed_rows: usize,

    /// Recorded faults, oldest first, capped by configuration
    pub faults: Vec<RowFault>,

    /// Faults that were counted but not recorded because of the cap
    pub faults_not_recorded: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            rows_parsed: 0,
            rows_rejected: 0,
            untimed_rows: 0,
            faults: Vec::new(),
            faults_not_recorded: 0,
        }
    }

    /// Statistics for readings assembled in memory rather than parsed
    pub fn for_readings(readings: &[Reading]) -> Self {
        Self {
            total_rows: readings.len(),
            rows_parsed: readings.len(),
            untimed_rows: readings.iter().filter(|r| !r.is_timed()).count(),
            ..Self::new()
        }
    }

    /// Record a fault, keeping at most `max_recorded` of them
    pub fn record_fault(&mut self, fault: RowFault, max_recorded: usize) {
        if self.faults.len() < max_recorded {
            self.faults.push(fault);
        } else {
            self.faults_not_recorded += 1;
        }
    }

    /// Total number of faults seen, recorded or not
    pub fn fault_count(&self) -> usize {
        self.faults.len() + self.faults_not_recorded
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > SUCCESS_RATE_THRESHOLD
    }

    /// One-line summary for logs and reports
    pub fn summary(&self) -> String {
        format!(
            "{} rows -> {} readings ({:.1}% success) | rejected: {} | untimed: {}",
            self.total_rows,
            self.rows_parsed,
            self.success_rate(),
            self.rows_rejected,
            self.untimed_rows
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

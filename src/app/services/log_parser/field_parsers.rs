//! Field parsing utilities for station log records
//!
//! Helpers for pulling positional fields out of a CSV record and turning
//! them into typed values, reporting failures as [`RowFault`]s.

use chrono::NaiveDateTime;
use csv::StringRecord;
use regex::Regex;
use std::sync::LazyLock;

use super::stats::RowFault;
use crate::constants::{DATE_TOKEN_PATTERN, FIELD_NAMES, TIME_TOKEN_PATTERN, TIMESTAMP_FORMAT};

static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_TOKEN_PATTERN).expect("date token pattern is valid"));

static TIME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIME_TOKEN_PATTERN).expect("time token pattern is valid"));

/// Get a trimmed field by position (missing fields read as empty)
pub fn get_field(record: &StringRecord, index: usize) -> &str {
    record.get(index).map(str::trim).unwrap_or("")
}

/// Combine `DDMMYY` and `HH:MM:SS` tokens into a timestamp
///
/// Both tokens must have the exact shape and form a real calendar date and
/// wall-clock time.
pub fn parse_timestamp(date: &str, time: &str, row: usize) -> Result<NaiveDateTime, RowFault> {
    let combined = format!("{} {}", date, time);

    if !DATE_TOKEN.is_match(date) || !TIME_TOKEN.is_match(time) {
        return Err(RowFault::MalformedTimestamp {
            row,
            value: combined,
        });
    }

    NaiveDateTime::parse_from_str(&combined, TIMESTAMP_FORMAT).map_err(|_| {
        RowFault::MalformedTimestamp {
            row,
            value: combined,
        }
    })
}

/// Parse a required finite real from the field at `index`
pub fn parse_required_f64(record: &StringRecord, index: usize, row: usize) -> Result<f64, RowFault> {
    let value_str = get_field(record, index);

    match value_str.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RowFault::MalformedNumericField {
            row,
            column: FIELD_NAMES[index],
            value: value_str.to_string(),
        }),
    }
}

/// Parse a required finite, non-negative real from the field at `index`
pub fn parse_non_negative_f64(
    record: &StringRecord,
    index: usize,
    row: usize,
) -> Result<f64, RowFault> {
    let value = parse_required_f64(record, index, row)?;
    if value < 0.0 {
        return Err(RowFault::MalformedNumericField {
            row,
            column: FIELD_NAMES[index],
            value: get_field(record, index).to_string(),
        });
    }
    Ok(value)
}

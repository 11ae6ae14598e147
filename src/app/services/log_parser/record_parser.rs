//! Individual row parsing for station log files
//!
//! Maps the nine positional fields of a record onto a [`Reading`].

use csv::StringRecord;
use tracing::debug;

use super::field_parsers::{get_field, parse_non_negative_f64, parse_required_f64, parse_timestamp};
use super::stats::RowFault;
use crate::app::models::Reading;
use crate::constants::{FIELD_COUNT, field_index};

/// Outcome of parsing a single row that was not rejected
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub reading: Reading,
    /// Set when the timestamp could not be built; the reading is still usable
    pub timestamp_fault: Option<RowFault>,
}

/// Whether a record is a blank or whitespace-only line
pub fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// Parse a single station log row
///
/// Numeric faults and wrong field counts reject the row. A bad timestamp
/// does not: the reading is returned with `timestamp = None`.
pub fn parse_reading_record(record: &StringRecord, row: usize) -> Result<ParsedRow, RowFault> {
    if record.len() != FIELD_COUNT {
        return Err(RowFault::WrongFieldCount {
            row,
            expected: FIELD_COUNT,
            found: record.len(),
        });
    }

    let temperature = parse_required_f64(record, field_index::TEMPERATURE, row)?;
    let humidity = parse_required_f64(record, field_index::HUMIDITY, row)?;
    let pressure = parse_required_f64(record, field_index::PRESSURE, row)?;
    let light = parse_non_negative_f64(record, field_index::LIGHT, row)?;
    let latitude = parse_required_f64(record, field_index::LATITUDE, row)?;
    let longitude = parse_required_f64(record, field_index::LONGITUDE, row)?;
    let altitude = parse_required_f64(record, field_index::ALTITUDE, row)?;

    let date = get_field(record, field_index::DATE).to_string();
    let time = get_field(record, field_index::TIME).to_string();

    let (timestamp, timestamp_fault) = match parse_timestamp(&date, &time, row) {
        Ok(ts) => (Some(ts), None),
        Err(fault) => {
            debug!("Keeping untimed row: {}", fault);
            (None, Some(fault))
        }
    };

    Ok(ParsedRow {
        reading: Reading {
            date,
            time,
            timestamp,
            temperature,
            humidity,
            pressure,
            light,
            latitude,
            longitude,
            altitude,
        },
        timestamp_fault,
    })
}

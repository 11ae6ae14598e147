//! Core data models for weather-station logs
//!
//! A [`Reading`] is one row of a station log with named, typed fields. A
//! [`Dataset`] is the ordered, immutable sequence of readings from one log
//! file, and [`Column`] names the numeric series that metrics are computed
//! over.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::app::services::log_parser::ParseStats;
use crate::constants::light_thresholds;

/// One sensor sample from a station log row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Raw date token (`DDMMYY`)
    pub date: String,
    /// Raw time token (`HH:MM:SS`)
    pub time: String,
    /// Combined date and time, `None` when the tokens do not form a valid timestamp
    pub timestamp: Option<NaiveDateTime>,
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Atmospheric pressure in hPa
    pub pressure: f64,
    /// Light intensity in lux
    pub light: f64,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Altitude in metres
    pub altitude: f64,
}

impl Reading {
    /// Whether this reading can be placed on a time axis
    pub fn is_timed(&self) -> bool {
        self.timestamp.is_some()
    }

    /// Value of a numeric column for this reading
    pub fn value(&self, column: Column) -> f64 {
        column.value(self)
    }

    /// Light intensity bucket for this reading
    pub fn light_level(&self) -> LightLevel {
        LightLevel::from_lux(self.light)
    }
}

/// Numeric columns of a station log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Temperature,
    Humidity,
    Pressure,
    Light,
    Latitude,
    Longitude,
    Altitude,
}

impl Column {
    /// Every numeric column, in file order
    pub const ALL: [Column; 7] = [
        Column::Temperature,
        Column::Humidity,
        Column::Pressure,
        Column::Light,
        Column::Latitude,
        Column::Longitude,
        Column::Altitude,
    ];

    /// Columns that get a min-max normalized overlay series
    pub const NORMALIZED: [Column; 4] = [
        Column::Temperature,
        Column::Humidity,
        Column::Pressure,
        Column::Light,
    ];

    /// Columns reported with a trailing delta
    pub const WITH_DELTA: [Column; 3] = [Column::Temperature, Column::Humidity, Column::Pressure];

    /// Column name as it appears in the log schema
    pub fn name(&self) -> &'static str {
        match self {
            Column::Temperature => "temperature",
            Column::Humidity => "humidity",
            Column::Pressure => "pressure",
            Column::Light => "light",
            Column::Latitude => "latitude",
            Column::Longitude => "longitude",
            Column::Altitude => "altitude",
        }
    }

    /// Display unit
    pub fn unit(&self) -> &'static str {
        match self {
            Column::Temperature => "°C",
            Column::Humidity => "%",
            Column::Pressure => "hPa",
            Column::Light => "lux",
            Column::Latitude | Column::Longitude => "°",
            Column::Altitude => "m",
        }
    }

    /// Read this column from a reading
    pub fn value(&self, reading: &Reading) -> f64 {
        match self {
            Column::Temperature => reading.temperature,
            Column::Humidity => reading.humidity,
            Column::Pressure => reading.pressure,
            Column::Light => reading.light,
            Column::Latitude => reading.latitude,
            Column::Longitude => reading.longitude,
            Column::Altitude => reading.altitude,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Light intensity bucket used to colour light readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightLevel {
    Low,
    Medium,
    High,
}

impl LightLevel {
    /// `> 800` is high, `(600, 800]` is medium, everything else is low
    pub fn from_lux(lux: f64) -> Self {
        if lux > light_thresholds::HIGH_ABOVE {
            LightLevel::High
        } else if lux > light_thresholds::MEDIUM_ABOVE {
            LightLevel::Medium
        } else {
            LightLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LightLevel::Low => "low",
            LightLevel::Medium => "medium",
            LightLevel::High => "high",
        }
    }
}

impl fmt::Display for LightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered readings from one log file
///
/// Row order is file order and is never re-sorted by timestamp. There is no
/// mutable access: derived values are computed from a dataset, never written
/// back into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    readings: Vec<Reading>,
    parse_stats: ParseStats,
}

impl Dataset {
    pub fn new(readings: Vec<Reading>, parse_stats: ParseStats) -> Self {
        Self {
            readings,
            parse_stats,
        }
    }

    /// Build a dataset from readings that did not come from a parse
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        let parse_stats = ParseStats::for_readings(&readings);
        Self::new(readings, parse_stats)
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn parse_stats(&self) -> &ParseStats {
        &self.parse_stats
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The reading at the final index
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.last()
    }

    /// Values of one column in row order
    pub fn column(&self, column: Column) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().map(move |r| column.value(r))
    }

    /// Readings that can be placed on a time axis, in row order
    pub fn timed_readings(&self) -> impl Iterator<Item = &Reading> + '_ {
        self.readings.iter().filter(|r| r.is_timed())
    }

    /// Number of readings with a valid timestamp
    pub fn timed_count(&self) -> usize {
        self.timed_readings().count()
    }

    /// Earliest and latest valid timestamps
    pub fn time_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut timestamps = self.readings.iter().filter_map(|r| r.timestamp);
        let first = timestamps.next()?;
        Some(timestamps.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reading(temp: f64, timestamp: Option<NaiveDateTime>) -> Reading {
        Reading {
            date: "251021".to_string(),
            time: "10:41:09".to_string(),
            timestamp,
            temperature: temp,
            humidity: 55.4,
            pressure: 992.0,
            light: 801.0,
            latitude: 50.604988,
            longitude: 3.150694,
            altitude: 50.0,
        }
    }

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 10, 25)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_light_level_boundaries() {
        assert_eq!(LightLevel::from_lux(900.0), LightLevel::High);
        assert_eq!(LightLevel::from_lux(800.1), LightLevel::High);
        assert_eq!(LightLevel::from_lux(800.0), LightLevel::Medium);
        assert_eq!(LightLevel::from_lux(600.1), LightLevel::Medium);
        assert_eq!(LightLevel::from_lux(600.0), LightLevel::Low);
        assert_eq!(LightLevel::from_lux(0.0), LightLevel::Low);
    }

    #[test]
    fn test_column_accessors() {
        let r = reading(23.5, None);
        assert_eq!(Column::Temperature.value(&r), 23.5);
        assert_eq!(r.value(Column::Pressure), 992.0);
        assert_eq!(r.value(Column::Longitude), 3.150694);
        assert_eq!(Column::Humidity.name(), "humidity");
        assert_eq!(Column::Pressure.unit(), "hPa");
        assert_eq!(Column::ALL.len(), 7);
    }

    #[test]
    fn test_timed_view_keeps_row_order() {
        let dataset = Dataset::from_readings(vec![
            reading(1.0, Some(ts(10, 0, 20))),
            reading(2.0, None),
            reading(3.0, Some(ts(10, 0, 10))),
        ]);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.timed_count(), 2);
        let temps: Vec<f64> = dataset.timed_readings().map(|r| r.temperature).collect();
        assert_eq!(temps, vec![1.0, 3.0]);
        assert_eq!(dataset.latest().unwrap().temperature, 3.0);
    }

    #[test]
    fn test_time_span_ignores_untimed_rows() {
        let dataset = Dataset::from_readings(vec![
            reading(1.0, Some(ts(10, 0, 20))),
            reading(2.0, None),
            reading(3.0, Some(ts(10, 0, 10))),
        ]);

        assert_eq!(dataset.time_span(), Some((ts(10, 0, 10), ts(10, 0, 20))));

        let untimed = Dataset::from_readings(vec![reading(1.0, None)]);
        assert_eq!(untimed.time_span(), None);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::from_readings(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.latest().is_none());
        assert_eq!(dataset.column(Column::Light).count(), 0);
    }
}

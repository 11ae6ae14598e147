//! Test utilities for derived-metrics testing

use chrono::{NaiveDate, NaiveDateTime};

use crate::app::models::{Dataset, Reading};

mod column_stats_tests;
mod trajectory_tests;

fn timestamp(second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 10, 25)
        .unwrap()
        .and_hms_opt(10, 41, 0)
        .unwrap()
        + chrono::Duration::seconds(second as i64)
}

/// Reading with the given sensor values at a fixed position
pub fn reading(temperature: f64, humidity: f64, pressure: f64, light: f64) -> Reading {
    Reading {
        date: "251021".to_string(),
        time: "10:41:00".to_string(),
        timestamp: Some(timestamp(0)),
        temperature,
        humidity,
        pressure,
        light,
        latitude: 50.0,
        longitude: 3.0,
        altitude: 50.0,
    }
}

/// Reading at a given position with neutral sensor values
pub fn reading_at(latitude: f64, longitude: f64) -> Reading {
    Reading {
        latitude,
        longitude,
        ..reading(20.0, 50.0, 1000.0, 500.0)
    }
}

/// Dataset of `n` readings whose temperature, humidity and pressure equal the row index
pub fn indexed_dataset(n: usize) -> Dataset {
    Dataset::from_readings(
        (0..n)
            .map(|i| {
                let mut r = reading(i as f64, i as f64 * 2.0, 1000.0 + i as f64, 100.0);
                r.timestamp = Some(timestamp(i as u32 * 10));
                r
            })
            .collect(),
    )
}

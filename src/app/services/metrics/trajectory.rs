//! GPS trajectory metrics
//!
//! Distances use a planar approximation: the Euclidean distance between
//! consecutive `(latitude, longitude)` pairs in degree space, scaled by
//! [`KM_PER_DEGREE`]. It is deliberately not a great-circle distance, so
//! totals stay comparable with earlier reports.

use serde::Serialize;

use crate::app::models::Reading;
use crate::constants::KM_PER_DEGREE;

/// A GPS fix with altitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl From<&Reading> for Position {
    fn from(reading: &Reading) -> Self {
        Self {
            latitude: reading.latitude,
            longitude: reading.longitude,
            altitude: reading.altitude,
        }
    }
}

/// Centre point for a map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

/// Trajectory figures for a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectorySummary {
    /// Cumulative approximate distance in km
    pub distance_km: f64,
    /// Running distance at each reading, in row order
    pub cumulative_km: Vec<f64>,
    /// Position of the latest reading
    pub current_position: Position,
    /// Mean latitude and longitude over all readings
    pub map_center: MapCenter,
}

/// Approximate distance in km between two readings
pub fn segment_distance_km(from: &Reading, to: &Reading) -> f64 {
    let d_lat = to.latitude - from.latitude;
    let d_lon = to.longitude - from.longitude;
    (d_lat * d_lat + d_lon * d_lon).sqrt() * KM_PER_DEGREE
}

/// Sum of segment distances over consecutive readings; the first reading contributes nothing
pub fn total_distance_km(readings: &[Reading]) -> f64 {
    readings
        .windows(2)
        .map(|pair| segment_distance_km(&pair[0], &pair[1]))
        .fold(0.0, |total, d| total + d)
}

/// Running total of distance at each reading
pub fn cumulative_distance_km(readings: &[Reading]) -> Vec<f64> {
    let mut total = 0.0;
    let mut cumulative = Vec::with_capacity(readings.len());

    for (i, reading) in readings.iter().enumerate() {
        if i > 0 {
            total += segment_distance_km(&readings[i - 1], reading);
        }
        cumulative.push(total);
    }

    cumulative
}

/// Mean latitude and longitude, `None` for no readings
pub fn map_center(readings: &[Reading]) -> Option<MapCenter> {
    if readings.is_empty() {
        return None;
    }

    let n = readings.len() as f64;
    let (lat_sum, lon_sum) = readings
        .iter()
        .fold((0.0, 0.0), |(lat, lon), r| (lat + r.latitude, lon + r.longitude));

    Some(MapCenter {
        latitude: lat_sum / n,
        longitude: lon_sum / n,
    })
}

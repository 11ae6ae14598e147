//! Tests for trajectory distance and map centring

use super::*;
use crate::app::services::metrics::trajectory::{
    cumulative_distance_km, map_center, segment_distance_km, total_distance_km,
};

#[test]
fn test_single_reading_has_no_distance() {
    assert_eq!(total_distance_km(&[reading_at(50.0, 3.0)]), 0.0);
    assert_eq!(cumulative_distance_km(&[reading_at(50.0, 3.0)]), vec![0.0]);
}

#[test]
fn test_identical_positions_have_no_distance() {
    let readings = vec![reading_at(50.604988, 3.150694), reading_at(50.604988, 3.150694)];
    assert_eq!(total_distance_km(&readings), 0.0);
}

#[test]
fn test_planar_approximation_scaled_by_111() {
    // 3-4-5 triangle in degree space
    let d = segment_distance_km(&reading_at(0.0, 0.0), &reading_at(3.0, 4.0));
    assert!((d - 555.0).abs() < 1e-9);
}

#[test]
fn test_distance_sums_consecutive_segments() {
    let readings = vec![
        reading_at(0.0, 0.0),
        reading_at(0.0, 0.001),
        reading_at(0.0, 0.0),
    ];

    let total = total_distance_km(&readings);
    assert!((total - 0.222).abs() < 1e-9);

    let cumulative = cumulative_distance_km(&readings);
    assert_eq!(cumulative.len(), 3);
    assert_eq!(cumulative[0], 0.0);
    assert!((cumulative[1] - 0.111).abs() < 1e-9);
    assert_eq!(cumulative[2], total);
}

#[test]
fn test_empty_trajectory() {
    assert_eq!(total_distance_km(&[]), 0.0);
    assert!(cumulative_distance_km(&[]).is_empty());
    assert!(map_center(&[]).is_none());
}

#[test]
fn test_map_center_is_mean_position() {
    let center = map_center(&[reading_at(50.0, 3.0), reading_at(51.0, 4.0), reading_at(52.0, 5.0)])
        .unwrap();
    assert_eq!(center.latitude, 51.0);
    assert_eq!(center.longitude, 4.0);
}

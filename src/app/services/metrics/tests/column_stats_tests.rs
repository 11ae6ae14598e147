//! Tests for column summaries

use crate::app::services::metrics::ColumnSummary;

#[test]
fn test_min_max_mean() {
    let summary = ColumnSummary::compute(vec![23.5, 20.0, 26.5]).unwrap();

    assert_eq!(summary.min, 20.0);
    assert_eq!(summary.max, 26.5);
    assert!((summary.mean - 23.333333333333332).abs() < 1e-12);
    assert_eq!(summary.count, 3);
    assert_eq!(summary.range(), 6.5);
    assert!(!summary.is_degenerate());
}

#[test]
fn test_no_values_is_absent() {
    assert_eq!(ColumnSummary::compute(Vec::<f64>::new()), None);
}

#[test]
fn test_non_finite_values_are_ignored() {
    let summary = ColumnSummary::compute(vec![f64::NAN, 1.0, f64::INFINITY, 3.0]).unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.mean, 2.0);

    assert_eq!(ColumnSummary::compute(vec![f64::NAN, f64::NAN]), None);
}

#[test]
fn test_single_value_is_degenerate() {
    let summary = ColumnSummary::compute(vec![992.0]).unwrap();
    assert_eq!(summary.min, 992.0);
    assert_eq!(summary.max, 992.0);
    assert_eq!(summary.mean, 992.0);
    assert!(summary.is_degenerate());
}

#[test]
fn test_mean_of_huge_values_does_not_overflow() {
    let summary = ColumnSummary::compute(vec![1.0e308; 4]).unwrap();
    assert_eq!(summary.mean, 1.0e308);

    let spread = ColumnSummary::compute(vec![-1.0e308, 0.0, 1.0e308]).unwrap();
    assert!(spread.mean.is_finite());
    assert!(spread.mean.abs() < 1.0e300);
    assert_eq!(spread.range(), f64::INFINITY);
}

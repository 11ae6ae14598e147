//! Min-max normalization of sensor series for the overlay chart

use serde::Serialize;
use tracing::warn;

use super::column_stats::ColumnSummary;
use crate::app::models::Column;

/// A column rescaled into `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSeries {
    pub column: Column,
    /// One value per dataset row, in row order
    pub values: Vec<f64>,
    /// Set when `max == min`; every value is then `0`
    pub degenerate: bool,
}

/// Rescale `values` with `(v - min) / (max - min)`
///
/// A degenerate column (`max == min`) maps to all zeros. An empty input
/// produces an empty, non-degenerate series.
pub fn normalize(column: Column, values: &[f64]) -> NormalizedSeries {
    let Some(summary) = ColumnSummary::compute(values.iter().copied()) else {
        return NormalizedSeries {
            column,
            values: Vec::new(),
            degenerate: false,
        };
    };

    if summary.is_degenerate() {
        warn!(
            "Column '{}' is constant ({}); normalized series is all zeros",
            column, summary.min
        );
        return NormalizedSeries {
            column,
            values: vec![0.0; values.len()],
            degenerate: true,
        };
    }

    let range = summary.range();
    let values = if range.is_finite() {
        values.iter().map(|v| (v - summary.min) / range).collect()
    } else {
        // Extremes too far apart for f64; rescale on halves
        let half_min = summary.min / 2.0;
        let half_range = summary.max / 2.0 - half_min;
        values.iter().map(|v| (v / 2.0 - half_min) / half_range).collect()
    };

    NormalizedSeries {
        column,
        values,
        degenerate: false,
    }
}

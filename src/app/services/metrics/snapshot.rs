//! The derived snapshot handed to presentation layers

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

use super::column_stats::ColumnSummary;
use super::normalization::NormalizedSeries;
use super::trajectory::TrajectorySummary;
use crate::app::models::{Column, LightLevel, Reading};
use crate::{Error, Result};

/// Everything computed from one dataset
///
/// Built once per dataset and never modified afterwards. Maps are ordered so
/// that two snapshots of equal datasets compare and serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedSnapshot {
    /// Number of readings in the dataset
    pub row_count: usize,
    /// Readings with a valid timestamp
    pub timed_count: usize,
    /// Earliest and latest valid timestamps
    pub time_span: Option<(NaiveDateTime, NaiveDateTime)>,
    /// Reading at the final index
    pub latest: Reading,
    /// Samples between the latest reading and its delta reference
    pub delta_lag: usize,
    /// Latest minus lagged value for temperature, humidity and pressure
    pub deltas: BTreeMap<Column, f64>,
    /// Extrema and mean per column, `None` when a column has no valid values
    pub summaries: BTreeMap<Column, Option<ColumnSummary>>,
    /// Min-max normalized series for the overlay columns
    pub normalized: BTreeMap<Column, NormalizedSeries>,
    /// Light bucket per row, in row order
    pub light_levels: Vec<LightLevel>,
    pub trajectory: TrajectorySummary,
}

impl DerivedSnapshot {
    /// Latest value of a column
    pub fn latest_value(&self, column: Column) -> f64 {
        column.value(&self.latest)
    }

    /// Trailing delta for a column; `None` for columns without one
    pub fn delta(&self, column: Column) -> Option<f64> {
        self.deltas.get(&column).copied()
    }

    /// Extrema and mean for a column, if it has any valid values
    pub fn summary(&self, column: Column) -> Option<&ColumnSummary> {
        self.summaries.get(&column).and_then(Option::as_ref)
    }

    /// Like [`summary`](Self::summary), but an absent summary is an error
    pub fn require_summary(&self, column: Column) -> Result<&ColumnSummary> {
        self.summary(column).ok_or(Error::ColumnAllNull {
            column: column.name(),
        })
    }

    /// Normalized series for one of the overlay columns
    pub fn normalized(&self, column: Column) -> Option<&NormalizedSeries> {
        self.normalized.get(&column)
    }

    /// Columns whose normalized series is the constant-zero fallback
    pub fn degenerate_columns(&self) -> Vec<Column> {
        self.normalized
            .values()
            .filter(|series| series.degenerate)
            .map(|series| series.column)
            .collect()
    }

    /// Light bucket of the latest reading
    pub fn latest_light_level(&self) -> LightLevel {
        self.latest.light_level()
    }

    pub fn distance_km(&self) -> f64 {
        self.trajectory.distance_km
    }
}

//! Derived-metrics calculator
//!
//! A stateless function of its dataset: the same dataset always yields an
//! equal snapshot, which is what makes content-keyed caching safe.

use std::collections::BTreeMap;
use tracing::{debug, info};

use super::column_stats::ColumnSummary;
use super::normalization::normalize;
use super::snapshot::DerivedSnapshot;
use super::trajectory::{Position, TrajectorySummary, cumulative_distance_km, map_center};
use crate::app::models::{Column, Dataset, Reading};
use crate::config::MetricsConfig;
use crate::{Error, Result};

/// Latest value minus the value `lag` samples earlier
///
/// With `lag = 10`, an 11-row dataset compares index 10 with index 0. When
/// the dataset has `lag` rows or fewer the delta is `0`.
pub fn trailing_delta(readings: &[Reading], column: Column, lag: usize) -> Result<f64> {
    let latest = readings.last().ok_or(Error::EmptyDataset)?;
    let len = readings.len();

    if len > lag {
        Ok(column.value(latest) - column.value(&readings[len - 1 - lag]))
    } else {
        Ok(0.0)
    }
}

/// Computes a [`DerivedSnapshot`] from a [`Dataset`]
#[derive(Debug, Clone, Default)]
pub struct MetricsCalculator {
    config: MetricsConfig,
}

impl MetricsCalculator {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    pub fn delta_lag(&self) -> usize {
        self.config.delta_lag
    }

    /// Derive every metric for a dataset
    ///
    /// Fails with [`Error::EmptyDataset`] when there is no latest reading.
    pub fn derive(&self, dataset: &Dataset) -> Result<DerivedSnapshot> {
        let readings = dataset.readings();
        let latest = dataset.latest().ok_or(Error::EmptyDataset)?;
        let lag = self.config.delta_lag;

        let mut deltas = BTreeMap::new();
        for column in Column::WITH_DELTA {
            deltas.insert(column, trailing_delta(readings, column, lag)?);
        }

        let summaries: BTreeMap<Column, Option<ColumnSummary>> = Column::ALL
            .iter()
            .map(|&column| (column, ColumnSummary::compute(dataset.column(column))))
            .collect();

        let normalized = Column::NORMALIZED
            .iter()
            .map(|&column| {
                let values: Vec<f64> = dataset.column(column).collect();
                (column, normalize(column, &values))
            })
            .collect();

        let cumulative_km = cumulative_distance_km(readings);
        let trajectory = TrajectorySummary {
            distance_km: cumulative_km.last().copied().unwrap_or(0.0),
            cumulative_km,
            current_position: Position::from(latest),
            map_center: map_center(readings).ok_or(Error::EmptyDataset)?,
        };

        debug!(
            "Trajectory: {:.3} km over {} readings",
            trajectory.distance_km,
            readings.len()
        );

        let snapshot = DerivedSnapshot {
            row_count: dataset.len(),
            timed_count: dataset.timed_count(),
            time_span: dataset.time_span(),
            latest: latest.clone(),
            delta_lag: lag,
            deltas,
            summaries,
            normalized,
            light_levels: readings.iter().map(Reading::light_level).collect(),
            trajectory,
        };

        info!(
            "Derived metrics for {} readings ({} timed)",
            snapshot.row_count, snapshot.timed_count
        );
        Ok(snapshot)
    }
}

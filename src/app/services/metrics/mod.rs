//! Derived-metrics calculator for station datasets
//!
//! Consumes a parsed [`Dataset`](crate::app::models::Dataset) and produces a
//! [`DerivedSnapshot`]: latest values, trailing deltas, per-column extrema and
//! mean, min-max normalized series, light buckets and trajectory figures.
//!
//! - [`calculator`] - Orchestration and trailing deltas
//! - [`column_stats`] - Min, max and mean over a column
//! - [`normalization`] - Min-max rescaling with a constant-column fallback
//! - [`trajectory`] - Planar GPS distance and map centring
//! - [`snapshot`] - The immutable result type

pub mod calculator;
pub mod column_stats;
pub mod normalization;
pub mod snapshot;
pub mod trajectory;

#[cfg(test)]
pub mod tests;

pub use calculator::{MetricsCalculator, trailing_delta};
pub use column_stats::ColumnSummary;
pub use normalization::{NormalizedSeries, normalize};
pub use snapshot::DerivedSnapshot;
pub use trajectory::{MapCenter, Position, TrajectorySummary};

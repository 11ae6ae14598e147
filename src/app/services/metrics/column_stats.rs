//! Descriptive statistics for a single numeric column

use serde::Serialize;

/// Minimum, maximum and arithmetic mean of a column's valid values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Number of values the summary was computed over
    pub count: usize,
}

impl ColumnSummary {
    /// Summarize the finite values of a column
    ///
    /// Returns `None` when there are no finite values, so callers never see a
    /// mean computed from a zero count.
    pub fn compute<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        // Running mean of v/2; stays finite when `sum` overflows
        let mut half_mean = 0.0;
        let mut count = 0usize;

        for value in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            count += 1;
            half_mean += (value / 2.0 - half_mean) / count as f64;
        }

        if count == 0 {
            return None;
        }

        let mean = if sum.is_finite() {
            sum / count as f64
        } else {
            (half_mean * 2.0).clamp(min, max)
        };

        Some(Self {
            min,
            max,
            mean,
            count,
        })
    }

    /// Spread between the extremes; `inf` when it exceeds `f64::MAX`
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// A column whose minimum equals its maximum
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

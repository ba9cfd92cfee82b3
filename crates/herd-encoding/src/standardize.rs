//! Zero-mean, unit-variance scaling over the current batch.

use herd_core::stats;

/// Standardize one column with the population standard deviation.
///
/// A constant column maps to all zeros. NaN or infinite inputs propagate.
pub fn standardize(column: &[f64]) -> Vec<f64> {
    let Some(first) = column.first() else {
        return Vec::new();
    };
    if first.is_finite() && column.iter().all(|v| v == first) {
        return vec![0.0; column.len()];
    }
    let mean = stats::mean(column).unwrap_or(f64::NAN);
    let std = stats::population_std(column).unwrap_or(f64::NAN);
    column.iter().map(|v| (v - mean) / std).collect()
}

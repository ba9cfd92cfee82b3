//! Batch-median imputation of missing numeric values.

use herd_core::stats;

/// Fill every `None` in each column with that column's median over the
/// present values. A column with no present values fills with NaN.
///
/// Returns the filled columns and the indices of columns that had gaps.
pub fn fill_with_medians(columns: Vec<Vec<Option<f64>>>) -> (Vec<Vec<f64>>, Vec<usize>) {
    let gapped: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, col)| col.iter().any(Option::is_none))
        .map(|(i, _)| i)
        .collect();

    let filled = columns
        .into_iter()
        .map(|col| {
            let present: Vec<f64> = col.iter().flatten().copied().collect();
            let median = stats::median(&present).unwrap_or(f64::NAN);
            col.into_iter().map(|v| v.unwrap_or(median)).collect()
        })
        .collect();

    (filled, gapped)
}

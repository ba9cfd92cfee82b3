use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Encoded feature vectors, one per record, in input order.
///
/// Every row has `feature_names.len()` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    feature_names: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Build a matrix, rejecting rows whose width differs from the number of
    /// feature names.
    pub fn new(feature_names: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, InputError> {
        if let Some((row, r)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != feature_names.len())
        {
            return Err(InputError::FeatureWidthMismatch {
                row,
                expected: feature_names.len(),
                got: r.len(),
            });
        }
        Ok(Self {
            feature_names,
            rows,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.feature_names.len()
    }

    /// Position (row, column) of the first NaN or infinite entry.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|v| !v.is_finite())
                .map(|c| (r, c))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let err = FeatureMatrix::new(vec!["a".into(), "b".into()], vec![vec![1.0, 2.0], vec![1.0]]);
        assert_eq!(
            err,
            Err(InputError::FeatureWidthMismatch {
                row: 1,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn locates_first_non_finite_entry() {
        let m = FeatureMatrix::new(
            vec!["a".into(), "b".into()],
            vec![vec![1.0, 2.0], vec![3.0, f64::NAN]],
        )
        .unwrap();
        assert_eq!(m.first_non_finite(), Some((1, 1)));
        assert_eq!(m.n_rows(), 2);
        assert_eq!(m.width(), 2);
    }
}

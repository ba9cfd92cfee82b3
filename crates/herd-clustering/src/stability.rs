//! Multi-resolution stability: cut one dendrogram at several group counts
//! and score pairwise agreement between the resulting partitions.

use std::collections::BTreeMap;

use herd_core::errors::{HerdError, HerdResult, InputError};
use herd_core::models::{Dendrogram, FeatureMatrix};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::agreement::adjusted_rand_index;
use crate::cut::TreeCutter;
use crate::ward::WardLinkageBuilder;

/// Result of a stability comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    /// Compared group counts, ascending and distinct.
    pub ks: Vec<usize>,
    /// Per k: label -> number of records.
    pub counts: BTreeMap<usize, BTreeMap<usize, usize>>,
    /// Per (k_i, k_j): Adjusted Rand Index. Symmetric, 1.0 on the diagonal.
    pub agreement: BTreeMap<usize, BTreeMap<usize, f64>>,
}

impl StabilityReport {
    pub fn score(&self, ki: usize, kj: usize) -> Option<f64> {
        self.agreement.get(&ki)?.get(&kj).copied()
    }
}

/// Parse a comma-separated list of group counts such as `"3,4,5"`.
///
/// Blank entries are skipped; anything else that is not a non-negative
/// integer rejects the whole list.
pub fn parse_group_counts(raw: &str) -> HerdResult<Vec<usize>> {
    let invalid = || InputError::InvalidGroupCountList {
        raw: raw.to_string(),
    };
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<usize>().map_err(|_| HerdError::from(invalid())))
        .collect()
}

/// Scores how stable a segmentation is across group counts.
#[derive(Debug, Clone, Default)]
pub struct StabilityComparator {
    linkage: WardLinkageBuilder,
}

impl StabilityComparator {
    pub fn new(linkage: WardLinkageBuilder) -> Self {
        Self { linkage }
    }

    /// Build the dendrogram for `matrix`, then compare cuts at `ks`.
    pub fn compare(&self, matrix: &FeatureMatrix, ks: &[usize]) -> HerdResult<StabilityReport> {
        let ks = normalize(ks)?;
        let dendrogram = self.linkage.build(matrix)?;
        Self::compare_dendrogram(&dendrogram, &ks)
    }

    /// Compare cuts of an existing dendrogram, without rebuilding it.
    pub fn compare_dendrogram(dendrogram: &Dendrogram, ks: &[usize]) -> HerdResult<StabilityReport> {
        let ks = normalize(ks)?;
        let labelings = ks
            .iter()
            .map(|&k| TreeCutter::cut_labels(dendrogram, k))
            .collect::<HerdResult<Vec<_>>>()?;

        let counts = ks
            .iter()
            .zip(&labelings)
            .map(|(&k, labels)| {
                let mut per_label = BTreeMap::new();
                for &label in labels {
                    *per_label.entry(label).or_insert(0) += 1;
                }
                (k, per_label)
            })
            .collect();

        let mut agreement: BTreeMap<usize, BTreeMap<usize, f64>> = BTreeMap::new();
        for (i, &ki) in ks.iter().enumerate() {
            agreement.entry(ki).or_default().insert(ki, 1.0);
            for (j, &kj) in ks.iter().enumerate().skip(i + 1) {
                let score = adjusted_rand_index(&labelings[i], &labelings[j])?;
                agreement.entry(ki).or_default().insert(kj, score);
                agreement.entry(kj).or_default().insert(ki, score);
            }
        }

        debug!(ks = ?ks, leaves = dendrogram.n_leaves(), "stability compared");
        Ok(StabilityReport {
            ks,
            counts,
            agreement,
        })
    }
}

fn normalize(ks: &[usize]) -> HerdResult<Vec<usize>> {
    let mut ks = ks.to_vec();
    ks.sort_unstable();
    ks.dedup();
    if ks.is_empty() {
        return Err(InputError::EmptyGroupCounts.into());
    }
    Ok(ks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(values: &[f64]) -> FeatureMatrix {
        FeatureMatrix::new(
            vec!["x".into()],
            values.iter().map(|v| vec![*v]).collect(),
        )
        .unwrap()
    }

    #[test]
    fn parses_comma_list() {
        assert_eq!(parse_group_counts("3,4,5").unwrap(), vec![3, 4, 5]);
        assert_eq!(parse_group_counts(" 2 , 6,").unwrap(), vec![2, 6]);
    }

    #[test]
    fn rejects_garbage_list() {
        let err = parse_group_counts("3,four").unwrap_err();
        assert!(matches!(
            err,
            herd_core::HerdError::Input(InputError::InvalidGroupCountList { .. })
        ));
    }

    #[test]
    fn single_k_scores_one_with_itself() {
        let report = StabilityComparator::default()
            .compare(&matrix(&[1.0, 2.0, 10.0, 11.0]), &[2])
            .unwrap();
        assert_eq!(report.ks, vec![2]);
        assert_eq!(report.score(2, 2), Some(1.0));
        assert_eq!(report.counts[&2].values().sum::<usize>(), 4);
    }

    #[test]
    fn duplicates_collapse_and_sort() {
        let report = StabilityComparator::default()
            .compare(&matrix(&[1.0, 2.0, 10.0, 11.0, 30.0]), &[3, 2, 3])
            .unwrap();
        assert_eq!(report.ks, vec![2, 3]);
        assert_eq!(report.score(2, 3), report.score(3, 2));
    }

    #[test]
    fn empty_set_rejected() {
        let err = StabilityComparator::default()
            .compare(&matrix(&[1.0, 2.0]), &[])
            .unwrap_err();
        assert!(matches!(err, herd_core::HerdError::Input(InputError::EmptyGroupCounts)));
    }

    #[test]
    fn k_beyond_records_rejected() {
        let err = StabilityComparator::default()
            .compare(&matrix(&[1.0, 2.0, 3.0]), &[2, 4])
            .unwrap_err();
        assert!(matches!(
            err,
            herd_core::HerdError::Input(InputError::InvalidGroupCount { k: 4, n: 3 })
        ));
    }
}

//! Ward minimum-variance agglomerative clustering.
//!
//! The working matrix holds squared Ward dissimilarities, initialised to
//! squared Euclidean distance and updated by the Lance–Williams recurrence
//!
//! ```text
//! d²(k, i∪j) = ((n_i + n_k)·d²(k,i) + (n_j + n_k)·d²(k,j) − n_k·d²(i,j)) / (n_i + n_j + n_k)
//! ```
//!
//! Recorded merge heights are `sqrt(d²)`, which equals `sqrt(2·ΔSSE)` for the
//! merged pair.

use herd_core::config::{defaults, SegmentationConfig};
use herd_core::constants::{MERGE_HEIGHT_TOLERANCE, MIN_RECORDS};
use herd_core::errors::{ClusteringError, HerdResult, InputError};
use herd_core::models::{Dendrogram, DendrogramNode, FeatureMatrix};
use tracing::debug;

use crate::dissimilarity::DissimilarityMatrix;

/// Builds a [`Dendrogram`] from a feature matrix.
#[derive(Debug, Clone)]
pub struct WardLinkageBuilder {
    parallel_search_min_clusters: usize,
}

impl Default for WardLinkageBuilder {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_PARALLEL_SEARCH_MIN_CLUSTERS)
    }
}

impl WardLinkageBuilder {
    /// `parallel_search_min_clusters`: the nearest-pair search runs on the
    /// rayon pool while at least this many clusters are active.
    pub fn new(parallel_search_min_clusters: usize) -> Self {
        Self {
            parallel_search_min_clusters,
        }
    }

    pub fn from_config(config: &SegmentationConfig) -> Self {
        Self::new(config.parallel_search_min_clusters)
    }

    pub fn parallel_search_min_clusters(&self) -> usize {
        self.parallel_search_min_clusters
    }

    /// Run the full merge sequence over every row of `matrix`.
    ///
    /// Each step merges the pair with minimal (cost, lower id, higher id).
    /// The result has exactly `n - 1` merges with non-decreasing heights.
    pub fn build(&self, matrix: &FeatureMatrix) -> HerdResult<Dendrogram> {
        let n = matrix.n_rows();
        if n < MIN_RECORDS {
            return Err(InputError::TooFewRecords { n, min: MIN_RECORDS }.into());
        }
        if let Some((row, col)) = matrix.first_non_finite() {
            return Err(InputError::NonFiniteFeature {
                row,
                column: matrix.feature_names()[col].clone(),
            }
            .into());
        }

        let mut dist = DissimilarityMatrix::from_points(matrix.rows());
        // Slot s currently holds cluster ids[s] with sizes[s] leaves.
        let mut ids: Vec<usize> = (0..n).collect();
        let mut sizes: Vec<usize> = vec![1; n];
        let mut active: Vec<usize> = (0..n).collect();
        let mut nodes = Vec::with_capacity(n - 1);
        let mut previous = 0.0_f64;

        for step in 0..n - 1 {
            let parallel = active.len() >= self.parallel_search_min_clusters;
            let Some(best) = dist.nearest_pair(&active, &ids, parallel) else {
                break;
            };

            let mut height = best.cost.max(0.0).sqrt();
            if height < previous {
                if previous - height <= MERGE_HEIGHT_TOLERANCE * previous.max(1.0) {
                    height = previous;
                } else {
                    return Err(ClusteringError::NonMonotonicMerge {
                        step,
                        previous,
                        current: height,
                    }
                    .into());
                }
            }
            previous = height;

            let (keep, drop) = (best.lo_slot, best.hi_slot);
            let (n_i, n_j) = (sizes[keep] as f64, sizes[drop] as f64);
            let d_ij = best.cost;
            for &other in &active {
                if other == keep || other == drop {
                    continue;
                }
                let n_k = sizes[other] as f64;
                let updated = ((n_i + n_k) * dist.get(keep, other)
                    + (n_j + n_k) * dist.get(drop, other)
                    - n_k * d_ij)
                    / (n_i + n_j + n_k);
                dist.set(keep, other, updated.max(0.0));
            }

            let id = n + step;
            let size = sizes[keep] + sizes[drop];
            nodes.push(DendrogramNode {
                id,
                left: best.lo_id,
                right: best.hi_id,
                distance: height,
                size,
            });
            ids[keep] = id;
            sizes[keep] = size;
            active.retain(|&slot| slot != drop);
        }

        debug!(records = n, merges = nodes.len(), top = previous, "ward linkage built");
        Ok(Dendrogram::new(n, nodes)?)
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Segmentation pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Group count used when a request does not name one.
    pub default_group_count: usize,
    /// Active-cluster count at or above which the nearest-pair search runs on rayon.
    pub parallel_search_min_clusters: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            default_group_count: defaults::DEFAULT_GROUP_COUNT,
            parallel_search_min_clusters: defaults::DEFAULT_PARALLEL_SEARCH_MIN_CLUSTERS,
        }
    }
}

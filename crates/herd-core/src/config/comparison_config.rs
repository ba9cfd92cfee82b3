use serde::{Deserialize, Serialize};

use super::defaults;

/// Stability comparison configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Group counts compared when a request does not name any.
    pub default_group_counts: Vec<usize>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            default_group_counts: defaults::DEFAULT_COMPARE_GROUP_COUNTS.to_vec(),
        }
    }
}

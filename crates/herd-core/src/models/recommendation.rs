use serde::{Deserialize, Serialize};

/// Descriptive name and management guidance for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub cluster_id: usize,
    pub name: String,
    pub recommendation: String,
}

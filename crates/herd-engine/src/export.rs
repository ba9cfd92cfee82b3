//! Read-only export views over a run snapshot. Serialization into any file
//! or wire format is the caller's concern.

use herd_core::models::{FieldMean, RunSnapshot};
use serde::{Deserialize, Serialize};

/// One animal and its group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRow {
    pub id: String,
    pub cluster_id: usize,
}

/// One group with its name, guidance and per-field means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRow {
    pub cluster_id: usize,
    pub name: String,
    pub recommendation: String,
    pub means: Vec<FieldMean>,
}

/// Assignment rows in input record order.
pub fn assignment_rows(snapshot: &RunSnapshot) -> Vec<AssignmentRow> {
    snapshot
        .assignment
        .pairs()
        .map(|(id, cluster_id)| AssignmentRow {
            id: id.to_string(),
            cluster_id,
        })
        .collect()
}

/// Recommendation rows in ascending group order.
pub fn recommendation_rows(snapshot: &RunSnapshot) -> Vec<RecommendationRow> {
    snapshot
        .summaries
        .clusters
        .iter()
        .filter_map(|summary| {
            let rec = snapshot.recommendation_for(summary.cluster_id)?;
            Some(RecommendationRow {
                cluster_id: summary.cluster_id,
                name: rec.name.clone(),
                recommendation: rec.recommendation.clone(),
                means: summary.means.clone(),
            })
        })
        .collect()
}

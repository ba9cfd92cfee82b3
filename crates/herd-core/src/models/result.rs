use serde::{Deserialize, Serialize};

use super::{
    ClusterAssignment, Dendrogram, FieldMean, HerdKpis, LabeledRecord, RunId, RunSnapshot,
};

/// One group as reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterReport {
    pub cluster_id: usize,
    pub name: String,
    pub count: usize,
    pub means: Vec<FieldMean>,
    pub recommendation: String,
}

/// Everything a segmentation request returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentationResult {
    pub run_id: RunId,
    pub assignment: ClusterAssignment,
    pub clusters: Vec<ClusterReport>,
    pub kpis: HerdKpis,
    pub feature_names: Vec<String>,
    pub dendrogram: Dendrogram,
    /// Numeric fields whose missing values were filled with batch medians.
    pub imputed_fields: Vec<String>,
    pub labeled_records: Vec<LabeledRecord>,
}

impl From<&RunSnapshot> for SegmentationResult {
    fn from(snapshot: &RunSnapshot) -> Self {
        let clusters = snapshot
            .summaries
            .clusters
            .iter()
            .map(|summary| {
                let rec = snapshot.recommendation_for(summary.cluster_id);
                ClusterReport {
                    cluster_id: summary.cluster_id,
                    name: rec.map(|r| r.name.clone()).unwrap_or_default(),
                    count: summary.count,
                    means: summary.means.clone(),
                    recommendation: rec.map(|r| r.recommendation.clone()).unwrap_or_default(),
                }
            })
            .collect();

        Self {
            run_id: snapshot.run_id,
            assignment: snapshot.assignment.clone(),
            clusters,
            kpis: snapshot.summaries.kpis,
            feature_names: snapshot.matrix.feature_names().to_vec(),
            dendrogram: snapshot.dendrogram.clone(),
            imputed_fields: snapshot.imputed_fields.clone(),
            labeled_records: snapshot.labeled_records(),
        }
    }
}

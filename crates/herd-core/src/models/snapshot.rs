use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    ClusterAssignment, CleanRecord, Dendrogram, FeatureMatrix, LabeledRecord, Recommendation,
    SummarySet,
};
use crate::schema::HerdSchema;

/// Identifier of one completed segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Every artifact of one completed segmentation, built in full before it
/// is published. All parts derive from the same input batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub run_id: RunId,
    pub created_at: DateTime<Utc>,
    pub schema: HerdSchema,
    pub matrix: FeatureMatrix,
    pub dendrogram: Dendrogram,
    pub assignment: ClusterAssignment,
    pub summaries: SummarySet,
    pub recommendations: Vec<Recommendation>,
    pub records: Vec<CleanRecord>,
    pub imputed_fields: Vec<String>,
}

impl RunSnapshot {
    /// Clean records joined with their group labels, in input order.
    pub fn labeled_records(&self) -> Vec<LabeledRecord> {
        self.records
            .iter()
            .zip(self.assignment.labels.iter())
            .map(|(record, &cluster_id)| LabeledRecord {
                record: record.clone(),
                cluster_id,
            })
            .collect()
    }

    pub fn recommendation_for(&self, cluster_id: usize) -> Option<&Recommendation> {
        self.recommendations
            .iter()
            .find(|r| r.cluster_id == cluster_id)
    }
}

use serde::{Deserialize, Serialize};

/// Mean of one field over a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMean {
    pub field: String,
    pub mean: f64,
}

/// Per-group statistics over original-scale values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: usize,
    pub count: usize,
    /// Means in schema order: numeric fields, then boolean fields.
    pub means: Vec<FieldMean>,
}

impl ClusterSummary {
    pub fn mean(&self, field: &str) -> Option<f64> {
        self.means.iter().find(|m| m.field == field).map(|m| m.mean)
    }
}

/// Herd-wide averages, computed over every record regardless of group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HerdKpis {
    #[serde(rename = "average_Milk_Yield")]
    pub average_milk_yield: f64,
    #[serde(rename = "average_Fertility_Score")]
    pub average_fertility_score: f64,
    #[serde(rename = "average_Parasite_Load_Index")]
    pub average_parasite_load_index: f64,
    #[serde(rename = "average_Remaining_Months")]
    pub average_remaining_months: f64,
}

/// All group summaries of one segmentation plus the herd KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySet {
    /// Fields carried by every summary's `means`, in order.
    pub fields: Vec<String>,
    /// One summary per label, ordered by `cluster_id`.
    pub clusters: Vec<ClusterSummary>,
    pub kpis: HerdKpis,
}

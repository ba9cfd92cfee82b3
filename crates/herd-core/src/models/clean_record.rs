use serde::{Deserialize, Serialize};

/// A record after coercion and imputation, holding original-scale values
/// aligned with the schema's numeric, boolean and categorical field lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub id: String,
    pub numeric: Vec<f64>,
    pub boolean: Vec<u8>,
    pub categorical: Vec<String>,
}

/// A clean record joined with its group label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRecord {
    #[serde(flatten)]
    pub record: CleanRecord,
    pub cluster_id: usize,
}

//! Data model of a segmentation run.

mod assignment;
mod clean_record;
mod dendrogram;
mod feature_matrix;
mod recommendation;
mod result;
mod snapshot;
mod summary;

pub use assignment::ClusterAssignment;
pub use clean_record::{CleanRecord, LabeledRecord};
pub use dendrogram::{Dendrogram, DendrogramNode};
pub use feature_matrix::FeatureMatrix;
pub use recommendation::Recommendation;
pub use result::{ClusterReport, SegmentationResult};
pub use snapshot::{RunId, RunSnapshot};
pub use summary::{ClusterSummary, FieldMean, HerdKpis, SummarySet};

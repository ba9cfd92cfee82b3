//! # herd-core
//!
//! Foundation crate for the herd segmentation engine.
//! Defines the record schema, models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod record;
pub mod schema;
pub mod stats;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HerdConfig;
pub use errors::{HerdError, HerdResult};
pub use models::{
    ClusterAssignment, ClusterReport, ClusterSummary, Dendrogram, DendrogramNode, FeatureMatrix,
    Recommendation, RunId, RunSnapshot, SegmentationResult,
};
pub use record::{AnimalRecord, RawValue, RecordBatch};
pub use schema::HerdSchema;

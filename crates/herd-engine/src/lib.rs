//! # herd-engine
//!
//! Segmentation pipeline (encode → link → cut → summarize → recommend),
//! the latest-run cache, and read-only views for dendrogram, stability and
//! export queries.

pub mod cache;
pub mod engine;
pub mod export;
pub mod runtime;

pub use cache::RunCache;
pub use engine::SegmentationEngine;
pub use export::{AssignmentRow, RecommendationRow};

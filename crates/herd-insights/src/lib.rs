//! # herd-insights
//!
//! Turns a segmentation into something a herd manager can act on:
//! per-group means on the original scale, herd-wide KPIs, and a name plus
//! management guidance for every group.

pub mod kpis;
pub mod recommendation;
pub mod summarizer;

pub use kpis::herd_kpis;
pub use recommendation::RecommendationEngine;
pub use summarizer::ClusterSummarizer;

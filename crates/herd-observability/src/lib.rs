//! # herd-observability
//!
//! Tracing subscriber setup, per-operation span macros, and structured log
//! events for the segmentation pipeline.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter, spans};

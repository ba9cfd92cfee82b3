//! # herd-encoding
//!
//! Turns a batch of raw herd records into a fixed-width numeric feature
//! matrix: numeric fields standardized, boolean flags as 0/1, categories
//! one-hot encoded from the values present in the batch.

pub mod coerce;
pub mod encoder;
pub mod impute;
pub mod one_hot;
pub mod standardize;

pub use encoder::{EncodedBatch, FeatureEncoder, SchemaReport, PREVIEW_ROWS};

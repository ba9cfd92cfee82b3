//! Error taxonomy.
//!
//! Schema and input failures are raised before or during a segmentation and
//! never yield partial results. `NotAvailable` is the non-fatal answer to a
//! derived query issued before any segmentation completed.

mod clustering_error;
mod input_error;
mod schema_error;

pub use clustering_error::ClusteringError;
pub use input_error::InputError;
pub use schema_error::SchemaError;

use crate::models::RunId;

/// Top-level error for every herd engine operation.
#[derive(Debug, thiserror::Error)]
pub enum HerdError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Clustering(#[from] ClusteringError),

    #[error("{query} not available: no segmentation has completed yet")]
    NotAvailable { query: String },

    #[error("run {requested} was superseded by run {current}")]
    RunSuperseded { requested: RunId, current: RunId },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    #[error("runtime error: {0}")]
    RuntimeError(String),
}

impl HerdError {
    /// Shorthand for a `NotAvailable` error on the named query.
    pub fn not_available(query: impl Into<String>) -> Self {
        Self::NotAvailable {
            query: query.into(),
        }
    }

    /// Whether this is the non-fatal "no run yet" condition.
    pub fn is_not_available(&self) -> bool {
        matches!(self, Self::NotAvailable { .. })
    }
}

pub type HerdResult<T> = Result<T, HerdError>;

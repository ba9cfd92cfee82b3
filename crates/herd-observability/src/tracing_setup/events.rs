//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed segmentation.
pub fn segmentation_completed(run_id: &str, records: usize, k: usize, features: usize) {
    tracing::info!(
        event = "segmentation_completed",
        run_id = %run_id,
        records = records,
        k = k,
        features = features,
        "segmentation completed"
    );
}

/// Log median imputation of missing numeric values.
pub fn imputation_applied(fields: &[String]) {
    tracing::warn!(
        event = "imputation_applied",
        fields = ?fields,
        "missing numeric values imputed with batch medians"
    );
}

/// Log replacement of the cached run.
pub fn snapshot_replaced(run_id: &str, previous: Option<&str>) {
    tracing::info!(
        event = "snapshot_replaced",
        run_id = %run_id,
        previous = ?previous,
        "run snapshot published"
    );
}

/// Log a completed stability comparison.
pub fn comparison_completed(run_id: &str, ks: &[usize]) {
    tracing::info!(
        event = "comparison_completed",
        run_id = %run_id,
        ks = ?ks,
        "stability comparison completed"
    );
}

/// Log a derived query issued before any run.
pub fn query_unavailable(query: &str) {
    tracing::debug!(
        event = "query_unavailable",
        query = %query,
        "no segmentation available"
    );
}

use crate::errors::HerdResult;
use crate::models::{Dendrogram, RunId, SegmentationResult};
use crate::record::RecordBatch;

/// Entry point a transport layer drives: segment a batch, then query the
/// latest run.
pub trait ISegmenter: Send + Sync {
    /// Segment `batch` into `k` groups, or the configured default.
    fn segment(&self, batch: &RecordBatch, k: Option<usize>) -> HerdResult<SegmentationResult>;

    /// Merge tree of the latest run.
    fn dendrogram(&self) -> HerdResult<Dendrogram>;

    /// Identifier of the latest run.
    fn current_run(&self) -> HerdResult<RunId>;
}

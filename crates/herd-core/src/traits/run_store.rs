use std::sync::Arc;

use crate::errors::HerdResult;
use crate::models::RunSnapshot;

/// Holder of the most recent completed segmentation.
///
/// `put` publishes a fully built snapshot in one step; `get` never observes
/// a partially written one.
pub trait IRunStore: Send + Sync {
    /// Replace any prior snapshot, returning the one replaced.
    fn put(&self, snapshot: Arc<RunSnapshot>) -> HerdResult<Option<Arc<RunSnapshot>>>;

    /// The current snapshot, or `None` before the first run.
    fn get(&self) -> HerdResult<Option<Arc<RunSnapshot>>>;
}

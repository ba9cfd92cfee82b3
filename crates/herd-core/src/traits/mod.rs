mod run_store;
mod segmenter;

pub use run_store::IRunStore;
pub use segmenter::ISegmenter;

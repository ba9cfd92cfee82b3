//! # herd-clustering
//!
//! Agglomerative clustering under Ward's minimum-variance criterion,
//! cutting the resulting dendrogram into `k` groups, and chance-corrected
//! agreement between cuts at different group counts.

pub mod agreement;
pub mod cut;
pub mod dissimilarity;
pub mod stability;
pub mod union_find;
pub mod ward;

pub use agreement::adjusted_rand_index;
pub use cut::TreeCutter;
pub use stability::{parse_group_counts, StabilityComparator, StabilityReport};
pub use ward::WardLinkageBuilder;

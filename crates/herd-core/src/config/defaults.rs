// Single source of truth for all default values.

// --- Segmentation ---
pub const DEFAULT_GROUP_COUNT: usize = 4;
pub const DEFAULT_PARALLEL_SEARCH_MIN_CLUSTERS: usize = 64;

// --- Comparison ---
pub const DEFAULT_COMPARE_GROUP_COUNTS: [usize; 3] = [3, 4, 5];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

//! Span definitions per operation: segmentation, linkage, comparison, export.

/// Create a segmentation span.
#[macro_export]
macro_rules! segment_span {
    ($records:expr, $k:expr) => {
        tracing::info_span!("herd.segment", records = $records, k = $k)
    };
}

/// Create a linkage span.
#[macro_export]
macro_rules! linkage_span {
    ($records:expr, $width:expr) => {
        tracing::info_span!("herd.linkage", records = $records, width = $width)
    };
}

/// Create a comparison span.
#[macro_export]
macro_rules! compare_span {
    ($ks:expr) => {
        tracing::info_span!("herd.compare", ks = ?$ks)
    };
}

/// Create an export span.
#[macro_export]
macro_rules! export_span {
    ($kind:expr) => {
        tracing::info_span!("herd.export", kind = %$kind)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SEGMENT: &str = "herd.segment";
    pub const LINKAGE: &str = "herd.linkage";
    pub const COMPARE: &str = "herd.compare";
    pub const EXPORT: &str = "herd.export";
}

use herd_core::config::ObservabilityConfig;
use herd_observability::{events, init_tracing, init_tracing_with_filter, spans};

#[test]
fn second_init_reports_existing_subscriber() {
    let first = init_tracing(&ObservabilityConfig::default());
    let second = init_tracing_with_filter("debug");
    // Whichever ran first installed the global subscriber.
    assert!(first);
    assert!(!second);
}

#[test]
fn events_and_spans_emit_without_subscriber_panics() {
    let span = herd_observability::segment_span!(12usize, 4usize);
    let _guard = span.enter();
    events::segmentation_completed("run", 12, 4, 15);
    events::imputation_applied(&["Age".to_string()]);
    events::snapshot_replaced("run", None);
    events::comparison_completed("run", &[3, 4]);
    events::query_unavailable("compare");
    assert_eq!(spans::names::SEGMENT, "herd.segment");
}

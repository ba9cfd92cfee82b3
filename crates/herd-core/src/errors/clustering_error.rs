/// Internal consistency failures of the clustering stage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClusteringError {
    #[error("merge {step} height {current} decreased from {previous}")]
    NonMonotonicMerge {
        step: usize,
        previous: f64,
        current: f64,
    },

    #[error("dendrogram over {leaves} leaves has {nodes} merges")]
    MalformedDendrogram { leaves: usize, nodes: usize },
}

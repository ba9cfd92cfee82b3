use serde::{Deserialize, Serialize};

use crate::errors::ClusteringError;

/// One merge of two earlier clusters.
///
/// Leaves are `0..n`; merge `i` creates cluster `n + i`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DendrogramNode {
    /// Identifier of the cluster this merge creates.
    pub id: usize,
    /// Lower of the two merged cluster identifiers.
    pub left: usize,
    /// Higher of the two merged cluster identifiers.
    pub right: usize,
    /// Merge height, non-negative.
    pub distance: f64,
    /// Number of leaves under the new cluster.
    pub size: usize,
}

/// Full merge history over `n_leaves` records, in merge order.
///
/// Deserialization runs the same checks as [`Dendrogram::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDendrogram")]
pub struct Dendrogram {
    n_leaves: usize,
    nodes: Vec<DendrogramNode>,
}

#[derive(Deserialize)]
struct RawDendrogram {
    n_leaves: usize,
    nodes: Vec<DendrogramNode>,
}

impl TryFrom<RawDendrogram> for Dendrogram {
    type Error = ClusteringError;

    fn try_from(raw: RawDendrogram) -> Result<Self, Self::Error> {
        Self::new(raw.n_leaves, raw.nodes)
    }
}

impl Dendrogram {
    /// Wrap a merge history, checking its structural invariants.
    pub fn new(n_leaves: usize, nodes: Vec<DendrogramNode>) -> Result<Self, ClusteringError> {
        let dendrogram = Self { n_leaves, nodes };
        dendrogram.validate()?;
        Ok(dendrogram)
    }

    pub fn n_leaves(&self) -> usize {
        self.n_leaves
    }

    pub fn nodes(&self) -> &[DendrogramNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Merge heights in merge order.
    pub fn heights(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.distance).collect()
    }

    /// Rows of `[left, right, distance, size]`, the conventional linkage
    /// matrix layout consumed by dendrogram plotting tools.
    pub fn linkage_rows(&self) -> Vec<[f64; 4]> {
        self.nodes
            .iter()
            .map(|n| [n.left as f64, n.right as f64, n.distance, n.size as f64])
            .collect()
    }

    fn validate(&self) -> Result<(), ClusteringError> {
        let malformed = || ClusteringError::MalformedDendrogram {
            leaves: self.n_leaves,
            nodes: self.nodes.len(),
        };
        if self.n_leaves == 0 || self.nodes.len() != self.n_leaves - 1 {
            return Err(malformed());
        }
        // Leaf sizes are 1; each merge appends its own size. A cluster may
        // be a child at most once.
        let total = 2 * self.n_leaves - 1;
        let mut sizes = vec![1_usize; self.n_leaves];
        sizes.reserve(self.nodes.len());
        let mut consumed = vec![false; total];
        let mut previous = 0.0_f64;
        for (step, node) in self.nodes.iter().enumerate() {
            let id = self.n_leaves + step;
            if node.id != id || node.left >= node.right || node.right >= id {
                return Err(malformed());
            }
            if consumed[node.left] || consumed[node.right] {
                return Err(malformed());
            }
            if node.size != sizes[node.left] + sizes[node.right] {
                return Err(malformed());
            }
            consumed[node.left] = true;
            consumed[node.right] = true;
            sizes.push(node.size);
            if node.distance < previous {
                return Err(ClusteringError::NonMonotonicMerge {
                    step,
                    previous,
                    current: node.distance,
                });
            }
            previous = node.distance;
        }
        Ok(())
    }
}

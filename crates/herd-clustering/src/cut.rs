//! Cut a dendrogram into a fixed number of groups.

use herd_core::errors::{HerdResult, InputError};
use herd_core::models::{ClusterAssignment, Dendrogram};

use crate::union_find::UnionFind;

/// Replays the first `n - k` merges of a dendrogram to form `k` groups.
pub struct TreeCutter;

impl TreeCutter {
    /// Group label per leaf for `k` groups.
    ///
    /// Labels are `0..k`, numbered in order of each group's smallest leaf
    /// index, so the labelling is canonical for a given partition.
    pub fn cut_labels(dendrogram: &Dendrogram, k: usize) -> HerdResult<Vec<usize>> {
        let n = dendrogram.n_leaves();
        if k < 1 || k > n {
            return Err(InputError::InvalidGroupCount { k, n }.into());
        }

        let mut uf = UnionFind::new(n);
        // Any leaf under each cluster id seen so far.
        let mut representative: Vec<usize> = (0..n).collect();
        for node in &dendrogram.nodes()[..n - k] {
            let root = uf.union(representative[node.left], representative[node.right]);
            representative.push(root);
        }

        let mut label_of_root = vec![usize::MAX; n];
        let mut next = 0;
        let labels = (0..n)
            .map(|leaf| {
                let root = uf.find(leaf);
                if label_of_root[root] == usize::MAX {
                    label_of_root[root] = next;
                    next += 1;
                }
                label_of_root[root]
            })
            .collect();
        Ok(labels)
    }

    /// Assignment pairing each identifier in `ids` (record order) with its
    /// group label.
    pub fn cut(dendrogram: &Dendrogram, ids: &[String], k: usize) -> HerdResult<ClusterAssignment> {
        if ids.len() != dendrogram.n_leaves() {
            return Err(InputError::AssignmentLengthMismatch {
                expected: dendrogram.n_leaves(),
                got: ids.len(),
            }
            .into());
        }
        let labels = Self::cut_labels(dendrogram, k)?;
        Ok(ClusterAssignment {
            k,
            ids: ids.to_vec(),
            labels,
        })
    }
}

//! Working dissimilarity structure for agglomerative clustering.
//!
//! Holds squared Ward dissimilarities between cluster slots. Slot `i`
//! starts as record `i`; a merge reuses one slot of the pair.

use rayon::prelude::*;

/// Nearest pair found by a search: cost plus the two cluster identifiers
/// (lower first) and the slots holding them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub cost: f64,
    pub lo_id: usize,
    pub hi_id: usize,
    pub lo_slot: usize,
    pub hi_slot: usize,
}

impl Candidate {
    /// Total order used for selection: cost, then lower id, then higher id.
    fn precedes(&self, other: &Candidate) -> bool {
        self.cost
            .total_cmp(&other.cost)
            .then(self.lo_id.cmp(&other.lo_id))
            .then(self.hi_id.cmp(&other.hi_id))
            .is_lt()
    }

    fn min(self, other: Candidate) -> Candidate {
        if other.precedes(&self) {
            other
        } else {
            self
        }
    }
}

/// Dense symmetric matrix of squared dissimilarities.
#[derive(Debug, Clone)]
pub struct DissimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DissimilarityMatrix {
    /// Squared Euclidean distances between every pair of points.
    pub fn from_points(points: &[Vec<f64>]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d: f64 = points[i]
                    .iter()
                    .zip(points[j].iter())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum();
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
        self.data[j * self.n + i] = value;
    }

    /// Minimal-cost pair among `active` slots, whose cluster identifiers are
    /// `ids[slot]`. `None` with fewer than two active slots.
    ///
    /// The parallel and sequential searches select the same pair.
    pub fn nearest_pair(&self, active: &[usize], ids: &[usize], parallel: bool) -> Option<Candidate> {
        let row_best = |pos: usize| -> Option<Candidate> {
            let i = active[pos];
            active[pos + 1..]
                .iter()
                .map(|&j| {
                    let (lo_slot, hi_slot) = if ids[i] < ids[j] { (i, j) } else { (j, i) };
                    Candidate {
                        cost: self.get(i, j),
                        lo_id: ids[lo_slot],
                        hi_id: ids[hi_slot],
                        lo_slot,
                        hi_slot,
                    }
                })
                .reduce(Candidate::min)
        };

        if parallel {
            (0..active.len())
                .into_par_iter()
                .filter_map(row_best)
                .reduce_with(Candidate::min)
        } else {
            (0..active.len()).filter_map(row_best).reduce(Candidate::min)
        }
    }
}

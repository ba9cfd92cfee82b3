use serde::{Deserialize, Serialize};

/// Group label per record, for one requested group count `k`.
///
/// `ids[i]` carries `labels[i]`; labels are in `[0, k)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterAssignment {
    pub k: usize,
    pub ids: Vec<String>,
    pub labels: Vec<usize>,
}

impl ClusterAssignment {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Record count per label, indexed by label. Has at least `k` entries
    /// and grows to cover any label at or above `k`.
    pub fn counts(&self) -> Vec<usize> {
        let width = self
            .labels
            .iter()
            .map(|&label| label + 1)
            .max()
            .unwrap_or(0)
            .max(self.k);
        let mut counts = vec![0; width];
        for &label in &self.labels {
            counts[label] += 1;
        }
        counts
    }

    /// Number of distinct labels actually used.
    pub fn distinct_labels(&self) -> usize {
        self.counts().iter().filter(|&&c| c > 0).count()
    }

    pub fn label_of(&self, id: &str) -> Option<usize> {
        self.ids
            .iter()
            .position(|candidate| candidate == id)
            .map(|i| self.labels[i])
    }

    /// `(identifier, label)` pairs in record order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, usize)> {
        self.ids
            .iter()
            .map(String::as_str)
            .zip(self.labels.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_lookup() {
        let a = ClusterAssignment {
            k: 2,
            ids: vec!["a".into(), "b".into(), "c".into()],
            labels: vec![0, 1, 0],
        };
        assert_eq!(a.counts(), vec![2, 1]);
        assert_eq!(a.distinct_labels(), 2);
        assert_eq!(a.label_of("b"), Some(1));
        assert_eq!(a.label_of("z"), None);
        assert_eq!(a.pairs().collect::<Vec<_>>(), vec![("a", 0), ("b", 1), ("c", 0)]);
    }

    #[test]
    fn counts_cover_labels_beyond_k() {
        let a = ClusterAssignment {
            k: 1,
            ids: vec!["a".into(), "b".into()],
            labels: vec![0, 3],
        };
        assert_eq!(a.counts(), vec![1, 0, 0, 1]);
        assert_eq!(a.distinct_labels(), 2);
    }
}

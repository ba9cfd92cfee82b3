//! Property tests for Ward linkage, tree cutting and agreement scoring.

use herd_clustering::{adjusted_rand_index, TreeCutter, WardLinkageBuilder};
use herd_core::models::FeatureMatrix;
use proptest::prelude::*;

fn matrix_strategy() -> impl Strategy<Value = FeatureMatrix> {
    (2usize..24, 1usize..4).prop_flat_map(|(n, width)| {
        prop::collection::vec(prop::collection::vec(-50.0f64..50.0, width), n).prop_map(
            move |rows| {
                let names = (0..width).map(|i| format!("f{i}")).collect();
                FeatureMatrix::new(names, rows).unwrap()
            },
        )
    })
}

proptest! {
    #[test]
    fn prop_linkage_has_n_minus_one_monotone_merges(matrix in matrix_strategy()) {
        let d = WardLinkageBuilder::default().build(&matrix).unwrap();
        prop_assert_eq!(d.len(), matrix.n_rows() - 1);
        let heights = d.heights();
        prop_assert!(heights.iter().all(|h| *h >= 0.0));
        prop_assert!(heights.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(d.nodes().last().unwrap().size, matrix.n_rows());
    }

    #[test]
    fn prop_cut_yields_exactly_k_labels(matrix in matrix_strategy(), pick in 0usize..1000) {
        let d = WardLinkageBuilder::default().build(&matrix).unwrap();
        let n = matrix.n_rows();
        let k = 1 + pick % n;
        let labels = TreeCutter::cut_labels(&d, k).unwrap();
        let mut distinct = labels.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(distinct, (0..k).collect::<Vec<_>>());
        // Label 0 always holds the first record; new labels appear in order.
        prop_assert_eq!(labels[0], 0);
        let mut next = 0;
        for &l in &labels {
            prop_assert!(l <= next);
            if l == next {
                next += 1;
            }
        }
    }

    #[test]
    fn prop_ari_is_symmetric_and_bounded(
        a in prop::collection::vec(0usize..4, 2..40),
        seed in prop::collection::vec(0usize..4, 40),
    ) {
        let b: Vec<usize> = seed[..a.len()].to_vec();
        let ab = adjusted_rand_index(&a, &b).unwrap();
        let ba = adjusted_rand_index(&b, &a).unwrap();
        prop_assert!((ab - ba).abs() < 1e-12);
        prop_assert!((-1.0..=1.0 + 1e-12).contains(&ab));
        prop_assert_eq!(adjusted_rand_index(&a, &a).unwrap(), 1.0);
    }
}

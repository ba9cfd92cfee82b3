//! Property tests for herd-encoding.

use proptest::prelude::*;

use herd_encoding::FeatureEncoder;

proptest! {
    #[test]
    fn prop_every_row_has_the_same_width(n in 2usize..40, seed in 0u64..500) {
        let batch = test_fixtures::synthetic_herd(n, seed);
        let encoded = FeatureEncoder::default().encode(&batch).unwrap();
        let width = encoded.matrix.width();
        prop_assert_eq!(encoded.matrix.n_rows(), n);
        for row in encoded.matrix.rows() {
            prop_assert_eq!(row.len(), width);
        }
    }

    #[test]
    fn prop_features_are_finite(n in 2usize..40, seed in 0u64..500) {
        let batch = test_fixtures::synthetic_herd(n, seed);
        let encoded = FeatureEncoder::default().encode(&batch).unwrap();
        prop_assert!(encoded.matrix.first_non_finite().is_none());
    }

    #[test]
    fn prop_one_hot_rows_sum_to_one(n in 2usize..40, seed in 0u64..500) {
        let batch = test_fixtures::synthetic_herd(n, seed);
        let encoded = FeatureEncoder::default().encode(&batch).unwrap();
        // 12 numeric + 1 boolean columns precede the breed indicators.
        for row in encoded.matrix.rows() {
            let total: f64 = row[13..].iter().sum();
            prop_assert_eq!(total, 1.0);
        }
    }
}

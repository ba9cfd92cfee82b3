//! Recommendations are a pure function of the summary values.

use herd_core::constants::fields;
use herd_core::models::{ClusterSummary, FieldMean};
use herd_insights::RecommendationEngine;
use proptest::prelude::*;

const RULE_FIELDS: [&str; 9] = [
    fields::WEIGHT_KG,
    fields::MILK_YIELD,
    fields::FERTILITY_SCORE,
    fields::RUMINATION_MINUTES,
    fields::EAR_TEMPERATURE_C,
    fields::PARASITE_LOAD_INDEX,
    fields::RESPIRATION_RATE_BPM,
    fields::FORAGE_QUALITY_INDEX,
    fields::MOVEMENT_SCORE,
];

fn summaries_strategy() -> impl Strategy<Value = Vec<ClusterSummary>> {
    prop::collection::vec(prop::collection::vec(0.0f64..60.0, RULE_FIELDS.len()), 1..8).prop_map(
        |groups| {
            groups
                .into_iter()
                .enumerate()
                .map(|(cluster_id, values)| ClusterSummary {
                    cluster_id,
                    count: 1,
                    means: RULE_FIELDS
                        .iter()
                        .zip(values)
                        .map(|(field, mean)| FieldMean {
                            field: field.to_string(),
                            mean,
                        })
                        .collect(),
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn prop_order_of_groups_does_not_matter(
        summaries in summaries_strategy(),
        rotate in 0usize..8,
    ) {
        let engine = RecommendationEngine::new();
        let forward = engine.recommend(&summaries);

        let mut shuffled = summaries.clone();
        let by = rotate % shuffled.len();
        shuffled.rotate_left(by);
        shuffled.reverse();
        let mut reordered = engine.recommend(&shuffled);
        reordered.sort_by_key(|r| r.cluster_id);

        prop_assert_eq!(forward, reordered);
    }

    #[test]
    fn prop_every_group_gets_name_and_action(summaries in summaries_strategy()) {
        for rec in RecommendationEngine::new().recommend(&summaries) {
            prop_assert!(!rec.name.is_empty());
            prop_assert!(!rec.recommendation.is_empty());
        }
    }
}

//! Integration tests for herd-encoding against the golden herds.

use herd_core::errors::HerdError;
use herd_core::stats;
use herd_encoding::FeatureEncoder;

#[test]
fn dirty_cells_are_cleaned_and_imputed() {
    let herd = test_fixtures::dirty_values();
    let encoded = FeatureEncoder::default().encode(&herd.batch()).unwrap();

    assert_eq!(
        encoded.imputed_fields,
        vec!["Age", "Weight_kg", "Rumination_Minutes_Per_Day"]
    );

    let m1 = &encoded.records[0];
    assert_eq!(m1.numeric[1], 1210.0, "thousands separator removed");
    assert_eq!(m1.numeric[2], 30.5, "surrounding whitespace removed");
    assert_eq!(m1.numeric[7], 1200.0, "internal whitespace removed");

    let m2 = &encoded.records[1];
    assert_eq!(m2.numeric[0], 5.0, "Age imputed with median of 4, 6, 5");
    assert_eq!(m2.numeric[4], 480.0, "Rumination imputed with median");

    let m3 = &encoded.records[2];
    assert_eq!(m3.numeric[1], 1210.0, "Weight imputed with median");

    let vaccinated: Vec<u8> = encoded.records.iter().map(|r| r.boolean[0]).collect();
    assert_eq!(vaccinated, vec![1, 0, 1, 0]);

    assert_eq!(encoded.records[3].categorical[0], "unknown");
}

#[test]
fn one_hot_width_follows_batch_categories() {
    let herd = test_fixtures::dirty_values();
    let encoded = FeatureEncoder::default().encode(&herd.batch()).unwrap();
    let names = encoded.matrix.feature_names();
    assert_eq!(names.len(), 12 + 1 + 3);
    assert_eq!(
        &names[13..],
        &["Breed_Holstein", "Breed_Jersey", "Breed_unknown"]
    );

    let profiles = FeatureEncoder::default()
        .encode(&test_fixtures::three_profiles().batch())
        .unwrap();
    assert_eq!(profiles.matrix.width(), 12 + 1 + 3);
    assert_eq!(profiles.matrix.feature_names()[13], "Breed_Holstein");
}

#[test]
fn standardized_columns_are_centred() {
    let herd = test_fixtures::three_profiles();
    let encoded = FeatureEncoder::default().encode(&herd.batch()).unwrap();
    for col in 0..12 {
        let column: Vec<f64> = encoded.matrix.rows().iter().map(|r| r[col]).collect();
        assert!(stats::mean(&column).unwrap().abs() < 1e-9, "column {col}");
        assert!((stats::population_std(&column).unwrap() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn missing_fertility_column_fails_before_encoding() {
    let herd = test_fixtures::three_profiles();
    let records = herd
        .records
        .into_iter()
        .map(|mut r| {
            r.remove("Fertility_Score");
            r
        })
        .collect();
    let batch = herd_core::RecordBatch::from_records(records);
    match FeatureEncoder::default().encode(&batch) {
        Err(HerdError::Schema(e)) => {
            assert_eq!(e.missing_fields(), &["Fertility_Score".to_string()])
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn encoding_does_not_mutate_input() {
    let batch = test_fixtures::dirty_values().batch();
    let before = batch.clone();
    FeatureEncoder::default().encode(&batch).unwrap();
    assert_eq!(batch, before);
}

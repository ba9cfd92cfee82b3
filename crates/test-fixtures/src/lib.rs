//! Test fixture loader for golden herd datasets, plus deterministic record
//! builders shared by tests across crates.

use std::path::PathBuf;

use herd_core::constants::fields;
use herd_core::{AnimalRecord, RawValue, RecordBatch};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the golden datasets.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A golden herd: raw records plus the group count the scenario is built for.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenHerd {
    pub description: String,
    pub k: usize,
    pub records: Vec<AnimalRecord>,
}

impl GoldenHerd {
    pub fn batch(&self) -> RecordBatch {
        RecordBatch::from_records(self.records.clone())
    }
}

/// Twelve animals in three well-separated profiles (C01-C04 high yield,
/// C05-C08 parasite burden, C09-C12 heat stress).
pub fn three_profiles() -> GoldenHerd {
    load_fixture("herd_three_profiles.json")
}

/// Four animals with blank, unparseable, and thousands-separated cells.
pub fn dirty_values() -> GoldenHerd {
    load_fixture("herd_dirty_values.json")
}

/// A complete default-schema record with unremarkable baseline values.
pub fn baseline_animal(id: &str) -> AnimalRecord {
    AnimalRecord::new()
        .with(fields::ID, id)
        .with(fields::BREED, "Holstein")
        .with(fields::AGE, 4.0)
        .with(fields::WEIGHT_KG, 550.0)
        .with(fields::MILK_YIELD, 25.0)
        .with(fields::FERTILITY_SCORE, 0.7)
        .with(fields::RUMINATION_MINUTES, 450.0)
        .with(fields::EAR_TEMPERATURE_C, 38.7)
        .with(fields::PARASITE_LOAD_INDEX, 1.5)
        .with(fields::FECAL_EGG_COUNT, 300.0)
        .with(fields::RESPIRATION_RATE_BPM, 30.0)
        .with(fields::FORAGE_QUALITY_INDEX, 0.7)
        .with(fields::VACCINATION_UP_TO_DATE, "yes")
        .with(fields::MOVEMENT_SCORE, 5.0)
        .with(fields::REMAINING_MONTHS, 36.0)
}

/// Baseline animals `A0, A1, ...` differing only in milk yield.
pub fn milk_yield_batch(yields: &[f64]) -> RecordBatch {
    let records = yields
        .iter()
        .enumerate()
        .map(|(i, &y)| baseline_animal(&format!("A{i}")).with(fields::MILK_YIELD, y))
        .collect();
    RecordBatch::from_records(records)
}

/// Deterministic pseudo-random herd of `n` animals across three breeds.
pub fn synthetic_herd(n: usize, seed: u64) -> RecordBatch {
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    let mut next = move || {
        // 64-bit LCG; the top 53 bits give a uniform value in [0, 1).
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    let breeds = ["Holstein", "Jersey", "Angus"];
    let records = (0..n)
        .map(|i| {
            let profile = i % 3;
            let jitter = |base: f64, spread: f64, r: f64| base + spread * (r - 0.5);
            let mut record = baseline_animal(&format!("S{i:04}"));
            record.insert(fields::BREED, RawValue::from(breeds[profile]));
            record.insert(fields::AGE, RawValue::from(jitter(4.0, 4.0, next()).round()));
            record.insert(
                fields::WEIGHT_KG,
                RawValue::from(jitter(480.0 + 60.0 * profile as f64, 60.0, next())),
            );
            record.insert(
                fields::MILK_YIELD,
                RawValue::from(jitter(34.0 - 9.0 * profile as f64, 6.0, next())),
            );
            record.insert(fields::FERTILITY_SCORE, RawValue::from(jitter(0.65, 0.3, next())));
            record.insert(
                fields::PARASITE_LOAD_INDEX,
                RawValue::from(jitter(1.0 + profile as f64, 1.0, next())),
            );
            record.insert(
                fields::EAR_TEMPERATURE_C,
                RawValue::from(jitter(38.6 + 0.6 * profile as f64, 0.6, next())),
            );
            record.insert(
                fields::RESPIRATION_RATE_BPM,
                RawValue::from(jitter(28.0 + 7.0 * profile as f64, 6.0, next())),
            );
            record.insert(
                fields::VACCINATION_UP_TO_DATE,
                RawValue::from(if next() < 0.7 { "yes" } else { "no" }),
            );
            record
        })
        .collect();
    RecordBatch::from_records(records)
}

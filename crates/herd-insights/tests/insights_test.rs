//! Summaries and recommendations over the golden herds.

use herd_clustering::{TreeCutter, WardLinkageBuilder};
use herd_core::models::SummarySet;
use herd_encoding::FeatureEncoder;
use herd_insights::{ClusterSummarizer, RecommendationEngine};

fn summarize(batch: &herd_core::RecordBatch, k: usize) -> SummarySet {
    let encoded = FeatureEncoder::default().encode(batch).unwrap();
    let ids: Vec<String> = encoded.records.iter().map(|r| r.id.clone()).collect();
    let dendrogram = WardLinkageBuilder::default().build(&encoded.matrix).unwrap();
    let assignment = TreeCutter::cut(&dendrogram, &ids, k).unwrap();
    ClusterSummarizer::default()
        .summarize(&encoded.records, &assignment)
        .unwrap()
}

#[test]
fn three_profiles_summary_means() {
    let set = summarize(&test_fixtures::three_profiles().batch(), 3);
    assert_eq!(set.clusters.len(), 3);
    assert!(set.clusters.iter().all(|c| c.count == 4));
    assert_eq!(set.fields.len(), 13);
    assert_eq!(set.fields.last().map(String::as_str), Some("Vaccination_Up_To_Date"));

    let close = |a: Option<f64>, b: f64| (a.unwrap() - b).abs() < 1e-9;
    assert!(close(set.clusters[0].mean("Milk_Yield"), 33.9));
    assert!(close(set.clusters[1].mean("Parasite_Load_Index"), 3.875));
    assert!(close(set.clusters[2].mean("Ear_Temperature_C"), 40.15));
    assert!(close(set.clusters[0].mean("Vaccination_Up_To_Date"), 1.0));
    assert!(close(set.clusters[2].mean("Vaccination_Up_To_Date"), 0.75));
}

#[test]
fn three_profiles_recommendations() {
    let set = summarize(&test_fixtures::three_profiles().batch(), 3);
    let recs = RecommendationEngine::new().recommend(&set.clusters);

    assert_eq!(recs[0].name, "High Yielders");
    assert_eq!(
        recs[0].recommendation,
        "Maintain current management and routine monitoring."
    );

    assert_eq!(recs[1].name, "High Parasite Load");
    assert_eq!(
        recs[1].recommendation,
        "Start deworming protocol and rotate pasture; schedule fecal egg count recheck. \
         Improve forage quality; review ration with nutritionist. \
         Conduct reproductive assessment; check minerals and body condition."
    );

    assert_eq!(recs[2].name, "At\u{2011}Risk (Heat/Illness)");
    assert_eq!(
        recs[2].recommendation,
        "Provide shade and cool water; evaluate for fever; consult veterinarian. \
         Monitor rumination; adjust fiber length and feeding schedule. \
         Assess energy balance; consider dietary energy increase."
    );
}

#[test]
fn milk_yield_pairs_name_the_high_group() {
    let batch = test_fixtures::milk_yield_batch(&[10.0, 12.0, 48.0, 50.0]);
    let set = summarize(&batch, 2);
    let recs = RecommendationEngine::new().recommend(&set.clusters);
    assert_eq!(set.clusters[0].mean("Milk_Yield"), Some(11.0));
    assert_eq!(set.clusters[1].mean("Milk_Yield"), Some(49.0));
    assert_eq!(recs[0].name, "Balanced");
    assert!(recs[1].name.contains("High Yielders"));
}

#[test]
fn kpis_cover_whole_herd() {
    let set = summarize(&test_fixtures::three_profiles().batch(), 3);
    let expected_milk = (33.9 + 19.125 + 12.825) / 3.0;
    assert!((set.kpis.average_milk_yield - expected_milk).abs() < 1e-9);
    let expected_months = (46.5 + 27.5 + 52.75) / 3.0;
    assert!((set.kpis.average_remaining_months - expected_months).abs() < 1e-9);
}

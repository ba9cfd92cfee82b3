use std::collections::HashMap;

use herd_core::models::ClusterSummary;
use herd_core::stats;

/// Herd-wide reference levels per field, taken across group means rather
/// than across raw records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HerdReference {
    means: HashMap<String, f64>,
    medians: HashMap<String, f64>,
}

impl HerdReference {
    pub fn from_summaries(summaries: &[ClusterSummary]) -> Self {
        let mut by_field: HashMap<&str, Vec<f64>> = HashMap::new();
        for summary in summaries {
            for m in &summary.means {
                by_field.entry(m.field.as_str()).or_default().push(m.mean);
            }
        }

        let mut reference = Self::default();
        for (field, mut values) in by_field {
            // Fixed summation order keeps the levels independent of group order.
            values.sort_by(|a, b| a.total_cmp(b));
            if let Some(mean) = stats::mean(&values) {
                reference.means.insert(field.to_string(), mean);
            }
            if let Some(median) = stats::median(&values) {
                reference.medians.insert(field.to_string(), median);
            }
        }
        reference
    }

    pub fn mean(&self, field: &str) -> Option<f64> {
        self.means.get(field).copied()
    }

    pub fn median(&self, field: &str) -> Option<f64> {
        self.medians.get(field).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herd_core::models::FieldMean;

    fn summary(cluster_id: usize, milk: f64) -> ClusterSummary {
        ClusterSummary {
            cluster_id,
            count: 1,
            means: vec![FieldMean {
                field: "Milk_Yield".into(),
                mean: milk,
            }],
        }
    }

    #[test]
    fn levels_come_from_group_means() {
        let r = HerdReference::from_summaries(&[
            summary(0, 10.0),
            summary(1, 20.0),
            summary(2, 60.0),
            summary(3, 30.0),
        ]);
        assert_eq!(r.mean("Milk_Yield"), Some(30.0));
        assert_eq!(r.median("Milk_Yield"), Some(25.0));
        assert_eq!(r.mean("Weight_kg"), None);
    }
}

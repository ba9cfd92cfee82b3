//! Herd-wide KPI averages over every record, irrespective of group.

use herd_core::constants::fields;
use herd_core::models::{CleanRecord, HerdKpis};
use herd_core::stats;
use herd_core::HerdSchema;

/// Mean of one numeric field over all records. NaN when the schema does
/// not carry the field or there are no records.
fn field_average(schema: &HerdSchema, records: &[CleanRecord], field: &str) -> f64 {
    let Some(index) = schema.numeric.iter().position(|f| f == field) else {
        return f64::NAN;
    };
    let values: Vec<f64> = records.iter().map(|r| r.numeric[index]).collect();
    stats::mean(&values).unwrap_or(f64::NAN)
}

pub fn herd_kpis(schema: &HerdSchema, records: &[CleanRecord]) -> HerdKpis {
    HerdKpis {
        average_milk_yield: field_average(schema, records, fields::MILK_YIELD),
        average_fertility_score: field_average(schema, records, fields::FERTILITY_SCORE),
        average_parasite_load_index: field_average(schema, records, fields::PARASITE_LOAD_INDEX),
        average_remaining_months: field_average(schema, records, fields::REMAINING_MONTHS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, numeric: Vec<f64>) -> CleanRecord {
        CleanRecord {
            id: id.into(),
            numeric,
            boolean: vec![1],
            categorical: vec!["Holstein".into()],
        }
    }

    #[test]
    fn averages_over_all_records() {
        let schema = HerdSchema::default();
        // Positions of Milk_Yield, Fertility_Score, Parasite_Load_Index and
        // Remaining_Months in the default numeric order.
        let mut a = vec![0.0; 12];
        let mut b = vec![0.0; 12];
        (a[2], a[3], a[6], a[11]) = (30.0, 0.8, 1.0, 40.0);
        (b[2], b[3], b[6], b[11]) = (20.0, 0.6, 3.0, 20.0);
        let kpis = herd_kpis(&schema, &[record("a", a), record("b", b)]);
        assert_eq!(kpis.average_milk_yield, 25.0);
        assert!((kpis.average_fertility_score - 0.7).abs() < 1e-12);
        assert_eq!(kpis.average_parasite_load_index, 2.0);
        assert_eq!(kpis.average_remaining_months, 30.0);
    }

    #[test]
    fn absent_field_is_nan() {
        let schema = HerdSchema::new("id", vec!["x".into()], vec![], vec![]);
        let kpis = herd_kpis(&schema, &[record("a", vec![1.0])]);
        assert!(kpis.average_milk_yield.is_nan());
    }
}

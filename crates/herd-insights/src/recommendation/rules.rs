//! Ordered management rules. Each rule is a pure predicate over one group
//! profile, contributing at most one name token and one action sentence.

use herd_core::constants::fields;
use herd_core::models::ClusterSummary;

use super::reference::HerdReference;

pub const PARASITE_MEDIAN_FACTOR: f64 = 1.2;
pub const HEAT_EAR_TEMPERATURE_C: f64 = 39.5;
pub const HEAT_RESPIRATION_RATE_BPM: f64 = 35.0;

pub const HIGH_YIELDERS: &str = "High Yielders";
pub const HIGH_PARASITE_LOAD: &str = "High Parasite Load";
/// The hyphen is U+2011 NON-BREAKING HYPHEN.
pub const AT_RISK_HEAT_ILLNESS: &str = "At\u{2011}Risk (Heat/Illness)";

pub const DEWORM_ACTION: &str =
    "Start deworming protocol and rotate pasture; schedule fecal egg count recheck.";
pub const FORAGE_ACTION: &str = "Improve forage quality; review ration with nutritionist.";
pub const HEAT_ACTION: &str =
    "Provide shade and cool water; evaluate for fever; consult veterinarian.";
pub const FERTILITY_ACTION: &str =
    "Conduct reproductive assessment; check minerals and body condition.";
pub const RUMINATION_ACTION: &str = "Monitor rumination; adjust fiber length and feeding schedule.";
pub const ENERGY_ACTION: &str = "Assess energy balance; consider dietary energy increase.";

/// One group's means next to the herd reference levels.
pub struct GroupProfile<'a> {
    pub summary: &'a ClusterSummary,
    pub reference: &'a HerdReference,
}

impl GroupProfile<'_> {
    fn value(&self, field: &str) -> Option<f64> {
        self.summary.mean(field)
    }

    /// Group mean and herd mean of `field`, when both exist.
    fn against_mean(&self, field: &str) -> Option<(f64, f64)> {
        Some((self.value(field)?, self.reference.mean(field)?))
    }

    fn against_median(&self, field: &str) -> Option<(f64, f64)> {
        Some((self.value(field)?, self.reference.median(field)?))
    }
}

pub struct Rule {
    pub id: &'static str,
    pub applies: fn(&GroupProfile<'_>) -> bool,
    pub name: Option<&'static str>,
    pub action: Option<&'static str>,
}

fn high_yield(p: &GroupProfile<'_>) -> bool {
    p.against_mean(fields::MILK_YIELD)
        .is_some_and(|(v, mean)| v >= mean)
}

fn parasite_burden(p: &GroupProfile<'_>) -> bool {
    p.against_median(fields::PARASITE_LOAD_INDEX)
        .is_some_and(|(v, median)| v >= PARASITE_MEDIAN_FACTOR * median)
}

fn poor_forage(p: &GroupProfile<'_>) -> bool {
    p.against_median(fields::FORAGE_QUALITY_INDEX)
        .is_some_and(|(v, median)| v < median)
}

fn heat_stress(p: &GroupProfile<'_>) -> bool {
    let ear = p.value(fields::EAR_TEMPERATURE_C);
    let respiration = p.value(fields::RESPIRATION_RATE_BPM);
    matches!(
        (ear, respiration),
        (Some(t), Some(r)) if t > HEAT_EAR_TEMPERATURE_C && r > HEAT_RESPIRATION_RATE_BPM
    )
}

fn low_fertility(p: &GroupProfile<'_>) -> bool {
    p.against_median(fields::FERTILITY_SCORE)
        .is_some_and(|(v, median)| v < median)
}

fn low_rumination(p: &GroupProfile<'_>) -> bool {
    p.against_median(fields::RUMINATION_MINUTES)
        .is_some_and(|(v, median)| v < median)
}

fn energy_deficit(p: &GroupProfile<'_>) -> bool {
    let light = p
        .against_mean(fields::WEIGHT_KG)
        .is_some_and(|(v, mean)| v < mean);
    let restless = p
        .against_mean(fields::MOVEMENT_SCORE)
        .is_some_and(|(v, mean)| v > mean);
    light && restless
}

/// Evaluated in this order; name tokens and actions keep it.
pub const RULES: [Rule; 7] = [
    Rule {
        id: "high_yield",
        applies: high_yield,
        name: Some(HIGH_YIELDERS),
        action: None,
    },
    Rule {
        id: "parasite_burden",
        applies: parasite_burden,
        name: Some(HIGH_PARASITE_LOAD),
        action: Some(DEWORM_ACTION),
    },
    Rule {
        id: "poor_forage",
        applies: poor_forage,
        name: None,
        action: Some(FORAGE_ACTION),
    },
    Rule {
        id: "heat_stress",
        applies: heat_stress,
        name: Some(AT_RISK_HEAT_ILLNESS),
        action: Some(HEAT_ACTION),
    },
    Rule {
        id: "low_fertility",
        applies: low_fertility,
        name: None,
        action: Some(FERTILITY_ACTION),
    },
    Rule {
        id: "low_rumination",
        applies: low_rumination,
        name: None,
        action: Some(RUMINATION_ACTION),
    },
    Rule {
        id: "energy_deficit",
        applies: energy_deficit,
        name: None,
        action: Some(ENERGY_ACTION),
    },
];

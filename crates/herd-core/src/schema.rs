//! Field schema of a herd batch: which columns are identifiers, numeric
//! measurements, categories, or boolean-like flags.

use serde::{Deserialize, Serialize};

use crate::constants::fields;

/// Typing of one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Identifier,
    Numeric,
    Categorical,
    Boolean,
}

/// Named fields a batch must carry, grouped by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HerdSchema {
    pub id_field: String,
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
    pub boolean: Vec<String>,
    /// Required fields in reporting order.
    pub required: Vec<String>,
}

impl HerdSchema {
    /// Build a schema; required fields are reported identifier first, then
    /// categorical, boolean and numeric fields.
    pub fn new(
        id_field: impl Into<String>,
        numeric: Vec<String>,
        categorical: Vec<String>,
        boolean: Vec<String>,
    ) -> Self {
        let id_field = id_field.into();
        let required = std::iter::once(id_field.clone())
            .chain(categorical.iter().cloned())
            .chain(boolean.iter().cloned())
            .chain(numeric.iter().cloned())
            .collect();
        Self {
            id_field,
            numeric,
            categorical,
            boolean,
            required,
        }
    }

    /// Kind of `field`, if the schema names it.
    pub fn kind_of(&self, field: &str) -> Option<FieldKind> {
        if field == self.id_field {
            Some(FieldKind::Identifier)
        } else if self.numeric.iter().any(|f| f == field) {
            Some(FieldKind::Numeric)
        } else if self.categorical.iter().any(|f| f == field) {
            Some(FieldKind::Categorical)
        } else if self.boolean.iter().any(|f| f == field) {
            Some(FieldKind::Boolean)
        } else {
            None
        }
    }

    /// Required fields absent from `columns`, in reporting order.
    pub fn missing_fields<S: AsRef<str>>(&self, columns: &[S]) -> Vec<String> {
        self.required
            .iter()
            .filter(|field| !columns.iter().any(|c| c.as_ref() == field.as_str()))
            .cloned()
            .collect()
    }

    /// Fields averaged per group: numeric measurements, then boolean flags.
    pub fn summary_fields(&self) -> Vec<String> {
        self.numeric.iter().chain(self.boolean.iter()).cloned().collect()
    }
}

impl Default for HerdSchema {
    /// The herd health and production schema.
    fn default() -> Self {
        let numeric = [
            fields::AGE,
            fields::WEIGHT_KG,
            fields::MILK_YIELD,
            fields::FERTILITY_SCORE,
            fields::RUMINATION_MINUTES,
            fields::EAR_TEMPERATURE_C,
            fields::PARASITE_LOAD_INDEX,
            fields::FECAL_EGG_COUNT,
            fields::RESPIRATION_RATE_BPM,
            fields::FORAGE_QUALITY_INDEX,
            fields::MOVEMENT_SCORE,
            fields::REMAINING_MONTHS,
        ];
        let required = [
            fields::ID,
            fields::BREED,
            fields::AGE,
            fields::WEIGHT_KG,
            fields::MILK_YIELD,
            fields::FERTILITY_SCORE,
            fields::RUMINATION_MINUTES,
            fields::EAR_TEMPERATURE_C,
            fields::PARASITE_LOAD_INDEX,
            fields::FECAL_EGG_COUNT,
            fields::RESPIRATION_RATE_BPM,
            fields::FORAGE_QUALITY_INDEX,
            fields::VACCINATION_UP_TO_DATE,
            fields::MOVEMENT_SCORE,
            fields::REMAINING_MONTHS,
        ];
        Self {
            id_field: fields::ID.to_string(),
            numeric: numeric.iter().map(|s| s.to_string()).collect(),
            categorical: vec![fields::BREED.to_string()],
            boolean: vec![fields::VACCINATION_UP_TO_DATE.to_string()],
            required: required.iter().map(|s| s.to_string()).collect(),
        }
    }
}

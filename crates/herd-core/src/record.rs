//! Raw, untyped input rows as handed over by the transport layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One cell of raw input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl RawValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Textual form used for identifiers and categories. `None` for `Null`.
    pub fn as_label(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::Text(s) => Some(s.clone()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// One animal's raw fields, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimalRecord {
    fields: BTreeMap<String, RawValue>,
}

impl AnimalRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&RawValue> {
        self.fields.get(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<RawValue> {
        self.fields.remove(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

static NULL: RawValue = RawValue::Null;

/// A batch of raw records plus its header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordBatch {
    /// Column names present in the batch.
    pub columns: Vec<String>,
    pub records: Vec<AnimalRecord>,
}

impl RecordBatch {
    pub fn new(columns: Vec<String>, records: Vec<AnimalRecord>) -> Self {
        Self { columns, records }
    }

    /// Build a batch whose header is the union of keys across all records,
    /// in first-appearance order.
    pub fn from_records(records: Vec<AnimalRecord>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for name in record.field_names() {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }
        }
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, field: &str) -> bool {
        self.columns.iter().any(|c| c == field)
    }

    /// Cell at (`row`, `field`); absent cells read as `Null`.
    pub fn value(&self, row: usize, field: &str) -> &RawValue {
        self.records
            .get(row)
            .and_then(|r| r.get(field))
            .unwrap_or(&NULL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_deserialize_untagged() {
        let record: AnimalRecord =
            serde_json::from_str(r#"{"ID": "A1", "Age": 4, "Vac": true, "Note": null}"#).unwrap();
        assert_eq!(record.get("ID"), Some(&RawValue::Text("A1".into())));
        assert_eq!(record.get("Age"), Some(&RawValue::Number(4.0)));
        assert_eq!(record.get("Vac"), Some(&RawValue::Bool(true)));
        assert_eq!(record.get("Note"), Some(&RawValue::Null));
    }

    #[test]
    fn header_is_union_of_record_keys() {
        let a = AnimalRecord::new().with("ID", "1").with("Age", 3.0);
        let b = AnimalRecord::new().with("ID", "2").with("Breed", "Angus");
        let batch = RecordBatch::from_records(vec![a, b]);
        assert_eq!(batch.columns, vec!["Age", "ID", "Breed"]);
        assert!(batch.value(0, "Breed").is_null());
        assert_eq!(batch.value(1, "Breed"), &RawValue::Text("Angus".into()));
    }

    #[test]
    fn labels_format_numbers_compactly() {
        assert_eq!(RawValue::Number(3.0).as_label().as_deref(), Some("3"));
        assert_eq!(RawValue::Number(2.5).as_label().as_deref(), Some("2.5"));
        assert_eq!(RawValue::Bool(false).as_label().as_deref(), Some("false"));
        assert_eq!(RawValue::Null.as_label(), None);
    }
}

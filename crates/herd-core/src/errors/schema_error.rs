/// Batch header does not carry the fields the schema requires.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },
}

impl SchemaError {
    /// The missing field names, in schema order.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            Self::MissingFields { fields } => fields,
        }
    }
}

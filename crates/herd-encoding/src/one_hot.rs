//! One-hot encoding with categories taken from the batch itself.

/// Indicator columns for one categorical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneHotColumns {
    field: String,
    categories: Vec<String>,
}

impl OneHotColumns {
    /// Collect distinct values in order of first appearance.
    pub fn fit(field: &str, values: &[String]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for v in values {
            if !categories.contains(v) {
                categories.push(v.clone());
            }
        }
        Self {
            field: field.to_string(),
            categories,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Column names, `<field>_<value>`.
    pub fn names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|c| format!("{}_{}", self.field, c))
            .collect()
    }

    /// Indicator vector for `value`; all zeros for an unseen value.
    pub fn encode(&self, value: &str) -> Vec<f64> {
        self.categories
            .iter()
            .map(|c| if c == value { 1.0 } else { 0.0 })
            .collect()
    }
}

//! Cell-level coercion of raw values into typed fields.

use herd_core::constants::{MISSING_CATEGORY, TRUTHY_TOKENS};
use herd_core::RawValue;

/// Coerce a numeric cell. Text has all whitespace and `,` thousands
/// separators removed before parsing. `None` marks a missing value.
pub fn numeric(value: &RawValue) -> Option<f64> {
    let parsed = match value {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => {
            let cleaned: String = s
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ',')
                .collect();
            cleaned.parse::<f64>().ok()?
        }
        RawValue::Null | RawValue::Bool(_) => return None,
    };
    (!parsed.is_nan()).then_some(parsed)
}

/// Coerce a boolean-like cell to 0/1.
pub fn truthy(value: &RawValue) -> u8 {
    let hit = match value {
        RawValue::Bool(b) => *b,
        RawValue::Number(n) => *n == 1.0,
        RawValue::Text(s) => {
            let token = s.trim().to_lowercase();
            TRUTHY_TOKENS.contains(&token.as_str())
        }
        RawValue::Null => false,
    };
    u8::from(hit)
}

/// Coerce a categorical cell to its label.
pub fn category(value: &RawValue) -> String {
    value
        .as_label()
        .unwrap_or_else(|| MISSING_CATEGORY.to_string())
}

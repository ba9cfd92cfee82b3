//! FeatureEncoder: schema validation, coercion, imputation and encoding of
//! a raw batch into a `FeatureMatrix`.

use std::collections::HashSet;

use herd_core::errors::{HerdResult, InputError, SchemaError};
use herd_core::models::{CleanRecord, FeatureMatrix};
use herd_core::{AnimalRecord, HerdSchema, RecordBatch};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coerce;
use crate::impute;
use crate::one_hot::OneHotColumns;
use crate::standardize::standardize;

/// Rows echoed back in a `SchemaReport`.
pub const PREVIEW_ROWS: usize = 10;

/// Non-failing header check of a batch against the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaReport {
    /// Required fields absent from the header, in schema order.
    pub missing: Vec<String>,
    pub rows: usize,
    pub columns: Vec<String>,
    /// First `PREVIEW_ROWS` records, raw and unmodified.
    pub preview: Vec<AnimalRecord>,
}

impl SchemaReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Output of encoding one batch.
#[derive(Debug, Clone)]
pub struct EncodedBatch {
    /// Feature vectors: standardized numeric ⊕ boolean ⊕ one-hot.
    pub matrix: FeatureMatrix,
    /// Coerced, imputed, original-scale records in input order.
    pub records: Vec<CleanRecord>,
    /// Numeric fields that had at least one missing value.
    pub imputed_fields: Vec<String>,
}

/// Encodes raw batches against a fixed schema.
#[derive(Debug, Clone, Default)]
pub struct FeatureEncoder {
    schema: HerdSchema,
}

impl FeatureEncoder {
    pub fn new(schema: HerdSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &HerdSchema {
        &self.schema
    }

    /// Report missing required fields without failing.
    pub fn validate(&self, batch: &RecordBatch) -> SchemaReport {
        SchemaReport {
            missing: self.schema.missing_fields(&batch.columns),
            rows: batch.len(),
            columns: batch.columns.clone(),
            preview: batch.records.iter().take(PREVIEW_ROWS).cloned().collect(),
        }
    }

    /// Encode `batch`. Fails with a `SchemaError` before any coercion when a
    /// required field is absent from the header.
    pub fn encode(&self, batch: &RecordBatch) -> HerdResult<EncodedBatch> {
        let missing = self.schema.missing_fields(&batch.columns);
        if !missing.is_empty() {
            return Err(SchemaError::MissingFields { fields: missing }.into());
        }

        let ids = self.identifiers(batch)?;
        let n = ids.len();

        // Numeric: coerce, then impute with batch medians.
        let raw_numeric: Vec<Vec<Option<f64>>> = self
            .schema
            .numeric
            .iter()
            .map(|field| (0..n).map(|row| coerce::numeric(batch.value(row, field))).collect())
            .collect();
        let (numeric, gapped) = impute::fill_with_medians(raw_numeric);
        let imputed_fields: Vec<String> = gapped
            .iter()
            .map(|&i| self.schema.numeric[i].clone())
            .collect();
        if !imputed_fields.is_empty() {
            debug!(fields = ?imputed_fields, "imputed missing numeric values");
        }

        let boolean: Vec<Vec<u8>> = self
            .schema
            .boolean
            .iter()
            .map(|field| (0..n).map(|row| coerce::truthy(batch.value(row, field))).collect())
            .collect();

        let categorical: Vec<Vec<String>> = self
            .schema
            .categorical
            .iter()
            .map(|field| (0..n).map(|row| coerce::category(batch.value(row, field))).collect())
            .collect();
        let one_hot: Vec<OneHotColumns> = self
            .schema
            .categorical
            .iter()
            .zip(categorical.iter())
            .map(|(field, values)| OneHotColumns::fit(field, values))
            .collect();

        let scaled: Vec<Vec<f64>> = numeric.iter().map(|col| standardize(col)).collect();

        let feature_names: Vec<String> = self
            .schema
            .numeric
            .iter()
            .chain(self.schema.boolean.iter())
            .cloned()
            .chain(one_hot.iter().flat_map(OneHotColumns::names))
            .collect();

        let rows: Vec<Vec<f64>> = (0..n)
            .map(|row| {
                let mut v = Vec::with_capacity(feature_names.len());
                v.extend(scaled.iter().map(|col| col[row]));
                v.extend(boolean.iter().map(|col| f64::from(col[row])));
                for (cols, values) in one_hot.iter().zip(categorical.iter()) {
                    v.extend(cols.encode(&values[row]));
                }
                v
            })
            .collect();

        let records = ids
            .into_iter()
            .enumerate()
            .map(|(row, id)| CleanRecord {
                id,
                numeric: numeric.iter().map(|col| col[row]).collect(),
                boolean: boolean.iter().map(|col| col[row]).collect(),
                categorical: categorical.iter().map(|col| col[row].clone()).collect(),
            })
            .collect();

        let matrix = FeatureMatrix::new(feature_names, rows)?;

        debug!(rows = n, width = matrix.width(), "encoded feature matrix");
        Ok(EncodedBatch {
            matrix,
            records,
            imputed_fields,
        })
    }

    fn identifiers(&self, batch: &RecordBatch) -> HerdResult<Vec<String>> {
        let mut seen = HashSet::with_capacity(batch.len());
        let mut ids = Vec::with_capacity(batch.len());
        for row in 0..batch.len() {
            let id = batch
                .value(row, &self.schema.id_field)
                .as_label()
                .ok_or(InputError::MissingIdentifier { row })?;
            if !seen.insert(id.clone()) {
                return Err(InputError::DuplicateIdentifier { id }.into());
            }
            ids.push(id);
        }
        Ok(ids)
    }
}

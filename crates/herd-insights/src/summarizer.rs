//! Per-group statistics over original-scale (non-standardized) values.

use herd_core::errors::{HerdResult, InputError};
use herd_core::models::{
    CleanRecord, ClusterAssignment, ClusterSummary, FieldMean, SummarySet,
};
use herd_core::stats;
use herd_core::HerdSchema;

use crate::kpis::herd_kpis;

/// Aggregates clean records by group label.
#[derive(Debug, Clone, Default)]
pub struct ClusterSummarizer {
    schema: HerdSchema,
}

impl ClusterSummarizer {
    pub fn new(schema: HerdSchema) -> Self {
        Self { schema }
    }

    /// One summary per non-empty label in ascending label order, each with
    /// the mean of every numeric field and the truthy share of every
    /// boolean-like field, plus herd KPIs over all records.
    pub fn summarize(
        &self,
        records: &[CleanRecord],
        assignment: &ClusterAssignment,
    ) -> HerdResult<SummarySet> {
        if records.len() != assignment.len() {
            return Err(InputError::AssignmentLengthMismatch {
                expected: records.len(),
                got: assignment.len(),
            }
            .into());
        }

        let groups = assignment
            .labels
            .iter()
            .map(|&label| label + 1)
            .max()
            .unwrap_or(0)
            .max(assignment.k);
        let mut members: Vec<Vec<&CleanRecord>> = vec![Vec::new(); groups];
        for (record, &label) in records.iter().zip(&assignment.labels) {
            members[label].push(record);
        }

        let clusters = members
            .iter()
            .enumerate()
            .filter(|(_, group)| !group.is_empty())
            .map(|(cluster_id, group)| ClusterSummary {
                cluster_id,
                count: group.len(),
                means: self.group_means(group),
            })
            .collect();

        Ok(SummarySet {
            fields: self.schema.summary_fields(),
            clusters,
            kpis: herd_kpis(&self.schema, records),
        })
    }

    fn group_means(&self, group: &[&CleanRecord]) -> Vec<FieldMean> {
        let numeric = self.schema.numeric.iter().enumerate().map(|(i, field)| {
            let values: Vec<f64> = group.iter().map(|r| r.numeric[i]).collect();
            (field, values)
        });
        let boolean = self.schema.boolean.iter().enumerate().map(|(i, field)| {
            let values: Vec<f64> = group.iter().map(|r| f64::from(r.boolean[i])).collect();
            (field, values)
        });
        numeric
            .chain(boolean)
            .map(|(field, values)| FieldMean {
                field: field.clone(),
                mean: stats::mean(&values).unwrap_or(f64::NAN),
            })
            .collect()
    }
}

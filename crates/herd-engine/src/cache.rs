//! Single-slot store for the latest completed run.

use std::sync::{Arc, RwLock};

use herd_core::errors::{HerdError, HerdResult};
use herd_core::models::RunSnapshot;
use herd_core::traits::IRunStore;

/// Latest-run cache. Publishing swaps one `Arc`, so readers always hold a
/// snapshot whose parts come from the same batch.
#[derive(Debug, Default)]
pub struct RunCache {
    slot: RwLock<Option<Arc<RunSnapshot>>>,
}

impl RunCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IRunStore for RunCache {
    fn put(&self, snapshot: Arc<RunSnapshot>) -> HerdResult<Option<Arc<RunSnapshot>>> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| HerdError::ConcurrencyError(e.to_string()))?;
        Ok(slot.replace(snapshot))
    }

    fn get(&self) -> HerdResult<Option<Arc<RunSnapshot>>> {
        let slot = self
            .slot
            .read()
            .map_err(|e| HerdError::ConcurrencyError(e.to_string()))?;
        Ok(slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herd_core::models::{
        ClusterAssignment, Dendrogram, FeatureMatrix, HerdKpis, RunId, SummarySet,
    };
    use herd_core::HerdSchema;

    fn snapshot() -> Arc<RunSnapshot> {
        Arc::new(RunSnapshot {
            run_id: RunId::new(),
            created_at: chrono::Utc::now(),
            schema: HerdSchema::default(),
            matrix: FeatureMatrix::new(vec!["x".into()], vec![vec![0.0]]).unwrap(),
            dendrogram: Dendrogram::new(1, vec![]).unwrap(),
            assignment: ClusterAssignment {
                k: 1,
                ids: vec!["a".into()],
                labels: vec![0],
            },
            summaries: SummarySet {
                fields: vec![],
                clusters: vec![],
                kpis: HerdKpis {
                    average_milk_yield: 0.0,
                    average_fertility_score: 0.0,
                    average_parasite_load_index: 0.0,
                    average_remaining_months: 0.0,
                },
            },
            recommendations: vec![],
            records: vec![],
            imputed_fields: vec![],
        })
    }

    #[test]
    fn empty_until_first_put() {
        let cache = RunCache::new();
        assert!(cache.get().unwrap().is_none());
    }

    #[test]
    fn put_returns_replaced_snapshot() {
        let cache = RunCache::new();
        let first = snapshot();
        let second = snapshot();
        assert!(cache.put(Arc::clone(&first)).unwrap().is_none());
        let replaced = cache.put(Arc::clone(&second)).unwrap().unwrap();
        assert_eq!(replaced.run_id, first.run_id);
        assert_eq!(cache.get().unwrap().unwrap().run_id, second.run_id);
    }
}

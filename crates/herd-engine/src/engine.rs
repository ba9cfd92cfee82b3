//! SegmentationEngine: runs the full pipeline and answers follow-up queries
//! from the latest published run.

use std::sync::Arc;

use chrono::Utc;
use herd_clustering::{
    parse_group_counts, StabilityComparator, StabilityReport, TreeCutter, WardLinkageBuilder,
};
use herd_core::config::HerdConfig;
use herd_core::constants::MIN_RECORDS;
use herd_core::errors::{HerdError, HerdResult, InputError};
use herd_core::models::{Dendrogram, RunId, RunSnapshot, SegmentationResult};
use herd_core::traits::{IRunStore, ISegmenter};
use herd_core::{HerdSchema, RecordBatch};
use herd_encoding::{FeatureEncoder, SchemaReport};
use herd_insights::{ClusterSummarizer, RecommendationEngine};
use herd_observability::events;
use herd_observability::{compare_span, export_span, linkage_span, segment_span};

use crate::cache::RunCache;
use crate::export::{self, AssignmentRow, RecommendationRow};

/// The herd segmentation engine.
///
/// `segment` builds a complete snapshot before publishing it to the run
/// store, so concurrent queries see either the previous run or the new
/// one, never a mix.
pub struct SegmentationEngine {
    config: HerdConfig,
    encoder: FeatureEncoder,
    linkage: WardLinkageBuilder,
    summarizer: ClusterSummarizer,
    recommender: RecommendationEngine,
    store: Arc<dyn IRunStore>,
}

impl SegmentationEngine {
    /// Engine backed by an in-memory [`RunCache`].
    pub fn new(config: HerdConfig, schema: HerdSchema) -> Self {
        Self::with_store(config, schema, Arc::new(RunCache::new()))
    }

    pub fn with_store(config: HerdConfig, schema: HerdSchema, store: Arc<dyn IRunStore>) -> Self {
        Self {
            linkage: WardLinkageBuilder::from_config(&config.segmentation),
            encoder: FeatureEncoder::new(schema.clone()),
            summarizer: ClusterSummarizer::new(schema),
            recommender: RecommendationEngine::new(),
            config,
            store,
        }
    }

    pub fn config(&self) -> &HerdConfig {
        &self.config
    }

    pub fn schema(&self) -> &HerdSchema {
        self.encoder.schema()
    }

    /// Header check without segmenting.
    pub fn validate(&self, batch: &RecordBatch) -> SchemaReport {
        self.encoder.validate(batch)
    }

    /// Run encode → link → cut → summarize → recommend and publish the run.
    ///
    /// Fails without publishing anything on schema or input errors.
    pub fn segment(&self, batch: &RecordBatch, k: Option<usize>) -> HerdResult<SegmentationResult> {
        let k = k.unwrap_or(self.config.segmentation.default_group_count);
        let span = segment_span!(batch.len(), k);
        let _guard = span.enter();

        let encoded = self.encoder.encode(batch)?;
        if !encoded.imputed_fields.is_empty() {
            events::imputation_applied(&encoded.imputed_fields);
        }

        let n = encoded.records.len();
        // Reject an impossible k before the cubic linkage step.
        if n >= MIN_RECORDS && !(1..=n).contains(&k) {
            return Err(InputError::InvalidGroupCount { k, n }.into());
        }

        let dendrogram = {
            let span = linkage_span!(n, encoded.matrix.width());
            let _guard = span.enter();
            self.linkage.build(&encoded.matrix)?
        };

        let ids: Vec<String> = encoded.records.iter().map(|r| r.id.clone()).collect();
        let assignment = TreeCutter::cut(&dendrogram, &ids, k)?;
        let summaries = self.summarizer.summarize(&encoded.records, &assignment)?;
        let recommendations = self.recommender.recommend(&summaries.clusters);

        let snapshot = Arc::new(RunSnapshot {
            run_id: RunId::new(),
            created_at: Utc::now(),
            schema: self.schema().clone(),
            matrix: encoded.matrix,
            dendrogram,
            assignment,
            summaries,
            recommendations,
            records: encoded.records,
            imputed_fields: encoded.imputed_fields,
        });

        let run_id = snapshot.run_id.to_string();
        let previous = self.store.put(Arc::clone(&snapshot))?;
        events::snapshot_replaced(
            &run_id,
            previous.map(|p| p.run_id.to_string()).as_deref(),
        );
        events::segmentation_completed(&run_id, n, k, snapshot.matrix.width());

        Ok(SegmentationResult::from(snapshot.as_ref()))
    }

    /// The latest published run.
    pub fn latest(&self) -> HerdResult<Arc<RunSnapshot>> {
        self.latest_for("latest run")
    }

    /// The run `run_id`, as long as no newer run replaced it.
    pub fn snapshot_for(&self, run_id: RunId) -> HerdResult<Arc<RunSnapshot>> {
        let current = self.latest_for("run snapshot")?;
        if current.run_id != run_id {
            return Err(HerdError::RunSuperseded {
                requested: run_id,
                current: current.run_id,
            });
        }
        Ok(current)
    }

    /// Merge tree of the latest run.
    pub fn dendrogram(&self) -> HerdResult<Dendrogram> {
        Ok(self.latest_for("dendrogram")?.dendrogram.clone())
    }

    pub fn current_run(&self) -> HerdResult<RunId> {
        Ok(self.latest_for("current run")?.run_id)
    }

    /// Stability comparison over the latest run's dendrogram at each k.
    pub fn compare(&self, ks: &[usize]) -> HerdResult<StabilityReport> {
        let snapshot = self.latest_for("compare")?;
        let span = compare_span!(ks);
        let _guard = span.enter();
        let report = StabilityComparator::compare_dendrogram(&snapshot.dendrogram, ks)?;
        events::comparison_completed(&snapshot.run_id.to_string(), &report.ks);
        Ok(report)
    }

    /// [`compare`](Self::compare) with a comma-separated list such as `"3,4,5"`.
    pub fn compare_str(&self, raw: &str) -> HerdResult<StabilityReport> {
        let ks = parse_group_counts(raw)?;
        self.compare(&ks)
    }

    /// [`compare`](Self::compare) at the configured default group counts.
    pub fn compare_default(&self) -> HerdResult<StabilityReport> {
        self.compare(&self.config.comparison.default_group_counts)
    }

    pub fn export_assignment(&self) -> HerdResult<Vec<AssignmentRow>> {
        let snapshot = self.latest_for("export assignment")?;
        let span = export_span!("assignment");
        let _guard = span.enter();
        Ok(export::assignment_rows(&snapshot))
    }

    pub fn export_recommendations(&self) -> HerdResult<Vec<RecommendationRow>> {
        let snapshot = self.latest_for("export recommendations")?;
        let span = export_span!("recommendations");
        let _guard = span.enter();
        Ok(export::recommendation_rows(&snapshot))
    }

    fn latest_for(&self, query: &str) -> HerdResult<Arc<RunSnapshot>> {
        match self.store.get()? {
            Some(snapshot) => Ok(snapshot),
            None => {
                events::query_unavailable(query);
                Err(HerdError::not_available(query))
            }
        }
    }
}

impl ISegmenter for SegmentationEngine {
    fn segment(&self, batch: &RecordBatch, k: Option<usize>) -> HerdResult<SegmentationResult> {
        SegmentationEngine::segment(self, batch, k)
    }

    fn dendrogram(&self) -> HerdResult<Dendrogram> {
        SegmentationEngine::dendrogram(self)
    }

    fn current_run(&self) -> HerdResult<RunId> {
        SegmentationEngine::current_run(self)
    }
}

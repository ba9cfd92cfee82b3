//! Deterministic naming and management guidance for each group.

pub mod reference;
pub mod rules;

use herd_core::models::{ClusterSummary, Recommendation};
use tracing::debug;

pub use reference::HerdReference;
use rules::{GroupProfile, RULES};

pub const DEFAULT_NAME: &str = "Balanced";
pub const DEFAULT_ACTION: &str = "Maintain current management and routine monitoring.";

/// Applies the ordered rule table to every group summary.
///
/// Output depends only on the summary values: the same set of summaries
/// yields the same recommendations regardless of the order they arrive in.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// One recommendation per summary, in input order.
    pub fn recommend(&self, summaries: &[ClusterSummary]) -> Vec<Recommendation> {
        let reference = HerdReference::from_summaries(summaries);
        summaries
            .iter()
            .map(|summary| self.evaluate(summary, &reference))
            .collect()
    }

    /// Run every rule against one group.
    pub fn evaluate(&self, summary: &ClusterSummary, reference: &HerdReference) -> Recommendation {
        let profile = GroupProfile { summary, reference };
        let mut names: Vec<&str> = Vec::new();
        let mut actions: Vec<&str> = Vec::new();
        for rule in RULES.iter().filter(|rule| (rule.applies)(&profile)) {
            debug!(cluster_id = summary.cluster_id, rule = rule.id, "rule fired");
            names.extend(rule.name);
            actions.extend(rule.action);
        }

        Recommendation {
            cluster_id: summary.cluster_id,
            name: if names.is_empty() {
                DEFAULT_NAME.to_string()
            } else {
                names.join(", ")
            },
            recommendation: if actions.is_empty() {
                DEFAULT_ACTION.to_string()
            } else {
                actions.join(" ")
            },
        }
    }
}

//! Configuration, loaded from TOML. Every section falls back to defaults.

pub mod comparison_config;
pub mod defaults;
pub mod observability_config;
pub mod segmentation_config;

pub use comparison_config::ComparisonConfig;
pub use observability_config::ObservabilityConfig;
pub use segmentation_config::SegmentationConfig;

use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HerdConfig {
    pub segmentation: SegmentationConfig,
    pub comparison: ComparisonConfig,
    pub observability: ObservabilityConfig,
}

impl HerdConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

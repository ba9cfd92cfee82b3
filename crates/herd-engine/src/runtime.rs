//! Process-wide engine singleton stored behind `OnceLock`, for transports
//! that want one shared "latest run" for the whole process.

use std::sync::{Arc, OnceLock};

use herd_core::config::HerdConfig;
use herd_core::errors::{HerdError, HerdResult};
use herd_core::HerdSchema;

use crate::engine::SegmentationEngine;

static RUNTIME: OnceLock<Arc<SegmentationEngine>> = OnceLock::new();

/// Options for initializing the runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// TOML configuration string. If None, uses defaults.
    pub config_toml: Option<String>,
    /// Field schema. If None, uses the herd health schema.
    pub schema: Option<HerdSchema>,
}

/// Initialize the global engine.
///
/// Returns an error if already initialized or if the configuration does
/// not parse.
pub fn initialize(opts: RuntimeOptions) -> HerdResult<()> {
    let config = match &opts.config_toml {
        Some(toml_str) => {
            HerdConfig::from_toml(toml_str).map_err(|e| HerdError::ConfigError(e.to_string()))?
        }
        None => HerdConfig::default(),
    };
    let engine = SegmentationEngine::new(config, opts.schema.unwrap_or_default());
    RUNTIME
        .set(Arc::new(engine))
        .map_err(|_| HerdError::RuntimeError("engine already initialized".into()))
}

/// The global engine. Errors if not yet initialized.
pub fn get() -> HerdResult<Arc<SegmentationEngine>> {
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(|| HerdError::RuntimeError("engine not initialized".into()))
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

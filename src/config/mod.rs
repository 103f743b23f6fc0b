//! Run configuration
//!
//! Values come from an optional TOML file with CLI flags layered on top;
//! the defaults reproduce the original job (one million samples). The
//! sample and worker counts are validated before any work starts.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Configuration for one estimation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Application name for the execution context
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Total number of trials
    #[serde(default = "default_samples")]
    pub samples: u64,

    /// Parallel worker tasks
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Base RNG seed; a fresh random seed is drawn per run when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Output location (file path or `s3://bucket/key` URI).
    /// Persistence is skipped when absent.
    #[serde(default)]
    pub output: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            samples: default_samples(),
            workers: default_workers(),
            seed: None,
            output: None,
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check the invariants the pipeline relies on
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(Error::Validation(
                "samples must be at least 1".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(Error::Validation(
                "workers must be at least 1".to_string(),
            ));
        }
        if self.app_name.is_empty() {
            return Err(Error::Validation("app_name must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_app_name() -> String {
    "montepi".to_string()
}

fn default_samples() -> u64 {
    1_000_000
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

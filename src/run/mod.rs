//! The estimation pipeline
//!
//! A single linear sequence executed once per process lifetime: resolve
//! configuration, start the execution context, partition the sample
//! range, count hits in parallel, estimate, print, persist, shut down.
//! The context is released on failure paths too.

use anyhow::Context as _;
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::engine::{partition, ExecutionContext, LocalExecutor, TaskExecutor, TrialFn};
use crate::sampling;
use crate::storage::{ResultStore, StorageLocation, StoreFactory};

/// CLI-facing run parameters; set fields override config-file values
#[derive(Debug, Default, Clone)]
pub struct RunCommand {
    pub samples: Option<u64>,
    pub workers: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub name: Option<String>,
    pub config: Option<PathBuf>,
}

/// Run the full pipeline for a CLI invocation
pub async fn run(cmd: RunCommand) -> anyhow::Result<()> {
    let config = resolve_config(&cmd).await?;
    config.validate()?;

    let ctx = ExecutionContext::new(config.app_name.clone());
    let result = execute(&config).await;
    ctx.shutdown();
    result
}

async fn execute(config: &RunConfig) -> anyhow::Result<()> {
    let executor = LocalExecutor::new(config.workers);

    let store = match &config.output {
        Some(output) => {
            let location = StorageLocation::parse(output)?;
            // Built before sampling so a bad location fails fast
            Some(StoreFactory::from_location(&location).await?)
        }
        None => None,
    };

    let line = run_pipeline(config, &executor, store.as_deref()).await?;
    println!("{line}");

    Ok(())
}

/// Run the pipeline against explicit executor and store seams.
///
/// Returns the formatted result line. Kept separate from [`run`] so tests
/// can substitute executors and observe the persisted output.
pub async fn run_pipeline(
    config: &RunConfig,
    executor: &dyn TaskExecutor,
    store: Option<&dyn ResultStore>,
) -> crate::Result<String> {
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    debug!("Using base seed {}", base_seed);

    let partitions = partition(config.samples, config.workers, base_seed);
    let trial: TrialFn = Arc::new(sampling::in_unit_circle);

    // Barrier: returns once every partition has finished
    let hits = executor.count_hits(partitions, trial).await?;
    info!(
        "{} of {} samples fell inside the unit circle",
        hits, config.samples
    );

    let estimate = sampling::estimate_pi(hits, config.samples);
    let line = sampling::format_estimate(estimate);

    if let Some(store) = store {
        store.write_result(&line).await?;
        info!("Result persisted to {}", store.describe());
    }

    Ok(line)
}

async fn resolve_config(cmd: &RunCommand) -> anyhow::Result<RunConfig> {
    let mut config = match &cmd.config {
        Some(path) => RunConfig::load(path)
            .await
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RunConfig::default(),
    };

    if let Some(samples) = cmd.samples {
        config.samples = samples;
    }
    if let Some(workers) = cmd.workers {
        config.workers = workers;
    }
    if let Some(seed) = cmd.seed {
        config.seed = Some(seed);
    }
    if let Some(output) = &cmd.output {
        config.output = Some(output.clone());
    }
    if let Some(name) = &cmd.name {
        config.app_name = name.clone();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cli_values_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("montepi.toml");
        std::fs::write(&path, "samples = 100\nworkers = 2\n").unwrap();

        let cmd = RunCommand {
            samples: Some(500),
            config: Some(path),
            ..Default::default()
        };
        let config = resolve_config(&cmd).await.unwrap();
        assert_eq!(config.samples, 500);
        assert_eq!(config.workers, 2);
    }

    #[tokio::test]
    async fn missing_config_file_is_an_error() {
        let cmd = RunCommand {
            config: Some(PathBuf::from("/nonexistent/montepi.toml")),
            ..Default::default()
        };
        assert!(resolve_config(&cmd).await.is_err());
    }

    #[tokio::test]
    async fn defaults_apply_without_config_file() {
        let config = resolve_config(&RunCommand::default()).await.unwrap();
        assert_eq!(config.samples, 1_000_000);
    }
}

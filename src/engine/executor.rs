//! Parallel executor for partitioned trial counting
//!
//! This is the seam the original pipeline filled with a cluster engine.
//! [`LocalExecutor`] satisfies it with bounded tokio fan-out: one blocking
//! task per partition, concurrency capped by a semaphore, partial counts
//! collected in completion order. The reduction is a plain sum, which is
//! associative and commutative, so arrival order does not matter.

use super::error::{EngineError, EngineResult};
use super::partition::Partition;
use async_trait::async_trait;
use futures::stream::{FuturesUnordered, StreamExt};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, info};

/// A single trial: consume entropy from the task's generator, return
/// pass/fail.
pub type TrialFn = Arc<dyn Fn(&mut StdRng) -> bool + Send + Sync>;

/// Capability seam over parallel map-and-count execution.
///
/// `count_hits` maps the trial over every sample of every partition and
/// reduces the per-partition counts by summation. The call is a barrier:
/// it returns only once all partitions have finished. Any task failure is
/// fatal to the whole job.
#[async_trait]
pub trait TaskExecutor: Send + Sync {
    async fn count_hits(&self, partitions: Vec<Partition>, trial: TrialFn) -> EngineResult<u64>;
}

/// Executor running partitions as blocking tasks on the local runtime
pub struct LocalExecutor {
    max_parallel: usize,
}

impl LocalExecutor {
    /// Create an executor with the given concurrency cap
    pub fn new(max_parallel: usize) -> Self {
        Self {
            max_parallel: max_parallel.max(1),
        }
    }
}

#[async_trait]
impl TaskExecutor for LocalExecutor {
    async fn count_hits(&self, partitions: Vec<Partition>, trial: TrialFn) -> EngineResult<u64> {
        let semaphore = Arc::new(Semaphore::new(self.max_parallel));
        let mut tasks = FuturesUnordered::new();

        info!(
            "Executing {} partitions (max parallel: {})",
            partitions.len(),
            self.max_parallel
        );

        for part in partitions {
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(EngineError::executor)?;
            let trial = trial.clone();

            tasks.push(tokio::spawn(async move {
                let index = part.index;
                let counted =
                    tokio::task::spawn_blocking(move || run_partition(&part, trial.as_ref()))
                        .await
                        .map_err(|e| EngineError::task_failed(index, e));
                drop(permit);
                (index, counted)
            }));
        }

        let mut total = 0u64;
        while let Some(joined) = tasks.next().await {
            match joined {
                Ok((index, Ok(hits))) => {
                    debug!("Partition {} counted {} hits", index, hits);
                    total += hits;
                }
                Ok((_, Err(e))) => return Err(e),
                Err(e) => return Err(EngineError::executor(e)),
            }
        }

        Ok(total)
    }
}

fn run_partition(part: &Partition, trial: &(dyn Fn(&mut StdRng) -> bool + Send + Sync)) -> u64 {
    let mut rng = StdRng::seed_from_u64(part.seed);
    let mut hits = 0u64;
    for _ in 0..part.samples {
        if trial(&mut rng) {
            hits += 1;
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::partition::partition;

    #[tokio::test]
    async fn counts_all_when_trial_always_passes() {
        let executor = LocalExecutor::new(4);
        let parts = partition(1_000, 4, 42);
        let hits = executor
            .count_hits(parts, Arc::new(|_| true))
            .await
            .unwrap();
        assert_eq!(hits, 1_000);
    }

    #[tokio::test]
    async fn counts_none_when_trial_always_fails() {
        let executor = LocalExecutor::new(4);
        let parts = partition(1_000, 4, 42);
        let hits = executor
            .count_hits(parts, Arc::new(|_| false))
            .await
            .unwrap();
        assert_eq!(hits, 0);
    }

    #[tokio::test]
    async fn same_seed_gives_same_count() {
        let executor = LocalExecutor::new(2);
        let trial: TrialFn = Arc::new(crate::sampling::in_unit_circle);
        let first = executor
            .count_hits(partition(10_000, 4, 7), trial.clone())
            .await
            .unwrap();
        let second = executor
            .count_hits(partition(10_000, 4, 7), trial)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn count_is_independent_of_parallelism() {
        // Partitioning fixes the per-task seeds, so the total must not
        // depend on how many tasks run at once.
        let trial: TrialFn = Arc::new(crate::sampling::in_unit_circle);
        let serial = LocalExecutor::new(1)
            .count_hits(partition(10_000, 8, 7), trial.clone())
            .await
            .unwrap();
        let parallel = LocalExecutor::new(8)
            .count_hits(partition(10_000, 8, 7), trial)
            .await
            .unwrap();
        assert_eq!(serial, parallel);
    }

    #[tokio::test]
    async fn panicking_trial_fails_the_job() {
        let executor = LocalExecutor::new(2);
        let parts = partition(100, 2, 42);
        let result = executor
            .count_hits(parts, Arc::new(|_| panic!("trial blew up")))
            .await;
        assert!(matches!(result, Err(EngineError::TaskFailed { .. })));
    }

    #[test]
    fn summation_is_order_independent() {
        let counts = [3u64, 0, 7, 12, 1];
        let forward: u64 = counts.iter().sum();
        let reverse: u64 = counts.iter().rev().sum();
        assert_eq!(forward, reverse);
    }
}

//! Sample-range partitioning
//!
//! Splits the total sample count across worker tasks and derives an
//! independent RNG seed per partition. Each partition owns its own
//! generator so concurrent trials never share mutable RNG state, which
//! would correlate draws and bias the estimate.

/// A contiguous slice of the sample range assigned to one task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Position of this partition within the job
    pub index: usize,

    /// Number of trials this partition runs
    pub samples: u64,

    /// Seed for this partition's own generator
    pub seed: u64,
}

/// Split `total_samples` trials across `tasks` partitions.
///
/// Samples divide evenly with the remainder folded into the last
/// partition. When there are fewer samples than requested tasks the task
/// count is clamped down so no partition is empty. Seeds are derived from
/// `base_seed` and the partition index with a splitmix64 step, so pinning
/// the base seed makes the whole job reproducible while partitions stay
/// mutually independent.
pub fn partition(total_samples: u64, tasks: usize, base_seed: u64) -> Vec<Partition> {
    let tasks = effective_tasks(total_samples, tasks);
    let per_task = total_samples / tasks as u64;
    let remainder = total_samples % tasks as u64;

    (0..tasks)
        .map(|index| {
            let samples = if index == tasks - 1 {
                per_task + remainder
            } else {
                per_task
            };
            Partition {
                index,
                samples,
                seed: derive_seed(base_seed, index as u64),
            }
        })
        .collect()
}

fn effective_tasks(total_samples: u64, tasks: usize) -> usize {
    let tasks = tasks.max(1);
    if (tasks as u64) > total_samples {
        total_samples.max(1) as usize
    } else {
        tasks
    }
}

// splitmix64 finalizer; decorrelates seeds even for adjacent indices
fn derive_seed(base_seed: u64, index: u64) -> u64 {
    let mut z = base_seed.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn partitions_cover_all_samples() {
        for (total, tasks) in [(1_000_000u64, 8usize), (10, 3), (7, 7), (1, 1)] {
            let parts = partition(total, tasks, 42);
            let sum: u64 = parts.iter().map(|p| p.samples).sum();
            assert_eq!(sum, total);
        }
    }

    #[test]
    fn remainder_goes_to_last_partition() {
        let parts = partition(10, 3, 42);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].samples, 3);
        assert_eq!(parts[1].samples, 3);
        assert_eq!(parts[2].samples, 4);
    }

    #[test]
    fn clamps_tasks_to_sample_count() {
        let parts = partition(2, 8, 42);
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| p.samples == 1));
    }

    #[test]
    fn seeds_are_distinct_per_partition() {
        let parts = partition(1_000, 16, 42);
        let seeds: HashSet<u64> = parts.iter().map(|p| p.seed).collect();
        assert_eq!(seeds.len(), parts.len());
    }

    #[test]
    fn same_base_seed_reproduces_partitioning() {
        assert_eq!(partition(1_000, 4, 7), partition(1_000, 4, 7));
        assert_ne!(
            partition(1_000, 4, 7)[0].seed,
            partition(1_000, 4, 8)[0].seed
        );
    }
}

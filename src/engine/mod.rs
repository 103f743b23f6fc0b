//! Local data-parallel execution engine
//!
//! The original pipeline delegated partitioning, scheduling, and reduction
//! to an external cluster engine. Here the same capability is a seam: a
//! range of sample indices is split into [`Partition`]s, a [`TaskExecutor`]
//! maps the trial predicate over each partition and reduces the partial
//! counts, and an [`ExecutionContext`] scopes the engine session from init
//! to explicit teardown.

pub mod context;
pub mod error;
pub mod executor;
pub mod partition;

pub use context::ExecutionContext;
pub use error::{EngineError, EngineResult};
pub use executor::{LocalExecutor, TaskExecutor, TrialFn};
pub use partition::{partition, Partition};

//! Error types for the execution engine

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine error types
///
/// Any partition failure is fatal to the whole job; there is no
/// partial-failure tolerance.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The sample range could not be split into tasks
    #[error("Invalid partitioning: {0}")]
    InvalidPartitioning(String),

    /// A partition task failed or panicked
    #[error("Partition {partition} failed: {message}")]
    TaskFailed { partition: usize, message: String },

    /// Executor infrastructure failure (scheduling, permits)
    #[error("Executor error: {0}")]
    Executor(String),
}

impl EngineError {
    /// Create a task failure error
    pub fn task_failed<E: std::fmt::Display>(partition: usize, err: E) -> Self {
        Self::TaskFailed {
            partition,
            message: err.to_string(),
        }
    }

    /// Create an executor infrastructure error
    pub fn executor<E: std::fmt::Display>(err: E) -> Self {
        Self::Executor(err.to_string())
    }
}

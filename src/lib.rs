//! # Montepi
//!
//! Estimate π by Monte Carlo sampling on a local data-parallel executor,
//! then persist the one-line result to pluggable storage.
//!
//! ## Usage
//!
//! ```bash
//! montepi run [-n samples] [-w workers] [--seed value] [-o output]
//! ```
//!
//! ## Modules
//!
//! - `config` - Run configuration with TOML file loading and CLI overrides
//! - `engine` - Sample-range partitioning, the parallel executor seam, and
//!   the execution-context lifecycle
//! - `run` - The single linear pipeline: partition, count, estimate, persist
//! - `sampling` - The unit-circle trial predicate, the π estimator, and
//!   result formatting
//! - `storage` - Result persistence behind a backend trait (file, memory,
//!   optionally S3)
pub mod config;
pub mod engine;
pub mod error;
pub mod run;
pub mod sampling;
pub mod storage;

pub use error::{Error, Result};

//! Core trait definition for result persistence

use async_trait::async_trait;

use super::error::StorageResult;

/// A destination for the single result line.
///
/// Implementations coalesce the result into exactly one object or file
/// containing one line of text plus a trailing newline. Writing again
/// replaces the previous object.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persist the result line
    async fn write_result(&self, line: &str) -> StorageResult<()>;

    /// Read back the persisted line, if any
    async fn read_result(&self) -> StorageResult<Option<String>>;

    /// Human-readable location, for logging
    fn describe(&self) -> String;
}

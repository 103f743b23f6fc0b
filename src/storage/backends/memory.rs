//! In-memory result store for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::super::error::StorageResult;
use super::super::traits::ResultStore;

/// In-memory result store
///
/// Clones share the same slot, so a test can hand the store to the
/// pipeline and inspect the written line afterwards.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn write_result(&self, line: &str) -> StorageResult<()> {
        *self.slot.write().await = Some(line.to_string());
        Ok(())
    }

    async fn read_result(&self) -> StorageResult<Option<String>> {
        Ok(self.slot.read().await.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

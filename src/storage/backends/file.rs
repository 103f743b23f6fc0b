//! File result store

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use super::super::error::{StorageError, StorageResult};
use super::super::traits::ResultStore;

/// Result store writing a single text file
///
/// Writes go to a temp sibling first and are renamed into place, so a
/// crashed write never leaves a partial object at the target path.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store targeting the given path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn ensure_parent(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(StorageError::Io)?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "result".to_string());
        self.path.with_file_name(format!("{file_name}.tmp"))
    }
}

#[async_trait]
impl ResultStore for FileStore {
    async fn write_result(&self, line: &str) -> StorageResult<()> {
        debug!("Writing result to {}", self.path.display());

        self.ensure_parent().await?;
        let temp = self.temp_path();
        fs::write(&temp, format!("{line}\n"))
            .await
            .map_err(StorageError::Io)?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(StorageError::Io)?;

        Ok(())
    }

    async fn read_result(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content.trim_end_matches('\n').to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

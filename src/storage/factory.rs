//! Storage factory for creating result stores

use super::backends::FileStore;

#[cfg(feature = "s3")]
use super::backends::S3Store;
use super::error::StorageResult;
use super::location::StorageLocation;
use super::traits::ResultStore;

/// Factory for creating result stores from a parsed location
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store for the given location
    pub async fn from_location(location: &StorageLocation) -> StorageResult<Box<dyn ResultStore>> {
        match location {
            StorageLocation::File(path) => Ok(Box::new(FileStore::new(path.clone()))),
            #[cfg(feature = "s3")]
            StorageLocation::S3 { bucket, key } => {
                let store = S3Store::new(bucket, key).await?;
                Ok(Box::new(store))
            }
            #[cfg(not(feature = "s3"))]
            StorageLocation::S3 { .. } => Err(super::error::StorageError::configuration(
                "S3 backend not enabled. Enable with --features s3",
            )),
        }
    }
}

//! Result persistence behind a backend trait
//!
//! The pipeline produces exactly one line of text. This module stores it
//! as a single coalesced object at a configured location: a filesystem
//! path, an in-memory slot for tests, or an `s3://` URI when the `s3`
//! feature is enabled.

pub mod backends;
pub mod error;
pub mod factory;
pub mod location;
pub mod traits;

pub use backends::{FileStore, MemoryStore};
pub use error::{StorageError, StorageResult};
pub use factory::StoreFactory;
pub use location::StorageLocation;
pub use traits::ResultStore;

#[cfg(feature = "s3")]
pub use backends::S3Store;

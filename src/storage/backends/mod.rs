//! Storage backend implementations

pub mod file;
pub mod memory;
#[cfg(feature = "s3")]
pub mod s3;

pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(feature = "s3")]
pub use s3::S3Store;

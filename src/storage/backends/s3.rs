//! S3 result store

use async_trait::async_trait;
use aws_sdk_s3::Client;
use std::sync::Arc;
use tracing::{debug, info};

use super::super::error::{StorageError, StorageResult};
use super::super::traits::ResultStore;

/// Result store writing a single S3 object
pub struct S3Store {
    client: Arc<Client>,
    bucket: String,
    key: String,
}

impl S3Store {
    /// Create a store targeting `s3://bucket/key`.
    ///
    /// Credentials and region come from the ambient AWS environment;
    /// `AWS_ENDPOINT_URL` overrides the endpoint for S3-compatible
    /// services. Bucket reachability is probed up front so a bad
    /// configuration fails before any sampling work is done.
    pub async fn new(bucket: &str, key: &str) -> StorageResult<Self> {
        info!("Initializing S3 result store");

        let aws_config = if let Ok(endpoint) = std::env::var("AWS_ENDPOINT_URL") {
            aws_config::from_env().endpoint_url(endpoint).load().await
        } else {
            aws_config::load_from_env().await
        };

        let client = Client::new(&aws_config);

        client
            .head_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| StorageError::connection(format!("Failed to access S3 bucket: {e}")))?;

        Ok(Self {
            client: Arc::new(client),
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

#[async_trait]
impl ResultStore for S3Store {
    async fn write_result(&self, line: &str) -> StorageResult<()> {
        debug!("Writing result to s3://{}/{}", self.bucket, self.key);

        let body = format!("{line}\n").into_bytes();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .body(body.into())
            .send()
            .await
            .map_err(|e| StorageError::write(format!("Failed to write result object: {e}")))?;

        Ok(())
    }

    async fn read_result(&self) -> StorageResult<Option<String>> {
        match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .send()
            .await
        {
            Ok(result) => {
                let bytes = result
                    .body
                    .collect()
                    .await
                    .map_err(|e| StorageError::read(format!("Failed to read result object: {e}")))?
                    .into_bytes();

                let content = String::from_utf8(bytes.to_vec())
                    .map_err(|e| StorageError::read(format!("Result object is not UTF-8: {e}")))?;

                Ok(Some(content.trim_end_matches('\n').to_string()))
            }
            Err(_) => Ok(None),
        }
    }

    fn describe(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

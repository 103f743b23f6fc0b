//! Output location parsing

use std::fmt;
use std::path::PathBuf;

use super::error::{StorageError, StorageResult};

/// Where the result line goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    /// A local filesystem path
    File(PathBuf),
    /// An S3 object, `s3://bucket/key`
    S3 { bucket: String, key: String },
}

impl StorageLocation {
    /// Parse a location string.
    ///
    /// `s3://bucket/key` selects the S3 backend; anything else is treated
    /// as a filesystem path. A missing bucket or object key is a
    /// configuration error.
    pub fn parse(raw: &str) -> StorageResult<Self> {
        if raw.is_empty() {
            return Err(StorageError::configuration("output location is empty"));
        }

        if let Some(rest) = raw.strip_prefix("s3://") {
            let (bucket, key) = rest.split_once('/').ok_or_else(|| {
                StorageError::configuration(format!("S3 location '{raw}' has no object key"))
            })?;
            if bucket.is_empty() || key.is_empty() {
                return Err(StorageError::configuration(format!(
                    "S3 location '{raw}' needs both a bucket and an object key"
                )));
            }
            return Ok(Self::S3 {
                bucket: bucket.to_string(),
                key: key.to_string(),
            });
        }

        Ok(Self::File(PathBuf::from(raw)))
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::S3 { bucket, key } => write!(f, "s3://{bucket}/{key}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_paths() {
        let loc = StorageLocation::parse("/tmp/pi_result.txt").unwrap();
        assert_eq!(loc, StorageLocation::File(PathBuf::from("/tmp/pi_result.txt")));
    }

    #[test]
    fn parses_s3_uris() {
        let loc = StorageLocation::parse("s3://results-bucket/pi_result").unwrap();
        assert_eq!(
            loc,
            StorageLocation::S3 {
                bucket: "results-bucket".to_string(),
                key: "pi_result".to_string(),
            }
        );
    }

    #[test]
    fn s3_key_may_contain_slashes() {
        let loc = StorageLocation::parse("s3://bucket/runs/2024/pi").unwrap();
        assert_eq!(
            loc,
            StorageLocation::S3 {
                bucket: "bucket".to_string(),
                key: "runs/2024/pi".to_string(),
            }
        );
    }

    #[test]
    fn rejects_incomplete_s3_uris() {
        assert!(StorageLocation::parse("s3://bucket-only").is_err());
        assert!(StorageLocation::parse("s3://bucket/").is_err());
        assert!(StorageLocation::parse("s3:///key").is_err());
        assert!(StorageLocation::parse("").is_err());
    }

    #[test]
    fn display_round_trips() {
        for raw in ["/tmp/pi.txt", "s3://bucket/runs/pi"] {
            assert_eq!(StorageLocation::parse(raw).unwrap().to_string(), raw);
        }
    }
}

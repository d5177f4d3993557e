//! Object storage integration.
//!
//! The upload loop never talks to S3 directly. It builds a [`PutRequest`]
//! per file and hands it to an [`ObjectStore`]. The production store,
//! [`s3::S3ObjectStore`], sends it as a single `PutObject` call through
//! rusoto; tests plug in stores that record or reject requests.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐
//! │  Upload loop    │────▶│   PutRequest    │
//! └─────────────────┘     └────────┬────────┘
//!                                  │
//!                          ┌───────▼────────┐
//!                          │  ObjectStore   │
//!                          └───────┬────────┘
//!                                  │
//!                          ┌───────▼────────┐
//!                          │ S3-compatible  │
//!                          │    endpoint    │
//!                          └────────────────┘
//! ```
//!
//! ## Usage Example
//!
//! ```no_run
//! use s3_uploader::cloud::{ObjectStore, PutRequest, UploadBody};
//! use s3_uploader::cloud::s3::S3ObjectStore;
//! use s3_uploader::config::UploadConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = UploadConfig {
//!     bucket: "assets".to_string(),
//!     source: "dist/**".to_string(),
//!     ..UploadConfig::default()
//! };
//! let store = S3ObjectStore::new(&config)?;
//!
//! store.put_object(PutRequest {
//!     bucket: config.bucket.clone(),
//!     key: "/hello.txt".to_string(),
//!     acl: Some("public-read".to_string()),
//!     content_type: "text/plain".to_string(),
//!     content_encoding: None,
//!     body: UploadBody::Bytes(b"hello".to_vec()),
//! })?;
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::Read;

use crate::error::BoxError;

/// S3 client construction from static credentials
pub mod client;

/// rusoto-backed object store
pub mod s3;

/// Payload of a single object write.
#[derive(Debug)]
pub enum UploadBody {
    /// An open file streamed as-is, with its length in bytes.
    File { file: File, len: u64 },
    /// Fully buffered content, used for gzip output.
    Bytes(Vec<u8>),
}

impl UploadBody {
    /// Number of bytes that will be sent.
    pub fn len(&self) -> u64 {
        match self {
            UploadBody::File { len, .. } => *len,
            UploadBody::Bytes(bytes) => bytes.len() as u64,
        }
    }

    /// Whether the body carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain the body into memory.
    pub fn into_bytes(self) -> std::io::Result<Vec<u8>> {
        match self {
            UploadBody::File { mut file, len } => {
                let mut contents = Vec::with_capacity(len as usize);
                file.read_to_end(&mut contents)?;
                Ok(contents)
            }
            UploadBody::Bytes(bytes) => Ok(bytes),
        }
    }
}

/// A single object write.
#[derive(Debug)]
pub struct PutRequest {
    pub bucket: String,
    pub key: String,
    /// Canned ACL; `None` leaves the bucket default in place.
    pub acl: Option<String>,
    pub content_type: String,
    pub content_encoding: Option<String>,
    pub body: UploadBody,
}

/// Destination of object writes.
///
/// Calls are blocking: a call returns once the store has accepted or
/// rejected the object. Overwriting an existing key is not guarded.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStore {
    /// Write one object.
    fn put_object(&self, request: PutRequest) -> Result<(), BoxError>;
}

//! # s3-uploader
//!
//! A build-pipeline step that publishes local files to Amazon S3 or any
//! S3-compatible object store (minio, Ceph, R2, ...).
//!
//! ## Overview
//!
//! A run expands a source glob, removes everything matched by the exclude
//! globs, and writes each remaining regular file as one object under a
//! target prefix. Uploads are sequential and the first failure aborts the
//! run.
//!
//! ## Features
//!
//! - **Glob selection**: `*`, `?`, `[...]` and recursive `**` patterns
//! - **Exclusions**: any number of exclude globs, applied by exact path
//! - **Content types**: guessed from the file extension
//! - **Compression**: optional gzip with `Content-Encoding: gzip`
//! - **Dry run**: logs every planned upload without touching the store
//! - **Custom endpoints**: static credentials, plain HTTP and path-style buckets
//!
//! ## Usage
//!
//! ```no_run
//! use s3_uploader::config::UploadConfig;
//! use s3_uploader::uploader;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = UploadConfig {
//!     endpoint: "http://minio:9000".to_string(),
//!     access_key: "minio".to_string(),
//!     secret_key: "minio123".to_string(),
//!     bucket: "assets".to_string(),
//!     source: "dist/**/*".to_string(),
//!     target: "bundle".to_string(),
//!     exclude: vec!["dist/**/*.map".to_string()],
//!     path_style: true,
//!     ..UploadConfig::default()
//! };
//!
//! let summary = uploader::run(&config)?;
//! println!("Uploaded {} files", summary.uploaded);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`config`]: Run configuration and its YAML/CLI/environment layering
//! - [`matcher`]: Include/exclude glob resolution
//! - [`uploader`]: The sequential upload loop
//! - [`cloud`]: Object store seam and the rusoto S3 implementation
//! - [`utils`]: Content types, gzip compression and key derivation
//! - [`error`]: Error taxonomy
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Run configuration
pub mod config;

/// Error types returned by a run
pub mod error;

/// Include/exclude glob resolution
pub mod matcher;

/// Sequential upload loop
pub mod uploader;

/// Object storage integration (S3)
pub mod cloud;

/// Utility functions for content types, compression and object keys
pub mod utils;

/// Application constants and configuration values
pub mod constants;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;

//! Helpers used by the upload loop.
//!
//! ## Components
//!
//! - **Content type**: MIME type lookup by file extension
//! - **Compression**: in-memory gzip encoding of file contents
//! - **Target keys**: object key derivation from the target prefix and a path
//!
//! ### Preparing a compressed upload
//!
//! ```no_run
//! use s3_uploader::utils::{compress::gzip_reader, content_type::content_type, key::target_key};
//! use std::fs::File;
//!
//! # fn example() -> std::io::Result<()> {
//! let path = "dist/app.js";
//! let key = target_key("bundle", path);
//! let body = gzip_reader(File::open(path)?)?;
//!
//! println!("{} ({}, {} bytes gzipped)", key, content_type(path), body.len());
//! # Ok(())
//! # }
//! ```

/// MIME type resolution by file extension
pub mod content_type;

/// In-memory gzip compression
pub mod compress;

/// Object key derivation
pub mod key;

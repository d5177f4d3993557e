//! Fixtures for the upload loop tests.
//!
//! [`create_test_file_structure`] lays out a small tree of `.txt` and `.log`
//! files for glob and loop tests, and [`RecordingStore`] stands in for S3,
//! keeping every write with its body drained so tests can inspect keys,
//! headers and payloads.

#![cfg(test)]

use anyhow::Result;
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

use crate::cloud::{ObjectStore, PutRequest};
use crate::error::BoxError;

/// Files of the standard fixture tree, relative to its root. Parent
/// directories are created as needed, giving three directories in total.
pub const FIXTURE_FILES: [(&str, &[u8]); 5] = [
    ("file1.txt", b"Test content 1"),
    ("file2.log", b"Test log content"),
    ("dir1/file3.txt", b"Test content 3"),
    ("dir1/subdir1/file4.txt", b"Test content 4"),
    ("dir2/file5.log", b"Another log file"),
];

/// A named temp file holding `content`, e.g. a YAML config or an upload body.
pub fn create_temp_file(content: &[u8]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content)?;
    file.flush()?;
    Ok(file)
}

/// A temp directory populated with [`FIXTURE_FILES`].
pub fn create_test_file_structure() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    for (relative, content) in FIXTURE_FILES {
        let path = temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    }
    Ok(temp_dir)
}

/// A request as seen by [`RecordingStore`], with the body drained.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPut {
    pub bucket: String,
    pub key: String,
    pub acl: Option<String>,
    pub content_type: String,
    pub content_encoding: Option<String>,
    pub body: Vec<u8>,
}

/// Object store that keeps every request in memory and optionally rejects
/// writes to one key.
#[derive(Default)]
pub struct RecordingStore {
    pub puts: RefCell<Vec<RecordedPut>>,
    pub fail_on_key: Option<String>,
}

impl RecordingStore {
    pub fn failing_on(key: &str) -> Self {
        RecordingStore {
            fail_on_key: Some(key.to_string()),
            ..RecordingStore::default()
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.puts.borrow().iter().map(|p| p.key.clone()).collect()
    }
}

impl ObjectStore for RecordingStore {
    fn put_object(&self, request: PutRequest) -> Result<(), BoxError> {
        if self.fail_on_key.as_deref() == Some(request.key.as_str()) {
            return Err(format!("access denied for {}", request.key).into());
        }
        let body = request.body.into_bytes()?;
        self.puts.borrow_mut().push(RecordedPut {
            bucket: request.bucket,
            key: request.key,
            acl: request.acl,
            content_type: request.content_type,
            content_encoding: request.content_encoding,
            body,
        });
        Ok(())
    }
}

/// Read a file relative to `root`.
pub fn read_fixture(root: &Path, relative: &str) -> Vec<u8> {
    fs::read(root.join(relative)).unwrap_or_default()
}

//! The upload loop.
//!
//! A run resolves the match set once, then walks it in order and writes one
//! object per regular file. There is no retry and no partial-failure
//! recovery: the first open, compression or upload error ends the run and
//! is returned unchanged. Objects written before the failure stay in place.

use std::fs::{self, File};
use std::path::Path;

use log::{debug, error, info};

use crate::cloud::s3::S3ObjectStore;
use crate::cloud::{ObjectStore, PutRequest, UploadBody};
use crate::config::UploadConfig;
use crate::constants::GZIP_CONTENT_ENCODING;
use crate::error::{UploadError, UploadResult};
use crate::matcher;
use crate::utils::compress::gzip_reader;
use crate::utils::content_type::content_type;
use crate::utils::key::target_key;

/// What happened to a single matched path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Written to the store.
    Uploaded,
    /// Would have been written, but the run is a dry run.
    DryRun,
    /// Directory, or a path that could not be stat'ed.
    Skipped,
}

/// Counts for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub matched: usize,
    pub uploaded: usize,
    pub dry_run: usize,
    pub skipped: usize,
}

impl UploadSummary {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Uploaded => self.uploaded += 1,
            FileOutcome::DryRun => self.dry_run += 1,
            FileOutcome::Skipped => self.skipped += 1,
        }
    }
}

/// Upload every file selected by `config` to the S3 endpoint it names.
///
/// Creates the rusoto-backed store and delegates to [`run_with_store`].
pub fn run(config: &UploadConfig) -> UploadResult<UploadSummary> {
    let store = S3ObjectStore::new(config)?;
    run_with_store(config, &store)
}

/// Upload every file selected by `config` through `store`.
///
/// # Returns
///
/// * `Ok(UploadSummary)` - Every matched path was uploaded or skipped
/// * `Err(UploadError)` - The first fatal error; later paths were not visited
pub fn run_with_store<S: ObjectStore + ?Sized>(
    config: &UploadConfig,
    store: &S,
) -> UploadResult<UploadSummary> {
    info!(
        "Attempting to upload (region: {}, endpoint: {}, bucket: {})",
        config.region,
        if config.endpoint.is_empty() { "<aws>" } else { config.endpoint.as_str() },
        config.bucket
    );

    let matches = matcher::resolve(&config.source, &config.exclude).map_err(|e| {
        error!("Could not match files: {}", e);
        e
    })?;
    debug!("Matched {} paths for {}", matches.len(), config.source);

    let mut summary = UploadSummary {
        matched: matches.len(),
        ..UploadSummary::default()
    };
    for path in &matches {
        summary.record(upload_file(config, store, path)?);
    }

    info!(
        "Finished: {} uploaded, {} skipped{}",
        summary.uploaded,
        summary.skipped,
        if config.dry_run {
            format!(", {} not uploaded (dry run)", summary.dry_run)
        } else {
            String::new()
        }
    );
    Ok(summary)
}

/// Process one matched path.
pub fn upload_file<S: ObjectStore + ?Sized>(
    config: &UploadConfig,
    store: &S,
    path: &Path,
) -> UploadResult<FileOutcome> {
    // A matched path that cannot be stat'ed is skipped rather than failing
    // the whole run.
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!("Skipping {}: {}", path.display(), e);
            return Ok(FileOutcome::Skipped);
        }
    };
    if metadata.is_dir() {
        return Ok(FileOutcome::Skipped);
    }

    let key = target_key(&config.target, path);
    let content_type = content_type(path);

    info!(
        "Uploading file {} to s3://{}{} (content-type: {})",
        path.display(),
        config.bucket,
        key,
        content_type
    );

    if config.dry_run {
        return Ok(FileOutcome::DryRun);
    }

    let file = File::open(path).map_err(|source| {
        error!("Problem opening file {}: {}", path.display(), source);
        UploadError::FileOpen {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let (body, content_encoding) = if config.compress {
        let compressed = gzip_reader(file).map_err(|source| {
            error!("Problem gzipping file {}: {}", path.display(), source);
            UploadError::Compression {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(
            "Compressed {} from {} to {} bytes",
            path.display(),
            metadata.len(),
            compressed.len()
        );
        (
            UploadBody::Bytes(compressed),
            Some(GZIP_CONTENT_ENCODING.to_string()),
        )
    } else {
        (
            UploadBody::File {
                file,
                len: metadata.len(),
            },
            None,
        )
    };

    let request = PutRequest {
        bucket: config.bucket.clone(),
        key: key.clone(),
        acl: config.acl(),
        content_type,
        content_encoding,
        body,
    };

    // The request owns the file handle, so it is closed when this returns.
    store.put_object(request).map_err(|source| {
        error!(
            "Could not upload file {} to s3://{}{}: {}",
            path.display(),
            config.bucket,
            key,
            source
        );
        UploadError::Upload {
            path: path.to_path_buf(),
            bucket: config.bucket.clone(),
            key,
            source,
        }
    })?;

    Ok(FileOutcome::Uploaded)
}

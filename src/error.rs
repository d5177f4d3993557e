//! Error taxonomy for an upload run.
//!
//! Every variant except [`UploadError::Config`] and [`UploadError::Client`]
//! is raised from inside a run and aborts it. A failed `stat` on a matched
//! path is deliberately not represented here: the upload loop skips such
//! entries instead of failing.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by an [`ObjectStore`](crate::cloud::ObjectStore).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort an upload run.
#[derive(Debug, Error)]
pub enum UploadError {
    /// A glob pattern was invalid or the filesystem walk failed.
    #[error("could not match files for pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: GlobFailure,
    },

    /// A matched, statable, non-directory file could not be opened.
    #[error("problem opening file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the file or running it through the gzip encoder failed.
    #[error("problem gzipping file {}: {source}", .path.display())]
    Compression {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The object store rejected or failed the write.
    #[error("could not upload {} to s3://{bucket}{key}: {source}", .path.display())]
    Upload {
        path: PathBuf,
        bucket: String,
        key: String,
        #[source]
        source: BoxError,
    },

    /// The storage client could not be constructed.
    #[error("could not create storage client: {0}")]
    Client(String),

    /// The run configuration is incomplete or could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// The ways glob expansion fails.
#[derive(Debug, Error)]
pub enum GlobFailure {
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Walk(#[from] glob::GlobError),

    /// A pattern without wildcards named a path that does not exist.
    #[error(transparent)]
    Missing(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_error_mentions_pattern() {
        let source = glob::Pattern::new("[").unwrap_err();
        let err = UploadError::Glob {
            pattern: "[".to_string(),
            source: source.into(),
        };
        assert!(err.to_string().contains("pattern '['"));
    }

    #[test]
    fn test_upload_error_keeps_source() {
        let err = UploadError::Upload {
            path: PathBuf::from("dist/app.js"),
            bucket: "assets".to_string(),
            key: "/bundle/dist/app.js".to_string(),
            source: "access denied".into(),
        };
        assert_eq!(
            err.to_string(),
            "could not upload dist/app.js to s3://assets/bundle/dist/app.js: access denied"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}

use std::path::Path;

use crate::constants::DEFAULT_CONTENT_TYPE;

/// Determine the content type for a file based on its extension.
///
/// S3 stores objects as `binary/octet-stream` unless told otherwise, which
/// browsers refuse to render, so every upload carries an explicit type.
/// Lookup is case-insensitive. Files with an unknown or absent extension get
/// `application/octet-stream`.
///
/// # Example
///
/// ```
/// use s3_uploader::utils::content_type::content_type;
///
/// assert_eq!(content_type("index.html"), "text/html");
/// assert_eq!(content_type("LICENSE"), "application/octet-stream");
/// ```
pub fn content_type(path: impl AsRef<Path>) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string()
}

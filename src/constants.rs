//! Global constants for the s3-uploader application.
//!
//! This module centralizes hardcoded values so defaults and header values
//! live in one place.

// Content negotiation
/// Content type used when the extension is unknown or absent
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Content-Encoding value set on compressed uploads
pub const GZIP_CONTENT_ENCODING: &str = "gzip";

// Configuration defaults
/// Region used when none is configured
pub const DEFAULT_REGION: &str = "us-east-1";

/// Canned ACL applied to uploaded objects when none is configured
pub const DEFAULT_ACL: &str = "private";

/// Endpoint scheme that disables TLS on the storage client
pub const PLAIN_HTTP_SCHEME: &str = "http://";

// Environment variables
/// Fallback source for the access key
pub const ENV_AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";

/// Fallback source for the secret key
pub const ENV_AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// Placeholder printed instead of credentials
pub const REDACTED: &str = "[REDACTED]";

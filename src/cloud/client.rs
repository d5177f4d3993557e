use log::{debug, warn};
use rusoto_core::{HttpClient, Region};
use rusoto_credential::StaticProvider;
use rusoto_s3::S3Client;

use crate::config::UploadConfig;
use crate::constants::PLAIN_HTTP_SCHEME;
use crate::error::{UploadError, UploadResult};

/// Create an S3 client from the static credentials, region and endpoint in
/// `config`.
///
/// No other credential source is consulted. An endpoint starting with
/// `http://` is used verbatim, which turns TLS off for every request.
pub fn create_s3_client(config: &UploadConfig) -> UploadResult<S3Client> {
    let region = resolve_region(&config.region, &config.endpoint);
    let credentials = StaticProvider::new_minimal(
        config.access_key.clone(),
        config.secret_key.clone(),
    );
    let http_client = HttpClient::new().map_err(|e| UploadError::Client(e.to_string()))?;

    if !config.path_style && !config.endpoint.is_empty() {
        warn!(
            "Virtual-host addressing is not available for custom endpoints, using path-style for {}",
            config.endpoint
        );
    }
    debug!(
        "Created S3 client for region {} (ssl: {})",
        region.name(),
        uses_ssl(&config.endpoint)
    );

    Ok(S3Client::new_with(http_client, credentials, region))
}

/// Pick the rusoto region for a region name and optional endpoint.
///
/// Without an endpoint the region name must be a known AWS region; unknown
/// names fall back to the default region. With an endpoint the region name
/// is kept as-is for request signing.
pub fn resolve_region(region_name: &str, endpoint: &str) -> Region {
    if !endpoint.is_empty() {
        return Region::Custom {
            name: region_name.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        };
    }

    match region_name.parse::<Region>() {
        Ok(region) => region,
        Err(_) => {
            warn!("Invalid region '{}', using default", region_name);
            Region::default()
        }
    }
}

/// Whether requests to `endpoint` go over TLS.
pub fn uses_ssl(endpoint: &str) -> bool {
    !endpoint.starts_with(PLAIN_HTTP_SCHEME)
}

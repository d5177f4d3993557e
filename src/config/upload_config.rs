use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::constants::{
    DEFAULT_ACL, DEFAULT_REGION, ENV_AWS_ACCESS_KEY_ID, ENV_AWS_SECRET_ACCESS_KEY, REDACTED,
};
use crate::error::{UploadError, UploadResult};

/// Parameters of one upload run.
///
/// Built once before the run starts and never mutated afterwards.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Custom endpoint; empty means the AWS endpoint for `region`
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub region: String,
    /// Canned ACL; empty leaves the bucket default
    pub acl: String,
    /// Include glob
    pub source: String,
    /// Key prefix
    pub target: String,
    /// Exclude globs
    pub exclude: Vec<String>,
    pub path_style: bool,
    pub dry_run: bool,
    pub compress: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            endpoint: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            bucket: String::new(),
            region: DEFAULT_REGION.to_string(),
            acl: DEFAULT_ACL.to_string(),
            source: String::new(),
            target: String::new(),
            exclude: Vec::new(),
            path_style: false,
            dry_run: false,
            compress: false,
        }
    }
}

// Keeps credentials out of logs.
impl fmt::Debug for UploadConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &str| if value.is_empty() { "" } else { REDACTED };
        f.debug_struct("UploadConfig")
            .field("endpoint", &self.endpoint)
            .field("access_key", &redact(&self.access_key))
            .field("secret_key", &redact(&self.secret_key))
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("acl", &self.acl)
            .field("source", &self.source)
            .field("target", &self.target)
            .field("exclude", &self.exclude)
            .field("path_style", &self.path_style)
            .field("dry_run", &self.dry_run)
            .field("compress", &self.compress)
            .finish()
    }
}

impl UploadConfig {
    /// Load configuration from a YAML file. Missing keys take their defaults.
    pub fn from_yaml_file(path: &Path) -> UploadResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            UploadError::Config(format!("failed to read config file {}: {}", path.display(), e))
        })?;

        let config: UploadConfig = serde_yaml::from_str(&content).map_err(|e| {
            UploadError::Config(format!("failed to parse config file {}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Overlay values given on the command line or through the environment.
    ///
    /// Options that were given replace the current value, including flags
    /// given as false. A non-empty exclude list replaces the current list.
    pub fn apply_args(&mut self, args: &Args) {
        let overrides = [
            (&mut self.endpoint, &args.endpoint),
            (&mut self.access_key, &args.access_key),
            (&mut self.secret_key, &args.secret_key),
            (&mut self.bucket, &args.bucket),
            (&mut self.region, &args.region),
            (&mut self.acl, &args.acl),
            (&mut self.source, &args.source),
            (&mut self.target, &args.target),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value.clone();
            }
        }

        if !args.exclude.is_empty() {
            self.exclude = args.exclude.clone();
        }
        let flags = [
            (&mut self.path_style, args.path_style),
            (&mut self.dry_run, args.dry_run),
            (&mut self.compress, args.compress),
        ];
        for (field, value) in flags {
            if let Some(value) = value {
                *field = value;
            }
        }
    }

    /// Fill in credentials from the standard AWS environment variables when
    /// none were configured.
    pub fn apply_credential_fallbacks(&mut self) {
        if self.access_key.is_empty() {
            if let Ok(key) = env::var(ENV_AWS_ACCESS_KEY_ID) {
                self.access_key = key;
            }
        }
        if self.secret_key.is_empty() {
            if let Ok(secret) = env::var(ENV_AWS_SECRET_ACCESS_KEY) {
                self.secret_key = secret;
            }
        }
    }

    /// Check that the fields a run cannot do without are present.
    pub fn validate(&self) -> UploadResult<()> {
        if self.bucket.trim().is_empty() {
            return Err(UploadError::Config("bucket must be set".to_string()));
        }
        if self.source.trim().is_empty() {
            return Err(UploadError::Config("source pattern must be set".to_string()));
        }
        if self.region.trim().is_empty() {
            return Err(UploadError::Config("region must be set".to_string()));
        }
        Ok(())
    }

    /// The ACL to send with each object, if any.
    pub fn acl(&self) -> Option<String> {
        if self.acl.is_empty() {
            None
        } else {
            Some(self.acl.clone())
        }
    }
}

/// Build the run configuration from parsed arguments.
///
/// The YAML file named by `--config` (if any) is the base layer, command
/// line and `PLUGIN_*` environment values override it, and missing
/// credentials fall back to `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`.
pub fn load_config(args: &Args) -> UploadResult<UploadConfig> {
    let mut config = match &args.config {
        Some(path) => UploadConfig::from_yaml_file(path)?,
        None => UploadConfig::default(),
    };
    config.apply_args(args);
    config.apply_credential_fallbacks();
    config.validate()?;
    Ok(config)
}

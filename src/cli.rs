use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the s3-uploader tool.
///
/// Every option can also be supplied through the `PLUGIN_*` environment
/// variable named in its help text, which is how pipeline runners pass
/// settings to a step. Values given here override the YAML file passed with
/// `--config`. Boolean flags take an optional value, so `--compress=false`
/// or `PLUGIN_COMPRESS=false` turns off a setting enabled in that file.
#[derive(Parser, Debug, Default)]
#[clap(name = "s3-uploader", version, about = "Publish build artifacts to S3-compatible storage")]
pub struct Args {
    /// Custom endpoint URL for S3-compatible storage (e.g. http://minio:9000)
    #[clap(long, env = "PLUGIN_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Access key (falls back to AWS_ACCESS_KEY_ID)
    #[clap(long, env = "PLUGIN_ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,

    /// Secret key (falls back to AWS_SECRET_ACCESS_KEY)
    #[clap(long, env = "PLUGIN_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Bucket to upload into
    #[clap(short, long, env = "PLUGIN_BUCKET")]
    pub bucket: Option<String>,

    /// Bucket region (default: us-east-1)
    #[clap(long, env = "PLUGIN_REGION")]
    pub region: Option<String>,

    /// Canned ACL for uploaded objects (default: private)
    #[clap(long, env = "PLUGIN_ACL")]
    pub acl: Option<String>,

    /// Glob selecting the files to upload (supports **)
    #[clap(short, long, env = "PLUGIN_SOURCE")]
    pub source: Option<String>,

    /// Key prefix the matched paths are uploaded under
    #[clap(short, long, env = "PLUGIN_TARGET")]
    pub target: Option<String>,

    /// Globs of files to leave out (comma-separated or repeated)
    #[clap(short, long, env = "PLUGIN_EXCLUDE", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Put the bucket in the URL path instead of the host name (needed for minio)
    #[clap(long, env = "PLUGIN_PATH_STYLE", num_args = 0..=1, default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub path_style: Option<bool>,

    /// Log what would be uploaded without uploading anything
    #[clap(long, env = "PLUGIN_DRY_RUN", num_args = 0..=1, default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub dry_run: Option<bool>,

    /// Gzip each file and upload it with Content-Encoding: gzip
    #[clap(long, env = "PLUGIN_COMPRESS", num_args = 0..=1, default_missing_value = "true", value_parser = BoolishValueParser::new())]
    pub compress: Option<bool>,

    /// Path to a YAML configuration file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let args = Args::try_parse_from([
            "s3-uploader",
            "--bucket",
            "assets",
            "--source",
            "dist/**/*",
            "--target",
            "bundle",
            "--exclude",
            "dist/*.map,dist/tmp/**",
            "--exclude",
            "dist/.DS_Store",
            "--endpoint",
            "http://minio:9000",
            "--path-style",
            "--dry-run",
            "--compress",
        ])
        .unwrap();

        assert_eq!(args.bucket.as_deref(), Some("assets"));
        assert_eq!(args.source.as_deref(), Some("dist/**/*"));
        assert_eq!(args.target.as_deref(), Some("bundle"));
        assert_eq!(
            args.exclude,
            vec!["dist/*.map", "dist/tmp/**", "dist/.DS_Store"]
        );
        assert_eq!(args.endpoint.as_deref(), Some("http://minio:9000"));
        assert_eq!(args.path_style, Some(true));
        assert_eq!(args.dry_run, Some(true));
        assert_eq!(args.compress, Some(true));
        assert!(!args.verbose);
    }

    #[test]
    fn test_flags_default_to_off() {
        let args = Args::try_parse_from(["s3-uploader", "-b", "assets", "-s", "*.txt"]).unwrap();
        assert_eq!(args.path_style, None);
        assert_eq!(args.dry_run, None);
        assert_eq!(args.compress, None);
        assert!(args.exclude.is_empty());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_flags_accept_explicit_values() {
        let args = Args::try_parse_from([
            "s3-uploader",
            "--compress=false",
            "--dry-run",
            "no",
            "--path-style=1",
            "-b",
            "assets",
        ])
        .unwrap();

        assert_eq!(args.compress, Some(false));
        assert_eq!(args.dry_run, Some(false));
        assert_eq!(args.path_style, Some(true));
        assert_eq!(args.bucket.as_deref(), Some("assets"));
    }

    #[test]
    fn test_flag_rejects_non_boolean_value() {
        assert!(Args::try_parse_from(["s3-uploader", "--compress=maybe"]).is_err());
    }
}

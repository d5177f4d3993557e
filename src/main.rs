use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use s3_uploader::cli::Args;
use s3_uploader::config::load_config;
use s3_uploader::uploader;

fn main() -> ExitCode {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    if let Err(e) = initialize_logging(args.verbose) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Load the configuration and run the upload
fn execute(args: &Args) -> Result<()> {
    let config = load_config(args).context("Failed to load configuration")?;
    info!("Loaded configuration: {:?}", config);

    let summary = uploader::run(&config).context("Upload failed")?;
    if config.dry_run {
        info!("Dry run complete, {} files would be uploaded", summary.dry_run);
    } else {
        info!("Upload complete, {} files uploaded", summary.uploaded);
    }
    Ok(())
}

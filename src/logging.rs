//! Structured logging
//!
//! The terminal belongs to the UI, so log output goes to a file.
//! Filter priority: RUST_LOG env var > config level > "info".

use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "info";

fn build_filter(config_level: Option<&str>) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the logging subsystem, appending to `log_file`
pub fn init(config_level: Option<&str>, log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to initialise logging: {e}"))?;

    tracing::debug!(
        app = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        log_file = %log_file.display(),
        "Logging initialised"
    );

    Ok(())
}

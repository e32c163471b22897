//! Logging setup.
//!
//! The alternate screen owns stdout and stderr while the TUI runs, so events
//! only go to a log file, and only when one is configured.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Builds the event filter. `RUST_LOG` wins over the configured level.
pub fn filter(config: &LogConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid log level '{}'", config.level)),
    }
}

/// Installs the global subscriber. Returns false when no log file is set.
pub fn init(config: &LogConfig) -> Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(config)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(true)
}

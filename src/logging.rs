//! File logging setup.
//!
//! The game owns the terminal, so log records never go to stdout/stderr:
//! they are appended to `TUI128_LOG_PATH` when it is set, and dropped
//! otherwise.

use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::Config;

/// Install the global logger. Returns false when file logging is disabled.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    Builder::new()
        .parse_filters(&config.log_filter)
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;

    Ok(true)
}

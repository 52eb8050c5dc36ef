//! Runtime configuration from environment variables.
//!
//! - `TUI128_SEED`: RNG seed (default: derived from the system clock)
//! - `TUI128_LOG_PATH`: write logs to this file (default: logging disabled)
//! - `TUI128_LOG`: log filter, `env_logger` syntax (default: "info")
//!
//! Unparseable values fall back to the defaults.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SEED_VAR: &str = "TUI128_SEED";
pub const LOG_PATH_VAR: &str = "TUI128_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "TUI128_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Config {
    /// Read the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map instead of the environment)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_filter = lookup(LOG_FILTER_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            log_path,
            log_filter,
        }
    }
}

/// Seed from the sub-second part of the wall clock
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

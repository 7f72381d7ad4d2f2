//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DOTS_SEED` | clock | RNG seed for deals and refills |
//! | `DOTS_CLEAR_DELAY_MS` | 180 | Pause between release and commit |
//! | `DOTS_LOG_PATH` | unset | Log file; no log output when unset |
//! | `RUST_LOG` | `info` | `tracing` filter directives |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::types::CLEAR_DELAY_MS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotsConfig {
    /// Fixed seed, or `None` to seed from the clock.
    pub seed: Option<u32>,
    pub clear_delay_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self {
            seed: None,
            clear_delay_ms: CLEAR_DELAY_MS,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl DotsConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let seed = parse_u32(&lookup, "DOTS_SEED")?;
        let clear_delay_ms =
            parse_u32(&lookup, "DOTS_CLEAR_DELAY_MS")?.unwrap_or(defaults.clear_delay_ms);

        let log_path = non_empty(lookup("DOTS_LOG_PATH")).map(PathBuf::from);
        let log_filter = non_empty(lookup("RUST_LOG")).unwrap_or(defaults.log_filter);

        Ok(Self {
            seed,
            clear_delay_ms,
            log_path,
            log_filter,
        })
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_u32(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u32>, ConfigError> {
    match non_empty(lookup(var)) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

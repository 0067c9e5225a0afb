//! Configuration management and validation.
//!
//! Provides the runtime configuration for a merge run: how per-file
//! failures are reported and how verbose logging should be.

use crate::constants::DEFAULT_LOG_LEVEL;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reporting policy for files that fail to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first failing file; later files are never opened
    #[default]
    FailFast,
    /// Parse every file, then report all failures together
    CollectAll,
}

/// Runtime configuration for the address merger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How per-file parse failures are aggregated
    pub error_policy: ErrorPolicy,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::FailFast,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Create configuration with a custom error policy
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Create configuration with a custom log level
    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

        if !LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.log_level,
                LEVELS.join(", ")
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}

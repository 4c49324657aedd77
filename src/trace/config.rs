//! Trace configuration: whether dispatch is traced, and at which level.

use super::{LogSink, Silent, TraceSink};
use std::env::VarError;
use thiserror::Error;
use tracing::Level;

/// Environment variable read by [`TraceConfig::from_env`].
pub const TRACE_ENV: &str = "DISPATCH_TRACE";

/// Errors produced while reading trace configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The setting is neither a switch-off word nor a level name.
    #[error("invalid trace setting `{0}` (expected off, error, warn, info, debug or trace)")]
    InvalidSetting(String),

    /// The environment variable is set but not valid unicode.
    #[error("DISPATCH_TRACE is not valid unicode")]
    NotUnicode,
}

/// Configuration for trace output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    /// Whether entries are emitted at all.
    pub enabled: bool,
    /// Level entries are emitted at.
    pub level: Level,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::INFO,
        }
    }
}

impl TraceConfig {
    /// Configuration with tracing switched off.
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            level: Level::INFO,
        }
    }

    /// Parse a setting such as `off`, `info` or `DEBUG`.
    ///
    /// An empty setting yields the default configuration.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(Self::default());
        }

        match value.to_ascii_lowercase().as_str() {
            "off" | "false" | "0" | "none" => Ok(Self::disabled()),
            other => other
                .parse::<Level>()
                .map(|level| Self {
                    enabled: true,
                    level,
                })
                .map_err(|_| ConfigError::InvalidSetting(value.to_string())),
        }
    }

    /// Read the configuration from [`TRACE_ENV`].
    ///
    /// An unset variable yields the default configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(std::env::var(TRACE_ENV))
    }

    fn from_var(var: Result<String, VarError>) -> Result<Self, ConfigError> {
        match var {
            Ok(value) => Self::parse(&value),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode),
        }
    }

    /// Build the sink described by this configuration.
    pub fn sink(&self) -> Box<dyn TraceSink> {
        if self.enabled {
            Box::new(LogSink::new(self.level))
        } else {
            Box::new(Silent)
        }
    }
}

//! Configuration types.
//!
//! This module defines the enums and structs used for configuration, plus
//! validation of the library `Config`.

use std::net::SocketAddr;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_RESPONSE_BODY_SIZE,
};

/// Upper bound for `timeout_seconds`.
const MAX_TIMEOUT_SECS: u64 = 300;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```
/// use listing_import::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// Per-request timeout for the outbound page fetch, in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value for the outbound page fetch
    pub user_agent: String,

    /// Maximum number of body bytes read from a fetched page
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080))),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_body_bytes: MAX_RESPONSE_BODY_SIZE,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// Human-readable explanation, including the accepted range
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Checks that every field holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: format!("must be at most {MAX_TIMEOUT_SECS} seconds"),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigValidationError {
                field: "max_body_bytes",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

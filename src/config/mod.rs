//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, etc.)
//! - HTTP header value constants
//! - The library `Config` and its validation
//! - CLI option types and parsing

mod cli;
mod constants;
mod headers;
mod types;

// Re-export all constants
pub use cli::{Cli, Command};
pub use constants::*;
pub use headers::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel};

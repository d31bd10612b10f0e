//! Error handling and import statistics.
//!
//! This module provides:
//! - Error type definitions (initialization and import failures)
//! - Mapping of import failures to HTTP responses
//! - Per-outcome import statistics

mod response;
mod stats;
mod types;

// Re-export public API
pub use stats::ImportStats;
pub use types::{ImportError, ImportOutcome, InitializationError};

//! Command-line interface.
//!
//! Parsed with `clap` in the binary and converted into a library [`Config`].

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_RESPONSE_BODY_SIZE,
};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Import property listings from third-party advert pages.
#[derive(Debug, Parser)]
#[command(name = "listing_import", version, about)]
pub struct Cli {
    /// Log level
    #[arg(
        long,
        value_enum,
        default_value = "info",
        env = "LISTING_IMPORT_LOG_LEVEL",
        global = true
    )]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub log_format: LogFormat,

    /// Per-request timeout for fetching listing pages, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// User-Agent header sent to listing sites
    #[arg(
        long,
        default_value = DEFAULT_USER_AGENT,
        env = "LISTING_IMPORT_USER_AGENT",
        global = true
    )]
    pub user_agent: String,

    /// Maximum number of body bytes read from a listing page
    #[arg(long, default_value_t = MAX_RESPONSE_BODY_SIZE, global = true)]
    pub max_body_bytes: usize,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP import API
    Serve {
        /// Address to bind the HTTP server to
        #[arg(long, default_value = DEFAULT_BIND_ADDR, env = "LISTING_IMPORT_BIND")]
        bind: SocketAddr,
    },
    /// Extract a single listing and print it as JSON
    Extract {
        /// Listing page URL (also used to resolve relative image URLs)
        url: String,

        /// Read the page from a saved HTML file instead of fetching it
        #[arg(long)]
        html: Option<PathBuf>,
    },
}

impl Cli {
    /// Builds the library configuration from the parsed arguments.
    pub fn config(&self) -> Config {
        let mut config = Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            max_body_bytes: self.max_body_bytes,
            ..Default::default()
        };
        if let Command::Serve { bind } = &self.command {
            config.bind_addr = *bind;
        }
        config
    }
}

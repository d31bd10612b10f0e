//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `listing_import` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing extracted properties for the `extract` command
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use listing_import::{
    extract, fetch_page, init_client, init_logger_with, start_server, validate_import_url, Cli,
    Command, Config, ExtractedProperty,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory, falling back to the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = cli.config();
    if let Err(e) = config.validate() {
        eprintln!("listing_import error: {e}");
        process::exit(2);
    }

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match cli.command {
        Command::Serve { .. } => start_server(config).await,
        Command::Extract { url, html } => run_extract(&config, &url, html.as_deref())
            .await
            .and_then(|property| print_property(&property)),
    };

    if let Err(e) = outcome {
        eprintln!("listing_import error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

/// Extracts one listing, from a saved file when `html_file` is given.
async fn run_extract(
    config: &Config,
    url: &str,
    html_file: Option<&std::path::Path>,
) -> Result<ExtractedProperty> {
    if let Some(path) = html_file {
        let html = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(extract(&String::from_utf8_lossy(&html), url));
    }

    let url = validate_import_url(Some(url)).context("Invalid listing URL")?;
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let html = fetch_page(&client, &url, config.max_body_bytes)
        .await
        .with_context(|| format!("Failed to fetch {url}"))?;
    Ok(extract(&html, url.as_str()))
}

fn print_property(property: &ExtractedProperty) -> Result<()> {
    let json = serde_json::to_string_pretty(property).context("Failed to serialize property")?;
    println!("{json}");
    Ok(())
}

//! listing_import library: property listing extraction and import API
//!
//! This library turns the URL of a third-party property advert into a
//! normalized [`ExtractedProperty`]: title, address, description, price,
//! rooms, size, type, images, features, and video tour link. Extraction is
//! best-effort and layered: Open Graph tags first, then JSON-LD structured
//! data, then regex heuristics over the raw HTML.
//!
//! # Example
//!
//! ```no_run
//! use listing_import::{extract, fetch_page, init_client, validate_import_url, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config)?;
//! let url = validate_import_url(Some("https://listings.example/p/1"))?;
//! let html = fetch_page(&client, &url, config.max_body_bytes).await?;
//!
//! let property = extract(&html, url.as_str());
//! println!("{} ({} images)", property.title, property.images.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Fetching and serving require a Tokio runtime. [`extract`] itself is
//! synchronous and has no runtime requirements.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod extract;
mod fetch;
pub mod initialization;
mod server;
mod utils;

// Re-export public API
pub use config::{Cli, Command, Config, ConfigValidationError, LogFormat, LogLevel};
pub use error_handling::{ImportError, ImportOutcome, ImportStats, InitializationError};
pub use extract::{extract, normalize_image_url, ExtractedProperty, Feature, PropertyType};
pub use fetch::{fetch_page, validate_import_url};
pub use initialization::{init_client, init_logger_with};
pub use server::{router, start_server, AppState, IMPORT_PATH};

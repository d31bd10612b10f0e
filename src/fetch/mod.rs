//! Outbound side of an import: URL validation and page download.

mod page;
mod validate;

// Re-export public API
pub use validate::validate_import_url;
pub use page::fetch_page;

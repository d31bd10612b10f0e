//! HTTP handlers.

mod import;
mod status;

pub use import::import_handler;
pub use status::status_handler;

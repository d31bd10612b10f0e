//! Shared helpers: pattern and selector compilation, string normalization.

mod patterns;
mod selector;
pub mod text;

pub use patterns::compile_regex_unsafe;
pub use selector::parse_selector_unsafe;

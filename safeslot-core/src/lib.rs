//! Core utilities for safeslot.
//!
//! This crate provides the identifier sanitizer and the string utilities
//! shared by the schema model and both generators.

mod file;
mod naming;

// File operations
pub use file::{File, WriteResult};
// Naming utilities
pub use naming::{
    DEFAULT_PREFIX, RUST_KEYWORDS, camelcase, is_rust_keyword, is_safe_identifier,
    rust_field_ident, sanitize, sanitize_with_prefix, underscore,
};

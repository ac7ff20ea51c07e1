//! Rust AST builders for generated class modules.
//!
//! These provide a small API for constructing Rust items which are then
//! rendered via [`CodeBuilder`](safeslot_codegen::builder::CodeBuilder).

mod structs;

pub use structs::{Field, Struct};

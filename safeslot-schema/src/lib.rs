//! Schema model, loading and slot alias binding for safeslot.
//!
//! # Architecture
//!
//! ```text
//! schema.toml → parse → SchemaDefinition → bind_safe_aliases → generators
//! ```
//!
//! Schemas can also be assembled in code with [`SchemaBuilder`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod alias;
mod builder;
mod error;
mod model;
mod parse;
mod validate;

pub use alias::{
    AliasCollision, bind_safe_aliases, bind_safe_aliases_with_prefix, find_alias_collisions,
};
pub use builder::SchemaBuilder;
pub use error::{Error, Result};
pub use model::{ClassDefinition, FALLBACK_RANGE, Range, SchemaDefinition, SlotDefinition};
pub use parse::{DEFAULT_FILENAME, SchemaFile, parse_schema};

//! Shared code generation utilities for safeslot.
//!
//! This crate provides the language-agnostic pieces used by both
//! generators (`safeslot-jsonschema`, `safeslot-classgen`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, Renderable)
//! - [`lint`] - Schema lints and diagnostics run before generation

pub mod builder;
pub mod lint;

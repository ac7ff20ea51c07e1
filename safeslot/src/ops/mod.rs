//! Core operations.
//!
//! This module contains the business logic for safeslot commands,
//! separated from CLI argument parsing and output rendering.

pub mod bind;
pub mod check;
pub mod emit;
pub mod validate;

pub use bind::bind;
pub use check::check;
pub use emit::emit;
pub use validate::validate;

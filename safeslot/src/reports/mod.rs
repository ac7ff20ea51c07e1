//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod emit;
mod output;
mod validate;

pub use check::{AliasEntry, CheckReport};
pub use emit::EmitReport;
pub use output::{Report, TerminalOutput};
pub use validate::ValidateReport;

//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// A slot whose name was replaced by a safe alias.
#[derive(Debug)]
pub struct AliasEntry {
    /// Original slot name.
    pub slot: String,
    /// Effective name used by the generators.
    pub alias: String,
}

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    pub schema_name: String,
    pub class_count: usize,
    pub slot_count: usize,
    /// Aliased slots in declaration order.
    pub aliases: Vec<AliasEntry>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        out.newline();
        out.key_value("Schema", &self.schema_name);
        out.key_value("Classes", &self.class_count.to_string());
        out.key_value("Slots", &self.slot_count.to_string());

        if !self.aliases.is_empty() {
            out.newline();
            out.section("Aliases");
            for entry in &self.aliases {
                out.list_item(&format!("{} -> {}", entry.slot, entry.alias));
            }
        }
    }
}

//! Check operation - schema lints and alias table.

use std::path::Path;

use safeslot_codegen::lint::{Linter, Severity};
use safeslot_schema::SchemaDefinition;

use crate::reports::{AliasEntry, CheckReport};

/// Execute the check operation.
///
/// Runs every lint over the bound schema and collects the slot aliases.
pub fn check(schema: &SchemaDefinition, schema_path: &Path) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in Linter::new().run(schema) {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    let aliases = schema
        .slots
        .values()
        .filter(|slot| slot.is_aliased())
        .map(|slot| AliasEntry {
            slot: slot.name.clone(),
            alias: slot.effective_name().to_string(),
        })
        .collect();

    CheckReport {
        schema_path: schema_path.to_path_buf(),
        schema_name: schema.name.clone(),
        class_count: schema.classes.len(),
        slot_count: schema.slots.len(),
        aliases,
        errors,
        warnings,
        infos,
    }
}

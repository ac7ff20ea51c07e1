//! Lint for slot ranges that name neither a builtin type nor a class.

use safeslot_schema::SchemaDefinition;

use super::{Diagnostic, Lint};

/// Lint that errors on unresolvable slot ranges.
///
/// Schema files are rejected at load time for this; schemas assembled in
/// code are not, and both generators fall back to accepting any value.
pub struct UnresolvedRangeLint;

impl Lint for UnresolvedRangeLint {
    fn name(&self) -> &'static str {
        "unresolved-range"
    }

    fn check(&self, schema: &SchemaDefinition, diagnostics: &mut Vec<Diagnostic>) {
        for slot in schema.slots.values() {
            if schema.slot_range(slot).is_none() {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "slot '{}' has unknown range '{}'",
                            slot.name,
                            schema.range_name(slot)
                        ),
                    )
                    .at(format!("slots.{}", slot.name)),
                );
            }
        }
    }
}

//! Lint for slots that would have no field name.

use safeslot_schema::SchemaDefinition;

use super::{Diagnostic, Lint};

/// Lint that errors on slots whose effective name is empty.
///
/// An empty name or alias has nothing to sanitize, so neither generator
/// can key the slot by a safe identifier.
pub struct EmptySlotNameLint;

impl Lint for EmptySlotNameLint {
    fn name(&self) -> &'static str {
        "empty-slot-name"
    }

    fn check(&self, schema: &SchemaDefinition, diagnostics: &mut Vec<Diagnostic>) {
        for slot in schema.slots.values() {
            if !slot.effective_name().is_empty() {
                continue;
            }
            let message = if slot.name.is_empty() {
                "slot name is empty".to_string()
            } else {
                format!("slot '{}' has an empty alias", slot.name)
            };
            diagnostics.push(
                Diagnostic::error(self.name(), message).at(format!("slots.{}", slot.name)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use safeslot_schema::{SchemaBuilder, SlotDefinition, bind_safe_aliases};

    use super::*;

    #[test]
    fn test_empty_slot_name() {
        let mut schema = SchemaBuilder::new("s")
            .add_class("c", ["a", ""], true)
            .add_defaults()
            .build();
        bind_safe_aliases(&mut schema);

        let mut diagnostics = Vec::new();
        EmptySlotNameLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].message, "slot name is empty");
    }

    #[test]
    fn test_empty_alias() {
        let schema = SchemaBuilder::new("s")
            .add_slot(SlotDefinition::new("1S").alias(""))
            .add_class("c", ["1S"], true)
            .build();

        let mut diagnostics = Vec::new();
        EmptySlotNameLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("slots.1S"));
    }

    #[test]
    fn test_named_slots_pass() {
        let mut schema = SchemaBuilder::new("s")
            .add_class("c", ["a", "1S", "a/b"], true)
            .build();
        bind_safe_aliases(&mut schema);

        let mut diagnostics = Vec::new();
        EmptySlotNameLint.check(&schema, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}

//! Lint for slots that share an effective name within a class.

use safeslot_schema::{SchemaDefinition, find_alias_collisions};

use super::{Diagnostic, Lint};

/// Lint that warns when distinct slots of one class sanitize to the same
/// identifier.
///
/// The alias binder does not resolve these; the generated JSON Schema and
/// class would each silently keep only one of the slots.
pub struct AliasCollisionLint;

impl Lint for AliasCollisionLint {
    fn name(&self) -> &'static str {
        "alias-collision"
    }

    fn check(&self, schema: &SchemaDefinition, diagnostics: &mut Vec<Diagnostic>) {
        for collision in find_alias_collisions(schema) {
            let slots = collision
                .slots
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "slots {} of class '{}' all resolve to '{}'",
                        slots, collision.class, collision.effective_name
                    ),
                )
                .at(format!("classes.{}", collision.class)),
            );
        }
    }
}

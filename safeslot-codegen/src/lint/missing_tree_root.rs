//! Lint for schemas without a tree root class.

use safeslot_schema::SchemaDefinition;

use super::{Diagnostic, Lint};

/// Lint that notes when no class is marked as tree root.
///
/// Without one, the top level of the generated JSON Schema accepts any
/// object and instances must be validated against an explicit class.
pub struct MissingTreeRootLint;

impl Lint for MissingTreeRootLint {
    fn name(&self) -> &'static str {
        "missing-tree-root"
    }

    fn check(&self, schema: &SchemaDefinition, diagnostics: &mut Vec<Diagnostic>) {
        if !schema.classes.is_empty() && schema.tree_root().is_none() {
            diagnostics.push(Diagnostic::info(
                self.name(),
                "no class is marked as tree root; instances must name a target class",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use safeslot_schema::SchemaBuilder;

    use super::*;

    #[test]
    fn test_missing_tree_root() {
        let schema = SchemaBuilder::new("s").add_class("c", ["a"], false).build();

        let mut diagnostics = Vec::new();
        MissingTreeRootLint.check(&schema, &mut diagnostics);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, crate::lint::Severity::Info);
    }

    #[test]
    fn test_empty_schema_not_reported() {
        let schema = SchemaBuilder::new("s").build();

        let mut diagnostics = Vec::new();
        MissingTreeRootLint.check(&schema, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}

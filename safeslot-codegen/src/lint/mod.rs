//! Schema lints.
//!
//! Lints inspect a bound schema before generation and report problems the
//! generators themselves would silently carry into their output.

mod alias_collision;
mod diagnostic;
mod empty_slot_name;
mod missing_tree_root;
mod unresolved_range;

pub use alias_collision::AliasCollisionLint;
pub use diagnostic::{Diagnostic, Severity};
pub use empty_slot_name::EmptySlotNameLint;
pub use missing_tree_root::MissingTreeRootLint;
use safeslot_schema::SchemaDefinition;
pub use unresolved_range::UnresolvedRangeLint;

/// A lint that checks the schema for issues.
pub trait Lint {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the schema and add any diagnostics.
    fn check(&self, schema: &SchemaDefinition, diagnostics: &mut Vec<Diagnostic>);
}

/// Runs a set of lints over a schema.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(AliasCollisionLint),
                Box::new(EmptySlotNameLint),
                Box::new(UnresolvedRangeLint),
                Box::new(MissingTreeRootLint),
            ],
        }
    }

    /// Create a linter with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Names of the registered lints, in run order.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Run every lint and collect their diagnostics.
    pub fn run(&self, schema: &SchemaDefinition) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(schema, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use safeslot_schema::SchemaBuilder;

    use super::*;

    struct AlwaysWarn;

    impl Lint for AlwaysWarn {
        fn name(&self) -> &'static str {
            "always-warn"
        }

        fn check(&self, _schema: &SchemaDefinition, diagnostics: &mut Vec<Diagnostic>) {
            diagnostics.push(Diagnostic::warning(self.name(), "always"));
        }
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            Linter::new().lint_names(),
            [
                "alias-collision",
                "empty-slot-name",
                "unresolved-range",
                "missing-tree-root"
            ]
        );
    }

    #[test]
    fn test_custom_lint() {
        let schema = SchemaBuilder::new("s").build();
        let diagnostics = Linter::empty().with_lint(AlwaysWarn).run(&schema);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].lint, "always-warn");
    }

    #[test]
    fn test_clean_schema() {
        let schema = SchemaBuilder::new("s")
            .add_class("c", ["a"], true)
            .add_defaults()
            .build();
        assert!(Linter::new().run(&schema).is_empty());
    }
}

//! Schema model.
//!
//! ```text
//! schema.toml → parse (raw tables) → SchemaDefinition → bind aliases → generators
//! ```
//!
//! Classes and slots are kept in insertion order so generated output is
//! deterministic. Generators only ever read a schema; the alias binder is the
//! one place that writes to it after construction.

use indexmap::IndexMap;

/// Range used when neither the slot nor the schema names one.
pub const FALLBACK_RANGE: &str = "string";

/// A named collection of classes and slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaDefinition {
    /// Schema URI.
    pub id: Option<String>,
    /// Schema name.
    pub name: String,
    /// Human readable description.
    pub description: Option<String>,
    /// Prefix used for elements that don't carry their own.
    pub default_prefix: Option<String>,
    /// Range applied to slots without an explicit range.
    pub default_range: Option<String>,
    /// Prefix to URI expansions.
    pub prefixes: IndexMap<String, String>,
    /// Imported schemas (recorded, not resolved).
    pub imports: Vec<String>,
    /// Classes keyed by name.
    pub classes: IndexMap<String, ClassDefinition>,
    /// Slots keyed by their original name.
    pub slots: IndexMap<String, SlotDefinition>,
}

impl SchemaDefinition {
    /// Create an empty schema with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Look up a class by name.
    pub fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.get(name)
    }

    /// Look up a slot by its original name.
    pub fn slot(&self, name: &str) -> Option<&SlotDefinition> {
        self.slots.get(name)
    }

    /// The class marked as tree root, if any.
    ///
    /// When several classes carry the flag the first one wins; loading a
    /// schema file rejects that case.
    pub fn tree_root(&self) -> Option<&ClassDefinition> {
        self.classes.values().find(|c| c.tree_root)
    }

    /// Slots owned by a class, in declaration order.
    ///
    /// Slot names with no matching definition are skipped.
    pub fn class_slots<'a>(
        &'a self,
        class: &'a ClassDefinition,
    ) -> impl Iterator<Item = &'a SlotDefinition> + 'a {
        class.slots.iter().filter_map(|name| self.slots.get(name))
    }

    /// Name of the range that applies to a slot.
    pub fn range_name<'a>(&'a self, slot: &'a SlotDefinition) -> &'a str {
        slot.range
            .as_deref()
            .or(self.default_range.as_deref())
            .unwrap_or(FALLBACK_RANGE)
    }

    /// Resolve the range of a slot.
    ///
    /// Returns `None` when the range names neither a builtin type nor a class.
    pub fn slot_range(&self, slot: &SlotDefinition) -> Option<Range> {
        Range::resolve(self.range_name(slot), self)
    }
}

/// A class in the schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassDefinition {
    /// Class name. Must already be an identifier; class names are never aliased.
    pub name: String,
    /// Original names of the slots this class owns.
    pub slots: Vec<String>,
    /// Whether this class is the root of a data document.
    pub tree_root: bool,
    /// Human readable description.
    pub description: Option<String>,
}

impl ClassDefinition {
    /// Create a class with no slots.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A slot (field) in the schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotDefinition {
    /// Original, externally visible name. May be any string.
    pub name: String,
    /// Safe identifier used in place of `name` when set.
    pub alias: Option<String>,
    /// Builtin type or class name.
    pub range: Option<String>,
    /// Whether a value must be present.
    pub required: bool,
    /// Whether the slot holds a list of values.
    pub multivalued: bool,
    /// Human readable description.
    pub description: Option<String>,
}

impl SlotDefinition {
    /// Create a slot with the given original name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set an alias up front. The binder sanitizes it like a name.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the range.
    pub fn range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Mark the slot as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the slot as multivalued.
    pub fn multivalued(mut self) -> Self {
        self.multivalued = true;
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The name every generator keys this slot by: the alias if present,
    /// otherwise the original name.
    pub fn effective_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Returns true if the slot carries an alias different from its name.
    pub fn is_aliased(&self) -> bool {
        self.alias.as_deref().is_some_and(|alias| alias != self.name)
    }
}

/// Resolved slot range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Range {
    String,
    Integer,
    Float,
    Boolean,
    /// Reference to another class in the same schema.
    Class(String),
}

impl Range {
    /// Resolve a range name against the builtin types and the schema's classes.
    pub fn resolve(name: &str, schema: &SchemaDefinition) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "float" | "double" | "decimal" => Some(Self::Float),
            "boolean" => Some(Self::Boolean),
            other if schema.classes.contains_key(other) => Some(Self::Class(other.to_string())),
            _ => None,
        }
    }

    /// Whether the name is one of the builtin types.
    pub fn is_builtin(name: &str) -> bool {
        matches!(
            name,
            "string" | "integer" | "float" | "double" | "decimal" | "boolean"
        )
    }
}

//! Programmatic schema construction.

use crate::{ClassDefinition, SchemaDefinition, SlotDefinition};

/// Base URI for schemas that don't declare an id.
const DEFAULT_ID_BASE: &str = "https://example.org";

/// Builder for [`SchemaDefinition`].
///
/// # Example
///
/// ```
/// use safeslot_schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new("issue_349")
///     .add_class("c", ["a", "1S"], true)
///     .add_defaults()
///     .build();
///
/// assert_eq!(schema.slots.len(), 2);
/// assert_eq!(schema.default_range.as_deref(), Some("string"));
/// ```
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    schema: SchemaDefinition,
}

impl SchemaBuilder {
    /// Start a new schema with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: SchemaDefinition::new(name),
        }
    }

    /// Add a class owning the given slots.
    ///
    /// Slots that are not defined yet get a bare definition; existing slot
    /// definitions are shared, not replaced.
    pub fn add_class<I, S>(mut self, name: impl Into<String>, slots: I, tree_root: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let slots: Vec<String> = slots.into_iter().map(Into::into).collect();

        for slot in &slots {
            if !self.schema.slots.contains_key(slot) {
                self.schema
                    .slots
                    .insert(slot.clone(), SlotDefinition::new(slot.clone()));
            }
        }

        self.schema.classes.insert(
            name.clone(),
            ClassDefinition {
                name,
                slots,
                tree_root,
                description: None,
            },
        );
        self
    }

    /// Add or replace a slot definition.
    pub fn add_slot(mut self, slot: SlotDefinition) -> Self {
        self.schema.slots.insert(slot.name.clone(), slot);
        self
    }

    /// Set the description of an existing class. Unknown classes are ignored.
    pub fn describe_class(mut self, name: &str, description: impl Into<String>) -> Self {
        if let Some(class) = self.schema.classes.get_mut(name) {
            class.description = Some(description.into());
        }
        self
    }

    /// Set the schema id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.schema.id = Some(id.into());
        self
    }

    /// Set the schema description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.schema.description = Some(description.into());
        self
    }

    /// Populate schema-level defaults that were not set explicitly.
    ///
    /// Fills the id, default prefix, default range, the prefix map and the
    /// `linkml:types` import.
    pub fn add_defaults(mut self) -> Self {
        let schema = &mut self.schema;
        let name = schema.name.clone();

        let id = schema
            .id
            .get_or_insert_with(|| format!("{}/{}", DEFAULT_ID_BASE, name))
            .clone();
        let prefix = schema.default_prefix.get_or_insert(name).clone();
        schema
            .default_range
            .get_or_insert_with(|| crate::FALLBACK_RANGE.to_string());

        schema
            .prefixes
            .entry("linkml".to_string())
            .or_insert_with(|| "https://w3id.org/linkml/".to_string());
        schema
            .prefixes
            .entry(prefix)
            .or_insert_with(|| format!("{}/", id));

        if !schema.imports.iter().any(|i| i == "linkml:types") {
            schema.imports.push("linkml:types".to_string());
        }
        self
    }

    /// Finish building.
    pub fn build(self) -> SchemaDefinition {
        self.schema
    }
}

impl From<SchemaDefinition> for SchemaBuilder {
    fn from(schema: SchemaDefinition) -> Self {
        Self { schema }
    }
}

//! JSON Schema document generation.

use safeslot_core::camelcase;
use safeslot_schema::{ClassDefinition, Range, SchemaDefinition, SlotDefinition};
use serde_json::{Map, Value, json};

/// JSON Schema dialect of generated documents.
pub const DRAFT: &str = "https://json-schema.org/draft/2019-09/schema";

/// Name of a class under `$defs`.
pub fn definition_name(class_name: &str) -> String {
    camelcase(class_name)
}

/// Generates a JSON Schema document from a bound schema.
///
/// Each class becomes a closed object under `$defs`. The tree root class,
/// if any, is also inlined at the top level so documents can be validated
/// without naming a class.
#[derive(Debug, Clone, Copy)]
pub struct JsonSchemaGenerator<'a> {
    schema: &'a SchemaDefinition,
}

impl<'a> JsonSchemaGenerator<'a> {
    pub fn new(schema: &'a SchemaDefinition) -> Self {
        Self { schema }
    }

    /// Build the full document.
    pub fn generate(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("$schema".into(), json!(DRAFT));
        if let Some(id) = &self.schema.id {
            doc.insert("$id".into(), json!(id));
        }
        doc.insert("title".into(), json!(self.schema.name));
        if let Some(description) = &self.schema.description {
            doc.insert("description".into(), json!(description));
        }
        doc.insert("type".into(), json!("object"));

        let defs: Map<String, Value> = self
            .schema
            .classes
            .values()
            .map(|class| (definition_name(&class.name), self.class_schema(class)))
            .collect();
        doc.insert("$defs".into(), Value::Object(defs));

        match self.schema.tree_root() {
            Some(root) => {
                let (properties, required) = self.class_properties(root);
                doc.insert("properties".into(), Value::Object(properties));
                if !required.is_empty() {
                    doc.insert("required".into(), Value::Array(required));
                }
                doc.insert("additionalProperties".into(), json!(false));
            }
            None => {
                doc.insert("additionalProperties".into(), json!(true));
            }
        }

        Value::Object(doc)
    }

    /// Render the document as pretty-printed JSON.
    pub fn serialize(&self) -> String {
        // A Value holds no non-string map keys, so this cannot fail.
        serde_json::to_string_pretty(&self.generate()).unwrap_or_default()
    }

    /// Schema for a single class.
    pub fn class_schema(&self, class: &ClassDefinition) -> Value {
        let mut out = Map::new();
        out.insert("type".into(), json!("object"));
        out.insert("title".into(), json!(definition_name(&class.name)));
        if let Some(description) = &class.description {
            out.insert("description".into(), json!(description));
        }

        let (properties, required) = self.class_properties(class);
        out.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            out.insert("required".into(), Value::Array(required));
        }
        out.insert("additionalProperties".into(), json!(false));
        Value::Object(out)
    }

    fn class_properties(&self, class: &ClassDefinition) -> (Map<String, Value>, Vec<Value>) {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for slot in self.schema.class_slots(class) {
            let key = slot.effective_name();
            properties.insert(key.to_string(), self.slot_schema(slot));
            if slot.required {
                required.push(json!(key));
            }
        }

        (properties, required)
    }

    /// Schema for a slot value.
    ///
    /// Optional slots also accept `null`. Unresolvable ranges accept any value.
    fn slot_schema(&self, slot: &SlotDefinition) -> Value {
        let nullable = !slot.required;

        let mut out = match self.schema.slot_range(slot) {
            None => Map::new(),
            Some(range) if slot.multivalued => {
                let mut out = Map::new();
                out.insert("type".into(), type_keyword("array", nullable));
                out.insert("items".into(), range_schema(&range));
                out
            }
            Some(Range::Class(name)) => {
                let mut out = Map::new();
                if nullable {
                    out.insert(
                        "anyOf".into(),
                        json!([{ "$ref": class_ref(&name) }, { "type": "null" }]),
                    );
                } else {
                    out.insert("$ref".into(), json!(class_ref(&name)));
                }
                out
            }
            Some(range) => {
                let mut out = Map::new();
                out.insert(
                    "type".into(),
                    type_keyword(builtin_type_name(&range), nullable),
                );
                out
            }
        };

        if let Some(description) = &slot.description {
            out.insert("description".into(), json!(description));
        }
        Value::Object(out)
    }
}

/// Schema for one value of the given range.
fn range_schema(range: &Range) -> Value {
    match range {
        Range::Class(name) => json!({ "$ref": class_ref(name) }),
        other => json!({ "type": builtin_type_name(other) }),
    }
}

fn class_ref(class_name: &str) -> String {
    format!("#/$defs/{}", definition_name(class_name))
}

fn builtin_type_name(range: &Range) -> &'static str {
    match range {
        Range::String => "string",
        Range::Integer => "integer",
        Range::Float => "number",
        Range::Boolean => "boolean",
        Range::Class(_) => "object",
    }
}

fn type_keyword(name: &str, nullable: bool) -> Value {
    if nullable {
        json!([name, "null"])
    } else {
        json!(name)
    }
}

#[cfg(test)]
mod tests {
    use safeslot_schema::{SchemaBuilder, SlotDefinition, bind_safe_aliases};

    use super::*;

    fn bound(builder: SchemaBuilder) -> SchemaDefinition {
        let mut schema = builder.add_defaults().build();
        bind_safe_aliases(&mut schema);
        schema
    }

    #[test]
    fn test_properties_keyed_by_effective_name() {
        let schema = bound(SchemaBuilder::new("s").add_class("c", ["a", "1S", "a/b"], true));
        let doc = JsonSchemaGenerator::new(&schema).generate();

        let props = doc["$defs"]["C"]["properties"].as_object().unwrap();
        let keys: Vec<_> = props.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "x_1S", "a_b"]);

        let root_props = doc["properties"].as_object().unwrap();
        assert!(root_props.contains_key("x_1S"));
        assert!(!root_props.contains_key("1S"));
        assert_eq!(doc["additionalProperties"], json!(false));
    }

    #[test]
    fn test_required_uses_effective_name() {
        let schema = bound(
            SchemaBuilder::new("s")
                .add_slot(SlotDefinition::new("5'end").required())
                .add_class("c", ["5'end"], true),
        );
        let doc = JsonSchemaGenerator::new(&schema).generate();

        assert_eq!(doc["$defs"]["C"]["required"], json!(["x_5_end"]));
        assert_eq!(doc["required"], json!(["x_5_end"]));
        assert_eq!(
            doc["$defs"]["C"]["properties"]["x_5_end"],
            json!({ "type": "string" })
        );
    }

    #[test]
    fn test_ranges() {
        let schema = bound(
            SchemaBuilder::new("s")
                .add_slot(SlotDefinition::new("n").range("integer").required())
                .add_slot(SlotDefinition::new("f").range("float"))
                .add_slot(SlotDefinition::new("tags").multivalued())
                .add_slot(SlotDefinition::new("child").range("leaf"))
                .add_slot(SlotDefinition::new("odd").range("date"))
                .add_class("c", ["n", "f", "tags", "child", "odd"], true)
                .add_class("leaf", ["n"], false),
        );
        let doc = JsonSchemaGenerator::new(&schema).generate();
        let props = &doc["$defs"]["C"]["properties"];

        assert_eq!(props["n"], json!({ "type": "integer" }));
        assert_eq!(props["f"], json!({ "type": ["number", "null"] }));
        assert_eq!(
            props["tags"],
            json!({ "type": ["array", "null"], "items": { "type": "string" } })
        );
        assert_eq!(
            props["child"],
            json!({ "anyOf": [{ "$ref": "#/$defs/Leaf" }, { "type": "null" }] })
        );
        assert_eq!(props["odd"], json!({}));
    }

    #[test]
    fn test_no_tree_root() {
        let schema = bound(SchemaBuilder::new("s").add_class("c", ["a"], false));
        let doc = JsonSchemaGenerator::new(&schema).generate();

        assert!(doc.get("properties").is_none());
        assert_eq!(doc["additionalProperties"], json!(true));
        assert!(doc["$defs"].get("C").is_some());
    }

    #[test]
    fn test_descriptions() {
        let schema = bound(
            SchemaBuilder::new("s")
                .description("Test schema")
                .add_slot(SlotDefinition::new("a").required().description("The a slot"))
                .add_class("c", ["a"], true)
                .describe_class("c", "A class"),
        );
        let doc = JsonSchemaGenerator::new(&schema).generate();

        assert_eq!(doc["description"], json!("Test schema"));
        assert_eq!(doc["$defs"]["C"]["description"], json!("A class"));
        assert_eq!(
            doc["$defs"]["C"]["properties"]["a"],
            json!({ "type": "string", "description": "The a slot" })
        );
    }
}

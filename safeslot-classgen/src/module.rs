//! Class module generation.

use std::sync::{Arc, Weak};

use safeslot_codegen::builder::CodeBuilder;
use safeslot_core::{camelcase, rust_field_ident};
use safeslot_schema::{ClassDefinition, Range, SchemaDefinition, SlotDefinition};
use serde_json::{Map, Value};

use crate::{
    ClassDescriptor, ConstructionError, FieldDescriptor, FieldType, Instance,
    ast::{Field, Struct},
    descriptor::{ClassLink, ClassTable},
};

const DERIVES: [&str; 5] = [
    "Debug",
    "Clone",
    "PartialEq",
    "Serialize",
    "Deserialize",
];

/// Build the class module for a bound schema.
///
/// Field names are slot effective names, so the schema should have been
/// through [`bind_safe_aliases`](safeslot_schema::bind_safe_aliases) first.
pub fn build_module(schema: &SchemaDefinition) -> Module {
    let classes = Arc::new_cyclic(|table: &Weak<ClassTable>| {
        schema
            .classes
            .values()
            .map(|class| (class.name.clone(), describe_class(schema, class, table)))
            .collect()
    });

    Module {
        name: schema.name.clone(),
        description: schema.description.clone(),
        classes,
    }
}

fn describe_class(
    schema: &SchemaDefinition,
    class: &ClassDefinition,
    table: &Weak<ClassTable>,
) -> ClassDescriptor {
    ClassDescriptor {
        name: camelcase(&class.name),
        schema_name: class.name.clone(),
        description: class.description.clone(),
        fields: schema
            .class_slots(class)
            .map(|slot| describe_field(schema, slot, table))
            .collect(),
    }
}

fn describe_field(
    schema: &SchemaDefinition,
    slot: &SlotDefinition,
    table: &Weak<ClassTable>,
) -> FieldDescriptor {
    let ty = match schema.slot_range(slot) {
        Some(Range::String) => FieldType::String,
        Some(Range::Integer) => FieldType::Integer,
        Some(Range::Float) => FieldType::Float,
        Some(Range::Boolean) => FieldType::Boolean,
        Some(Range::Class(name)) => FieldType::Class(ClassLink::new(name, table.clone())),
        None => FieldType::Any,
    };

    FieldDescriptor {
        name: slot.effective_name().to_string(),
        original_name: slot.name.clone(),
        ty,
        required: slot.required,
        multivalued: slot.multivalued,
        description: slot.description.clone(),
    }
}

/// The generated classes of one schema.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    description: Option<String>,
    classes: Arc<ClassTable>,
}

impl Module {
    /// Schema name the module was generated from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.values()
    }

    /// Look up a class by schema name (`named_thing`) or type name (`NamedThing`).
    pub fn get_class(&self, name: &str) -> Result<&ClassDescriptor, ConstructionError> {
        self.classes
            .get(name)
            .or_else(|| self.classes.values().find(|c| c.name == name))
            .ok_or_else(|| ConstructionError::UnknownClass {
                class: name.to_string(),
            })
    }

    /// Construct an instance of the named class.
    pub fn construct(
        &self,
        class_name: &str,
        values: &Map<String, Value>,
    ) -> Result<Instance, ConstructionError> {
        self.get_class(class_name)?.construct(values)
    }

    /// Render the module as Rust source.
    pub fn to_source(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.push_line(&format!("//! Generated from schema `{}`.", self.name));
        if let Some(description) = &self.description {
            builder.push_line("//!");
            for line in description.lines() {
                builder.push_line(format!("//! {}", line).trim_end());
            }
        }
        builder
            .push_blank()
            .push_line("use serde::{Deserialize, Serialize};");

        for class in self.classes.values() {
            builder.push_blank().emit(&class_struct(class));
        }
        builder.build()
    }
}

fn class_struct(class: &ClassDescriptor) -> Struct {
    let mut item = DERIVES
        .iter()
        .fold(Struct::new(&class.name), |item, derive| item.derive(*derive))
        .attr("serde(deny_unknown_fields)");

    if let Some(description) = &class.description {
        item = item.doc(description);
    }
    if class.fields.iter().any(|f| f.name.chars().any(|c| c.is_ascii_uppercase())) {
        item = item.attr("allow(non_snake_case)");
    }

    class.fields.iter().fold(item, |item, field| item.field(struct_field(field)))
}

fn struct_field(field: &FieldDescriptor) -> Field {
    let ident = rust_field_ident(&field.name);
    let mut doc = Vec::new();
    if let Some(description) = &field.description {
        doc.push(description.clone());
    }
    if field.is_aliased() {
        doc.push(format!("Original name: `{}`", field.original_name));
    }

    let mut out = Field::new(&ident, field.rust_type());
    if !doc.is_empty() {
        out = out.doc(doc.join("\n\n"));
    }
    // Raw identifiers serialize without the `r#`; anything else renamed needs
    // the wire name spelled out.
    if ident != field.name && !ident.starts_with("r#") {
        out = out.attr(format!("serde(rename = \"{}\")", field.name));
    }
    out
}

#[cfg(test)]
mod tests {
    use safeslot_schema::{SchemaBuilder, bind_safe_aliases};

    use super::*;

    fn module(builder: SchemaBuilder) -> Module {
        let mut schema = builder.add_defaults().build();
        bind_safe_aliases(&mut schema);
        build_module(&schema)
    }

    #[test]
    fn test_fields_use_effective_names() {
        let m = module(SchemaBuilder::new("s").add_class("c", ["a", "1S", "a/b", "5'end"], true));
        let class = m.get_class("c").unwrap();

        assert_eq!(class.name, "C");
        let names: Vec<_> = class.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "x_1S", "a_b", "x_5_end"]);
        assert_eq!(class.field("x_1S").unwrap().original_name, "1S");
        assert!(!class.field("a").unwrap().is_aliased());
    }

    #[test]
    fn test_get_class_by_either_name() {
        let m = module(SchemaBuilder::new("s").add_class("named_thing", ["a"], true));

        assert_eq!(m.get_class("named_thing").unwrap().name, "NamedThing");
        assert_eq!(m.get_class("NamedThing").unwrap().schema_name, "named_thing");
        assert_eq!(
            m.get_class("other").unwrap_err(),
            ConstructionError::UnknownClass {
                class: "other".into()
            }
        );
    }

    #[test]
    fn test_field_types() {
        let m = module(
            SchemaBuilder::new("s")
                .add_slot(SlotDefinition::new("n").range("integer").required())
                .add_slot(SlotDefinition::new("leaves").range("leaf").multivalued())
                .add_slot(SlotDefinition::new("odd").range("date"))
                .add_class("tree", ["n", "leaves", "odd"], true)
                .add_class("leaf", ["n"], false),
        );
        let tree = m.get_class("tree").unwrap();

        assert_eq!(tree.field("n").unwrap().ty, FieldType::Integer);
        assert_eq!(tree.field("odd").unwrap().ty, FieldType::Any);
        match &tree.field("leaves").unwrap().ty {
            FieldType::Class(link) => assert_eq!(link.class_name(), "leaf"),
            other => panic!("unexpected type: {other:?}"),
        }
    }

    #[test]
    fn test_keyword_field_source() {
        let m = module(
            SchemaBuilder::new("s")
                .add_slot(SlotDefinition::new("type").required())
                .add_slot(SlotDefinition::new("self"))
                .add_class("c", ["type", "self"], true),
        );
        let source = m.to_source();

        assert!(source.contains("    pub r#type: String,\n"));
        assert!(source.contains("    #[serde(rename = \"self\")]\n    pub self_: Option<String>,\n"));
    }
}

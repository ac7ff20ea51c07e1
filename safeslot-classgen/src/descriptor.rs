//! Class and field descriptors.

use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use safeslot_core::camelcase;

use crate::{ConstructionError, Instance, construct::construct};

/// Descriptors of one module, keyed by schema class name.
pub(crate) type ClassTable = IndexMap<String, ClassDescriptor>;

/// Value type of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    /// Instance of another class in the same module.
    Class(ClassLink),
    /// Range that names neither a builtin type nor a class.
    Any,
}

impl FieldType {
    /// Rust type of a single value.
    pub fn rust_type(&self) -> String {
        match self {
            Self::String => "String".to_string(),
            Self::Integer => "i64".to_string(),
            Self::Float => "f64".to_string(),
            Self::Boolean => "bool".to_string(),
            Self::Class(link) => link.type_name(),
            Self::Any => "serde_json::Value".to_string(),
        }
    }

    /// Human readable name used in errors.
    pub fn describe(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Integer => "integer".to_string(),
            Self::Float => "number".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Class(link) => format!("{} object", link.type_name()),
            Self::Any => "any value".to_string(),
        }
    }
}

/// Reference from a field to the class it holds.
///
/// Points back into the module's class table without keeping it alive.
#[derive(Debug, Clone)]
pub struct ClassLink {
    class: String,
    table: Weak<ClassTable>,
}

impl ClassLink {
    pub(crate) fn new(class: impl Into<String>, table: Weak<ClassTable>) -> Self {
        Self {
            class: class.into(),
            table,
        }
    }

    /// Schema name of the linked class.
    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// Rust type name of the linked class.
    pub fn type_name(&self) -> String {
        camelcase(&self.class)
    }

    pub(crate) fn resolve(&self) -> Result<Arc<ClassTable>, ConstructionError> {
        self.table
            .upgrade()
            .ok_or_else(|| ConstructionError::UnknownClass {
                class: self.class.clone(),
            })
    }
}

impl PartialEq for ClassLink {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class
    }
}

/// A field of a generated class.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Effective name of the slot; the only accepted key.
    pub name: String,
    /// Original slot name.
    pub original_name: String,
    pub ty: FieldType,
    pub required: bool,
    pub multivalued: bool,
    pub description: Option<String>,
}

impl FieldDescriptor {
    /// Whether the field name differs from the original slot name.
    pub fn is_aliased(&self) -> bool {
        self.name != self.original_name
    }

    /// Full Rust type of the field, including `Option`/`Vec` wrapping.
    pub fn rust_type(&self) -> String {
        let inner = self.ty.rust_type();
        let ty = if self.multivalued {
            format!("Vec<{}>", inner)
        } else if matches!(self.ty, FieldType::Class(_)) {
            format!("Box<{}>", inner)
        } else {
            inner
        };

        if self.required {
            ty
        } else {
            format!("Option<{}>", ty)
        }
    }
}

/// A generated class: its type name and the fields its constructor accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDescriptor {
    /// Rust type name.
    pub name: String,
    /// Class name in the schema.
    pub schema_name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

impl ClassDescriptor {
    /// Look up a field by effective name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field whose original slot name is `name`, if it was aliased.
    pub(crate) fn aliased_field(&self, original_name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|f| f.is_aliased() && f.original_name == original_name)
    }

    /// Construct an instance from field values keyed by effective name.
    pub fn construct(
        &self,
        values: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<Instance, ConstructionError> {
        construct(self, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(ty: FieldType, required: bool, multivalued: bool) -> FieldDescriptor {
        FieldDescriptor {
            name: "f".into(),
            original_name: "f".into(),
            ty,
            required,
            multivalued,
            description: None,
        }
    }

    #[test]
    fn test_rust_types() {
        assert_eq!(field(FieldType::Integer, true, false).rust_type(), "i64");
        assert_eq!(
            field(FieldType::String, false, false).rust_type(),
            "Option<String>"
        );
        assert_eq!(
            field(FieldType::Float, false, true).rust_type(),
            "Option<Vec<f64>>"
        );
        assert_eq!(
            field(FieldType::Any, true, false).rust_type(),
            "serde_json::Value"
        );

        let link = ClassLink::new("named_thing", Weak::new());
        assert_eq!(
            field(FieldType::Class(link.clone()), false, false).rust_type(),
            "Option<Box<NamedThing>>"
        );
        assert_eq!(
            field(FieldType::Class(link), true, true).rust_type(),
            "Vec<NamedThing>"
        );
    }

    #[test]
    fn test_dangling_link() {
        let link = ClassLink::new("leaf", Weak::new());
        assert_eq!(
            link.resolve().unwrap_err(),
            ConstructionError::UnknownClass {
                class: "leaf".into()
            }
        );
    }
}

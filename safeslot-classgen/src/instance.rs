//! Constructed class instances.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A checked field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Explicit `null` for an optional field.
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Instance(Instance),
    List(Vec<FieldValue>),
    /// Unchecked value of a field with an unresolved range.
    Any(Value),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::String(s) => Value::String(s.clone()),
            Self::Integer(n) => Value::from(*n),
            Self::Float(f) => Value::from(*f),
            Self::Boolean(b) => Value::Bool(*b),
            Self::Instance(instance) => instance.to_json(),
            Self::List(items) => Value::Array(items.iter().map(FieldValue::to_json).collect()),
            Self::Any(value) => value.clone(),
        }
    }
}

/// An instance of a generated class.
///
/// Holds only the fields that were supplied, keyed by effective name.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    class_name: String,
    values: IndexMap<String, FieldValue>,
}

impl Instance {
    pub(crate) fn new(class_name: impl Into<String>, values: IndexMap<String, FieldValue>) -> Self {
        Self {
            class_name: class_name.into(),
            values,
        }
    }

    /// Rust type name of the instance's class.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Value of a field by effective name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// JSON object keyed by effective name.
    pub fn to_json(&self) -> Value {
        let object: Map<String, Value> = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        Value::Object(object)
    }
}

//! Checked instance construction.
//!
//! Every key is checked against the class's effective field names before any
//! value is accepted; an aliased slot's original name is an unknown field.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{
    ClassDescriptor, ConstructionError, FieldDescriptor, FieldType, FieldValue, Instance,
};

/// Construct an instance of `class` from values keyed by effective name.
///
/// Missing optional fields are left out of the instance; `null` is accepted
/// for optional fields and kept as [`FieldValue::Null`]. Values of class
/// typed fields are constructed recursively.
pub fn construct(
    class: &ClassDescriptor,
    values: &Map<String, Value>,
) -> Result<Instance, ConstructionError> {
    for key in values.keys() {
        if class.field(key).is_none() {
            return Err(ConstructionError::UnknownField {
                class: class.name.clone(),
                field: key.clone(),
                alias: class.aliased_field(key).map(|f| f.name.clone()),
            });
        }
    }

    let mut checked = IndexMap::new();
    for field in &class.fields {
        match values.get(&field.name) {
            None if field.required => {
                return Err(ConstructionError::MissingRequired {
                    class: class.name.clone(),
                    field: field.name.clone(),
                });
            }
            None => {}
            Some(Value::Null) if !field.required => {
                checked.insert(field.name.clone(), FieldValue::Null);
            }
            Some(value) => {
                let value = check_field(class, field, value)?;
                checked.insert(field.name.clone(), value);
            }
        }
    }

    Ok(Instance::new(class.name.clone(), checked))
}

fn check_field(
    class: &ClassDescriptor,
    field: &FieldDescriptor,
    value: &Value,
) -> Result<FieldValue, ConstructionError> {
    if !field.multivalued {
        return check_value(class, field, value);
    }

    let Value::Array(items) = value else {
        return Err(mismatch(
            class,
            field,
            format!("list of {}", field.ty.describe()),
            value,
        ));
    };
    items
        .iter()
        .map(|item| check_value(class, field, item))
        .collect::<Result<Vec<_>, _>>()
        .map(FieldValue::List)
}

fn check_value(
    class: &ClassDescriptor,
    field: &FieldDescriptor,
    value: &Value,
) -> Result<FieldValue, ConstructionError> {
    let checked = match (&field.ty, value) {
        (FieldType::String, Value::String(s)) => Some(FieldValue::String(s.clone())),
        (FieldType::Integer, Value::Number(n)) => as_integer(n).map(FieldValue::Integer),
        (FieldType::Float, Value::Number(n)) => n.as_f64().map(FieldValue::Float),
        (FieldType::Boolean, Value::Bool(b)) => Some(FieldValue::Boolean(*b)),
        (FieldType::Class(link), Value::Object(object)) => {
            let table = link.resolve()?;
            let nested = table
                .get(link.class_name())
                .ok_or_else(|| ConstructionError::UnknownClass {
                    class: link.class_name().to_string(),
                })?;
            Some(FieldValue::Instance(construct(nested, object)?))
        }
        (FieldType::Any, value) => Some(FieldValue::Any(value.clone())),
        _ => None,
    };

    checked.ok_or_else(|| mismatch(class, field, field.ty.describe(), value))
}

/// Integral JSON numbers that fit an `i64`, including floats like `7.0`.
fn as_integer(n: &serde_json::Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn mismatch(
    class: &ClassDescriptor,
    field: &FieldDescriptor,
    expected: String,
    value: &Value,
) -> ConstructionError {
    ConstructionError::TypeMismatch {
        class: class.name.clone(),
        field: field.name.clone(),
        expected,
        found: json_type(value),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if as_integer(n).is_some() => "integer",
        Value::Number(n) if n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0) => {
            "integer outside the i64 range"
        }
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

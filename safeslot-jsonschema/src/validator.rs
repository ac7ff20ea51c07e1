//! Instance validation against generated documents.
//!
//! Only the keywords the generator emits are understood: `type` (single or
//! list), `$ref` into the same document, `anyOf`, `properties`, `required`,
//! `additionalProperties` and `items`. Any other keyword is ignored.

use safeslot_schema::SchemaDefinition;
use serde_json::{Map, Number, Value};

use crate::{JsonSchemaGenerator, ValidationError, ValidationErrors, definition_name};

/// Validates JSON instances against a JSON Schema document.
#[derive(Debug, Clone)]
pub struct Validator {
    document: Value,
}

impl Validator {
    /// Generate the document for a bound schema and validate against it.
    pub fn new(schema: &SchemaDefinition) -> Self {
        Self::from_document(JsonSchemaGenerator::new(schema).generate())
    }

    /// Validate against an existing document.
    pub fn from_document(document: Value) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Every failure of `instance` against the top-level schema.
    pub fn iter_errors(&self, instance: &Value) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        self.check(&self.document, instance, "/", &[], &mut errors);
        errors
    }

    /// Validate against the top-level schema.
    pub fn validate(&self, instance: &Value) -> Result<(), ValidationErrors> {
        into_result(self.iter_errors(instance))
    }

    /// Validate against the definition of a single class.
    pub fn validate_as(&self, instance: &Value, class_name: &str) -> Result<(), ValidationErrors> {
        let Some(schema) = self
            .document
            .get("$defs")
            .and_then(|defs| defs.get(definition_name(class_name)))
        else {
            return Err(ValidationErrors::new(vec![ValidationError::UnknownClass {
                class: class_name.to_string(),
            }]));
        };

        let mut errors = Vec::new();
        self.check(schema, instance, "/", &[], &mut errors);
        into_result(errors)
    }

    /// `refs` holds the references already followed at this instance
    /// location; meeting one again means the document loops without
    /// consuming any of the instance.
    fn check<'a>(
        &'a self,
        schema: &'a Value,
        instance: &Value,
        path: &str,
        refs: &[&'a str],
        errors: &mut Vec<ValidationError>,
    ) {
        let Value::Object(schema) = schema else {
            return;
        };

        if let Some(Value::String(reference)) = schema.get("$ref") {
            if refs.contains(&reference.as_str()) {
                errors.push(ValidationError::CircularRef {
                    path: path.to_string(),
                    reference: reference.clone(),
                });
                return;
            }
            match self.resolve(reference) {
                Some(target) => {
                    let mut followed = refs.to_vec();
                    followed.push(reference);
                    self.check(target, instance, path, &followed, errors);
                }
                None => errors.push(ValidationError::UnresolvedRef {
                    path: path.to_string(),
                    reference: reference.clone(),
                }),
            }
        }

        if let Some(expected) = schema.get("type") {
            if !type_matches(expected, instance) {
                errors.push(ValidationError::Type {
                    path: path.to_string(),
                    expected: describe_type(expected),
                    found: json_type(instance),
                });
                return;
            }
        }

        if let Some(Value::Array(options)) = schema.get("anyOf") {
            let matched = options.iter().any(|option| {
                let mut scratch = Vec::new();
                self.check(option, instance, path, refs, &mut scratch);
                scratch.is_empty()
            });
            if !matched {
                errors.push(ValidationError::AnyOf {
                    path: path.to_string(),
                });
            }
        }

        match instance {
            Value::Object(object) => self.check_object(schema, object, path, errors),
            Value::Array(items) => {
                if let Some(item_schema) = schema.get("items") {
                    for (index, item) in items.iter().enumerate() {
                        let child = child_path(path, &index.to_string());
                        self.check(item_schema, item, &child, &[], errors);
                    }
                }
            }
            _ => {}
        }
    }

    fn check_object(
        &self,
        schema: &Map<String, Value>,
        object: &Map<String, Value>,
        path: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        let empty = Map::new();
        let properties = match schema.get("properties") {
            Some(Value::Object(properties)) => properties,
            _ => &empty,
        };

        if let Some(Value::Array(required)) = schema.get("required") {
            for property in required.iter().filter_map(Value::as_str) {
                if !object.contains_key(property) {
                    errors.push(ValidationError::Required {
                        path: path.to_string(),
                        property: property.to_string(),
                    });
                }
            }
        }

        for (key, value) in object {
            let child = child_path(path, key);
            if let Some(property_schema) = properties.get(key) {
                self.check(property_schema, value, &child, &[], errors);
                continue;
            }

            match schema.get("additionalProperties") {
                Some(Value::Bool(false)) => errors.push(ValidationError::AdditionalProperty {
                    path: path.to_string(),
                    property: key.clone(),
                }),
                Some(extra @ Value::Object(_)) => self.check(extra, value, &child, &[], errors),
                _ => {}
            }
        }
    }

    /// Resolve a same-document reference such as `#/$defs/Person`.
    fn resolve(&self, reference: &str) -> Option<&Value> {
        let pointer = reference.strip_prefix('#')?;
        if pointer.is_empty() {
            return Some(&self.document);
        }
        self.document.pointer(pointer)
    }
}

fn into_result(errors: Vec<ValidationError>) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::new(errors))
    }
}

/// JSON pointer of a child location, escaping `~` and `/` in the key.
fn child_path(parent: &str, key: &str) -> String {
    let key = key.replace('~', "~0").replace('/', "~1");
    if parent == "/" {
        format!("/{}", key)
    } else {
        format!("{}/{}", parent, key)
    }
}

fn type_matches(expected: &Value, instance: &Value) -> bool {
    match expected {
        Value::String(name) => is_type(name, instance),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .any(|name| is_type(name, instance)),
        _ => true,
    }
}

fn is_type(name: &str, instance: &Value) -> bool {
    match name {
        "null" => instance.is_null(),
        "boolean" => instance.is_boolean(),
        "object" => instance.is_object(),
        "array" => instance.is_array(),
        "string" => instance.is_string(),
        "number" => instance.is_number(),
        "integer" => is_integer(instance),
        _ => false,
    }
}

/// Integral numbers that fit an `i64`, the width of generated integer fields.
fn is_integer(instance: &Value) -> bool {
    match instance {
        Value::Number(n) => as_i64(n).is_some(),
        _ => false,
    }
}

fn as_i64(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn describe_type(expected: &Value) -> String {
    match expected {
        Value::String(name) => name.clone(),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(" or "),
        other => other.to_string(),
    }
}

fn json_type(instance: &Value) -> &'static str {
    match instance {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if as_i64(n).is_some() => "integer",
        Value::Number(n) if n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0) => {
            "integer outside the i64 range"
        }
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Validate operation - check an instance against both generators.

use std::path::Path;

use eyre::{Result, eyre};
use safeslot_classgen::build_module;
use safeslot_jsonschema::Validator;
use safeslot_schema::SchemaDefinition;
use serde_json::Value;

use crate::reports::ValidateReport;

/// Execute the validate operation.
///
/// The instance is validated against the JSON Schema definition of the
/// target class and, independently, used to construct that class. The
/// target is `class` when given, otherwise the schema's tree root.
pub fn validate(
    schema: &SchemaDefinition,
    instance: &Value,
    instance_path: &Path,
    class: Option<&str>,
) -> Result<ValidateReport> {
    let class = match class {
        Some(class) => class.to_string(),
        None => schema
            .tree_root()
            .map(|root| root.name.clone())
            .ok_or_else(|| {
                eyre!(
                    "schema '{}' has no tree root class; pass --class",
                    schema.name
                )
            })?,
    };

    let validation_errors = match Validator::new(schema).validate_as(instance, &class) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.into_iter().map(|e| e.to_string()).collect(),
    };

    let construction = match instance.as_object() {
        Some(values) => build_module(schema)
            .construct(&class, values)
            .map(|instance| instance.class_name().to_string())
            .map_err(|e| e.to_string()),
        None => Err("instance is not a JSON object".to_string()),
    };

    Ok(ValidateReport {
        instance_path: instance_path.to_path_buf(),
        class,
        validation_errors,
        construction,
    })
}

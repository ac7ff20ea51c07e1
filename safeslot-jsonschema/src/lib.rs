//! JSON Schema generation and validation for safeslot schemas.
//!
//! The generated document keys every property by the slot's effective name
//! (alias when present, original name otherwise), so raw data keyed the same
//! way validates, and data keyed by an aliased slot's original name does not.
//!
//! ```
//! use safeslot_jsonschema::Validator;
//! use safeslot_schema::{SchemaBuilder, bind_safe_aliases};
//! use serde_json::json;
//!
//! let mut schema = SchemaBuilder::new("s").add_class("c", ["1S"], true).add_defaults().build();
//! bind_safe_aliases(&mut schema);
//!
//! let validator = Validator::new(&schema);
//! assert!(validator.validate(&json!({"x_1S": "test"})).is_ok());
//! assert!(validator.validate(&json!({"1S": "test"})).is_err());
//! ```

mod error;
mod generator;
mod validator;

pub use error::{ValidationError, ValidationErrors};
pub use generator::{DRAFT, JsonSchemaGenerator, definition_name};
pub use validator::Validator;

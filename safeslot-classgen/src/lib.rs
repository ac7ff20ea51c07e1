//! Class generation for safeslot schemas.
//!
//! A bound schema becomes a [`Module`] of [`ClassDescriptor`]s. Descriptors
//! drive checked construction of [`Instance`]s from JSON-like field values
//! and render to Rust source. Field names are slot effective names; an
//! aliased slot's original name is rejected.
//!
//! ```
//! use safeslot_classgen::build_module;
//! use safeslot_schema::{SchemaBuilder, bind_safe_aliases};
//! use serde_json::json;
//!
//! let mut schema = SchemaBuilder::new("s").add_class("c", ["1S"], true).add_defaults().build();
//! bind_safe_aliases(&mut schema);
//!
//! let module = build_module(&schema);
//! let class = module.get_class("c").unwrap();
//!
//! let ok = json!({"x_1S": "test"});
//! let instance = class.construct(ok.as_object().unwrap()).unwrap();
//! assert_eq!(instance.get("x_1S").and_then(|v| v.as_str()), Some("test"));
//!
//! let original = json!({"1S": "test"});
//! assert!(class.construct(original.as_object().unwrap()).is_err());
//! ```

mod construct;
mod descriptor;
mod error;
mod instance;
mod module;

pub mod ast;

pub use construct::construct;
pub use descriptor::{ClassDescriptor, ClassLink, FieldDescriptor, FieldType};
pub use error::ConstructionError;
pub use instance::{FieldValue, Instance};
pub use module::{Module, build_module};

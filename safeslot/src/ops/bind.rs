//! Bind operation - alias binding with a user supplied prefix.

use eyre::{Result, bail};
use safeslot_core::is_safe_identifier;
use safeslot_schema::{SchemaDefinition, bind_safe_aliases_with_prefix};

/// Bind safe aliases to every slot of `schema`.
///
/// The prefix must itself be a safe identifier, otherwise digit-leading
/// slot names would still produce unsafe aliases.
pub fn bind(mut schema: SchemaDefinition, prefix: &str) -> Result<SchemaDefinition> {
    if !is_safe_identifier(prefix) {
        bail!("prefix '{}' is not a safe identifier", prefix);
    }
    bind_safe_aliases_with_prefix(&mut schema, prefix);
    Ok(schema)
}

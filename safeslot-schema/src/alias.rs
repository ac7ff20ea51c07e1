//! Slot alias binding.
//!
//! Binding runs once, after a schema is built and before any generator sees
//! it. Afterwards every consumer keys a slot by
//! [`SlotDefinition::effective_name`](crate::SlotDefinition::effective_name),
//! and the `alias` field is the only mapping back to the original name.

use indexmap::IndexMap;
use safeslot_core::{DEFAULT_PREFIX, sanitize_with_prefix};

use crate::SchemaDefinition;

/// Give every slot whose name is not a safe identifier a safe alias.
///
/// Uses [`DEFAULT_PREFIX`] for digit-leading names. See
/// [`bind_safe_aliases_with_prefix`].
pub fn bind_safe_aliases(schema: &mut SchemaDefinition) {
    bind_safe_aliases_with_prefix(schema, DEFAULT_PREFIX);
}

/// Give every slot whose name is not a safe identifier a safe alias.
///
/// The sanitized form of the current alias (or the name, when there is no
/// alias) is recorded as the alias whenever it differs from the slot name.
/// Class names are left alone. Running this twice has the same effect as
/// running it once.
///
/// Two slots may end up with the same alias; use [`find_alias_collisions`]
/// to detect that.
pub fn bind_safe_aliases_with_prefix(schema: &mut SchemaDefinition, prefix: &str) {
    for slot in schema.slots.values_mut() {
        let source = slot.alias.as_deref().unwrap_or(&slot.name);
        let safe_name = sanitize_with_prefix(source, prefix);
        if safe_name != slot.name {
            slot.alias = Some(safe_name);
        }
    }
}

/// Two or more slots of one class sharing an effective name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCollision {
    /// Class owning the slots.
    pub class: String,
    /// The shared effective name.
    pub effective_name: String,
    /// Original names of the colliding slots, in declaration order.
    pub slots: Vec<String>,
}

/// Find classes in which distinct slots resolve to the same effective name.
///
/// Collisions are scoped per class: two classes may each own a slot with the
/// same effective name.
pub fn find_alias_collisions(schema: &SchemaDefinition) -> Vec<AliasCollision> {
    let mut collisions = Vec::new();

    for class in schema.classes.values() {
        let mut by_name: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for slot in schema.class_slots(class) {
            let owners = by_name.entry(slot.effective_name()).or_default();
            if !owners.contains(&slot.name.as_str()) {
                owners.push(&slot.name);
            }
        }

        collisions.extend(
            by_name
                .into_iter()
                .filter(|(_, slots)| slots.len() > 1)
                .map(|(name, slots)| AliasCollision {
                    class: class.name.clone(),
                    effective_name: name.to_string(),
                    slots: slots.into_iter().map(String::from).collect(),
                }),
        );
    }

    collisions
}

//! Recursive merge of configuration tables.

use serde_json::Value;

use crate::provider::ConfigTable;

/// Merges `overlay` over `base`, returning the combined table.
///
/// Keys present in both sides take the overlay's value, except when both
/// values are tables, which merge recursively. Neither input is modified.
#[must_use]
pub fn deep_merge(base: &ConfigTable, overlay: &ConfigTable) -> ConfigTable {
    let mut merged = base.clone();
    for (key, value) in overlay {
        match (merged.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                let combined = deep_merge(existing, incoming);
                *existing = combined;
            }
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

//! Mixin merge rules.
//!
//! Sequence meets sequence: union, existing order first, then mixin elements not already
//! present in the existing sequence. Anything else: the mixin value replaces the document
//! value.

use serde_yaml::{Mapping, Value};

use crate::mixin::Mixin;

/// Merge every top-level mixin key into `doc`, in mixin order.
pub fn merge_mixin(doc: &mut Mapping, mixin: &Mixin) {
    for (key, value) in mixin.entries() {
        match (doc.get_mut(key), value) {
            (Some(Value::Sequence(existing)), Value::Sequence(incoming)) => {
                union_into(existing, incoming);
            }
            _ => {
                doc.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Append each `incoming` element that the original `existing` list does not contain.
///
/// Membership is checked against the list as it was before this call, so duplicates
/// within `incoming` itself are all appended.
fn union_into(existing: &mut Vec<Value>, incoming: &[Value]) {
    let before = existing.len();
    for item in incoming {
        if !existing[..before].contains(item) {
            existing.push(item.clone());
        }
    }
}

//! Interpretation of the upstream breach payload.
//!
//! The XposedOrNot response shape is loosely specified and has changed over
//! time: the breach list has appeared under several key spellings, as a flat
//! array of strings, as a nested array of arrays, and as objects carrying
//! the source name under varying fields. Everything here is defensive
//! probing over `serde_json::Value` rather than a fixed `Deserialize` shape.

use serde_json::Value;

use super::model::BreachRecord;

/// Key spellings under which the breach list has been observed.
const BREACH_LIST_KEYS: &[&str] = &[
    "breaches",
    "Breaches",
    "BREACHES",
    "breaches_details",
    "BreachesDetails",
    "ExposedBreaches",
    "exposed_breaches",
    "data",
    "Data",
    "results",
    "Results",
];

/// Fields an object entry may carry its source name under.
const NAME_KEYS: &[&str] = &["breach", "name", "domain", "site", "Name", "Breach", "title"];

/// Extract the ordered breach sources from an upstream payload.
///
/// Returns an empty vector when the payload carries no breach entries,
/// which callers interpret as a clean result.
pub(crate) fn extract_sources(payload: &Value) -> Vec<BreachRecord> {
    find_breach_list(payload).map_or_else(Vec::new, flatten)
}

/// Locate the value holding the breach list.
fn find_breach_list(payload: &Value) -> Option<&Value> {
    // The payload itself may be the list
    if payload.is_array() {
        return Some(payload);
    }

    let object = payload.as_object()?;

    for key in BREACH_LIST_KEYS {
        if let Some(value) = object.get(*key) {
            // "ExposedBreaches" sometimes wraps the real list one level down
            if let Some(inner) = value.as_object() {
                for inner_key in ["breaches_details", "breaches", "Breaches"] {
                    if let Some(list) = inner.get(inner_key) {
                        return Some(list);
                    }
                }
            }
            return Some(value);
        }
    }

    // Last resort: the first array-valued field
    object.values().find(|v| v.is_array())
}

/// Recursively flatten a breach list into source names, preserving order.
fn flatten(value: &Value) -> Vec<BreachRecord> {
    let mut sources = Vec::new();
    collect(value, &mut sources);
    sources
}

fn collect(value: &Value, sources: &mut Vec<BreachRecord>) {
    match value {
        Value::String(s) => sources.push(BreachRecord::new(s.clone())),
        Value::Array(items) => {
            for item in items {
                collect(item, sources);
            }
        }
        Value::Object(entry) => {
            let name = NAME_KEYS
                .iter()
                .find_map(|key| entry.get(*key).and_then(Value::as_str));
            match name {
                Some(name) => sources.push(BreachRecord::new(name)),
                None => sources.push(BreachRecord::new(value.to_string())),
            }
        }
        Value::Number(n) => sources.push(BreachRecord::new(n.to_string())),
        Value::Bool(b) => sources.push(BreachRecord::new(b.to_string())),
        Value::Null => {}
    }
}

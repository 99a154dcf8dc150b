// Trim pipeline: compacts untrimmed mappings into their minimal wire form

use serde_json::{Map, Value};

/// `true` for values that carry no information on the wire: `null`, `[]`, `{}`.
///
/// `false`, `0` and `""` are real values and are kept.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Recursively removes empty entries from every mapping in `value`.
///
/// Children are trimmed before their parent is inspected, so a key whose
/// nested mapping trims down to `{}` is dropped as well. Array elements are
/// trimmed but never removed; their position is meaningful.
pub fn trim(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(trim_map(map)),
        Value::Array(items) => Value::Array(items.iter().map(trim).collect()),
        other => other.clone(),
    }
}

pub fn trim_map(map: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        let trimmed = trim(value);
        if !is_empty_value(&trimmed) {
            out.insert(key.clone(), trimmed);
        }
    }
    out
}

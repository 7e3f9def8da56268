//! Slash-delimited path access into nested JSON mappings.
//!
//! Paths look like "ParamData/Eyes/Right". Lookups never fail loudly: any
//! missing or non-mapping intermediate yields `None`. Writes create the
//! intermediate mappings they need.

use serde_json::{Map, Number, Value};

/// Path separator
pub const SEPARATOR: char = '/';

/// Get the value at `path`, or `None` if any segment is missing
pub fn get_path<'a>(root: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split(SEPARATOR);
    let mut current = root.get(segments.next()?)?;

    for part in segments {
        current = current.as_object()?.get(part)?;
    }

    Some(current)
}

/// Get the number at `path`, or `None` if absent, null or not numeric
pub fn get_number<'a>(root: &'a Map<String, Value>, path: &str) -> Option<&'a Number> {
    match get_path(root, path)? {
        Value::Number(n) => Some(n),
        _ => None,
    }
}

/// Set `value` at `path`, creating intermediate mappings as needed.
///
/// An intermediate that exists but is not a mapping is replaced by an empty
/// one.
pub fn set_path(root: &mut Map<String, Value>, path: &str, value: Value) {
    let mut segments = path.split(SEPARATOR);
    let Some(leaf) = segments.next_back() else {
        return;
    };

    let mut current = root;
    for part in segments {
        let slot = current.entry(part).or_insert(Value::Null);
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        let Value::Object(map) = slot else {
            return;
        };
        current = map;
    }

    current.insert(leaf.to_string(), value);
}

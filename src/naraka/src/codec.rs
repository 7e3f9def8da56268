//! Conversion between flat face-data arrays and nested face data.
//!
//! Both directions are driven by [`SCHEMA`](crate::schema::SCHEMA): each
//! entry names the array slot and the nested path of one field. Missing
//! slots and missing paths read as 0.

use serde_json::{Number, Value};

use crate::record::{FaceData, ParsedRecord, RawRecord};
use crate::schema::SCHEMA;

/// Expand a flat face-data array into nested face data
pub fn array_to_face(values: &[Number]) -> FaceData {
    let mut face = FaceData::new();

    for entry in SCHEMA {
        let value = values.get(entry.index).cloned().unwrap_or_else(zero);
        face.set(entry.path, Value::Number(value));
    }

    face
}

/// Flatten nested face data into an array of schema length
pub fn face_to_array(face: &FaceData) -> Vec<Number> {
    let mut values = vec![zero(); SCHEMA.len()];

    for entry in SCHEMA {
        values[entry.index] = match face.get(entry.path) {
            Some(Value::Number(n)) => n.clone(),
            None | Some(Value::Null) => zero(),
            Some(other) => {
                tracing::warn!(path = entry.path, value = %other, "non-numeric face value, using 0");
                zero()
            }
        };
    }

    values
}

/// Decode a raw record into a parsed record
pub fn decode_raw_to_parsed(raw: &RawRecord) -> ParsedRecord {
    ParsedRecord {
        face_data: array_to_face(&raw.face_data),
        hair_data: raw.hair_data.clone(),
    }
}

/// Encode a parsed record into a raw record
pub fn encode_parsed_to_raw(parsed: &ParsedRecord) -> RawRecord {
    RawRecord {
        face_data: face_to_array(&parsed.face_data),
        hair_data: parsed.hair_data.clone(),
    }
}

impl RawRecord {
    pub fn to_parsed(&self) -> ParsedRecord {
        decode_raw_to_parsed(self)
    }
}

impl ParsedRecord {
    pub fn to_raw(&self) -> RawRecord {
        encode_parsed_to_raw(self)
    }
}

fn zero() -> Number {
    Number::from(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use serde_json::json;

    fn sample_array() -> Vec<Number> {
        (0..schema::len())
            .map(|i| match i {
                0 => Number::from(1001),
                1 => Number::from(3),
                i if i % 7 == 0 => Number::from_f64(i as f64 + 0.25).unwrap(),
                i => Number::from(i as u64 % 101),
            })
            .collect()
    }

    #[test]
    fn test_array_to_face_places_values() {
        let values = sample_array();
        let face = array_to_face(&values);

        for entry in SCHEMA {
            assert_eq!(face.number(entry.path), Some(&values[entry.index]), "{}", entry.path);
        }
        assert_eq!(face.get("HeroID"), Some(&json!(1001)));
    }

    #[test]
    fn test_array_to_face_short_array_defaults_to_zero() {
        let face = array_to_face(&[Number::from(1001)]);
        assert_eq!(face.get("HeroID"), Some(&json!(1001)));
        assert_eq!(face.get("ParamData/Eyes/Right"), Some(&json!(0)));
    }

    #[test]
    fn test_array_to_face_keeps_schema_order() {
        let face = array_to_face(&sample_array());
        let keys: Vec<&String> = face.as_map().keys().collect();
        assert_eq!(keys, ["HeroID", "Version", "ParamData"]);
    }

    #[test]
    fn test_array_roundtrip() {
        let values = sample_array();
        assert_eq!(face_to_array(&array_to_face(&values)), values);
    }

    #[test]
    fn test_face_roundtrip() {
        let face = array_to_face(&sample_array());
        assert_eq!(array_to_face(&face_to_array(&face)), face);
    }

    #[test]
    fn test_face_to_array_missing_paths() {
        let mut face = FaceData::new();
        face.set("ParamData/Eyes/Right", 77);
        face.set("ParamData/Nose", Value::Null);
        face.set("ParamData/Mouth", 12);

        let values = face_to_array(&face);
        assert_eq!(values.len(), schema::len());

        let right = schema::entry_by_path("ParamData/Eyes/Right").unwrap();
        assert_eq!(values[right.index], Number::from(77));

        let zeroed: Vec<&Number> = values
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != right.index)
            .map(|(_, n)| n)
            .collect();
        assert!(zeroed.iter().all(|n| n.as_u64() == Some(0)));
    }

    #[test]
    fn test_face_to_array_non_numeric_leaf() {
        let mut face = FaceData::new();
        face.set("ParamData/Eyes/Left", "wide");
        let left = schema::entry_by_path("ParamData/Eyes/Left").unwrap();
        assert_eq!(face_to_array(&face)[left.index], Number::from(0));
    }

    #[test]
    fn test_face_to_array_ignores_unknown_paths() {
        let mut face = array_to_face(&sample_array());
        face.set("ParamData/Horns/Length", 99);
        assert_eq!(face_to_array(&face), sample_array());
    }

    #[test]
    fn test_record_conversion_keeps_hair() {
        let raw = RawRecord {
            face_data: sample_array(),
            hair_data: serde_json::from_value(json!({"HeroID": 1001, "HairID": 17})).unwrap(),
        };
        let parsed = raw.to_parsed();
        assert_eq!(parsed.hair_data, raw.hair_data);
        assert_eq!(parsed.to_raw(), raw);
    }
}

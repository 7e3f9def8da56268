//! Face/hair record types.
//!
//! A share code carries two halves: the face data, exchanged as a flat
//! numeric array ([`RawRecord`]) and edited as a nested mapping
//! ([`ParsedRecord`]), and the hair data, which is carried through as-is.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::path;

/// Hair parameters, kept exactly as the token carried them.
///
/// Key order, number formatting and unknown keys all survive a decode and
/// re-encode. The well-known keys have typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HairData(Map<String, Value>);

impl HairData {
    pub const HERO_ID: &'static str = "HeroID";
    pub const HAIR_ID: &'static str = "HairID";
    pub const VERSION: &'static str = "Version";
    pub const BASE_LEVEL_ID: &'static str = "BaseLevelID";
    pub const PARAM_DATA: &'static str = "ParamData";

    pub fn new() -> Self {
        HairData(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a top-level key. Existing keys keep their position.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    fn number(&self, key: &str) -> Option<&Number> {
        match self.0.get(key)? {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn hero_id(&self) -> Option<&Number> {
        self.number(Self::HERO_ID)
    }

    pub fn hair_id(&self) -> Option<&Number> {
        self.number(Self::HAIR_ID)
    }

    pub fn version(&self) -> Option<&Number> {
        self.number(Self::VERSION)
    }

    pub fn base_level_id(&self) -> Option<&Number> {
        self.number(Self::BASE_LEVEL_ID)
    }

    /// Per-part parameters: part name -> parameter name -> values
    pub fn param_data(&self) -> Option<&Map<String, Value>> {
        self.0.get(Self::PARAM_DATA)?.as_object()
    }

    /// Values of one parameter of one hair part
    pub fn param(&self, part: &str, name: &str) -> Option<&[Value]> {
        self.param_data()?
            .get(part)?
            .as_object()?
            .get(name)?
            .as_array()
            .map(Vec::as_slice)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for HairData {
    fn from(map: Map<String, Value>) -> Self {
        HairData(map)
    }
}

/// Face data as a flat array plus hair data. This is what a token holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(deserialize_with = "nulls_as_zero")]
    pub face_data: Vec<Number>,
    pub hair_data: HairData,
}

/// Null array slots read as 0
fn nulls_as_zero<'de, D>(deserializer: D) -> Result<Vec<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    let slots = Vec::<Option<Number>>::deserialize(deserializer)?;
    Ok(slots
        .into_iter()
        .map(|slot| slot.unwrap_or_else(|| Number::from(0)))
        .collect())
}

/// Face data as a nested mapping plus hair data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecord {
    #[serde(default)]
    pub face_data: FaceData,
    pub hair_data: HairData,
}

/// Nested face data addressed by slash-delimited paths
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceData(Map<String, Value>);

impl FaceData {
    pub fn new() -> Self {
        FaceData(Map::new())
    }

    /// Query the value at a path (e.g. "ParamData/Eyes/Right")
    pub fn get(&self, path: &str) -> Option<&Value> {
        path::get_path(&self.0, path)
    }

    /// Query the number at a path
    pub fn number(&self, path: &str) -> Option<&Number> {
        path::get_number(&self.0, path)
    }

    /// Set a value at a path, creating intermediate mappings
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        path::set_path(&mut self.0, path, value.into());
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for FaceData {
    fn from(map: Map<String, Value>) -> Self {
        FaceData(map)
    }
}

/// Numeric value of a face field, for range comparisons
pub(crate) fn numeric(n: &Number) -> f64 {
    n.as_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hair_json() -> Value {
        json!({
            "HeroID": 1001,
            "HairID": 2040,
            "Version": 3,
            "BaseLevelID": 7,
            "ParamData": {
                "Bangs": { "Length": [0.5, 1], "Curl": [12] },
                "Back": { "Length": [80] }
            }
        })
    }

    fn reencode(text: &str) -> String {
        let raw: RawRecord = serde_json::from_str(text).unwrap();
        serde_json::to_string(&raw).unwrap()
    }

    #[test]
    fn test_hair_data_accessors() {
        let hair: HairData = serde_json::from_value(hair_json()).unwrap();
        assert_eq!(hair.hero_id(), Some(&Number::from(1001)));
        assert_eq!(hair.hair_id(), Some(&Number::from(2040)));
        assert_eq!(hair.version(), Some(&Number::from(3)));
        assert_eq!(hair.base_level_id(), Some(&Number::from(7)));
        assert_eq!(hair.param("Bangs", "Curl"), Some(&[json!(12)][..]));
        assert_eq!(hair.param_data().map(Map::len), Some(2));
        assert!(hair.param("Bangs", "Missing").is_none());
    }

    #[test]
    fn test_hair_data_preserves_order_and_numbers() {
        let text = r#"{"faceData":[1,2],"hairData":{"HeroID":1001,"HairID":2040,"Version":3,"BaseLevelID":7,"ParamData":{"Bangs":{"Length":[0.5,1],"Curl":[12]},"Back":{"Length":[80]}}}}"#;
        assert_eq!(reencode(text), text);
    }

    #[test]
    fn test_hair_data_reordered_keys_roundtrip() {
        let text = r#"{"faceData":[1],"hairData":{"HairID":5,"ParamData":{},"HeroID":1001,"BaseLevelID":2,"Version":1}}"#;
        assert_eq!(reencode(text), text);
    }

    #[test]
    fn test_hair_data_partial_keys_roundtrip() {
        let text = r#"{"faceData":[1],"hairData":{"HeroID":1001,"ParamData":{}}}"#;
        assert_eq!(reencode(text), text);

        let raw: RawRecord = serde_json::from_str(text).unwrap();
        assert!(raw.hair_data.hair_id().is_none());
        assert!(raw.hair_data.version().is_none());
    }

    #[test]
    fn test_hair_data_float_ids() {
        let text = r#"{"faceData":[1],"hairData":{"HeroID":1001.0,"HairID":2040}}"#;
        assert_eq!(reencode(text), text);

        let raw: RawRecord = serde_json::from_str(text).unwrap();
        assert_eq!(raw.hair_data.hero_id().and_then(Number::as_f64), Some(1001.0));
    }

    #[test]
    fn test_hair_data_carries_unknown_keys() {
        let mut value = hair_json();
        value["DyeID"] = json!(5);
        let hair: HairData = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(hair.get("DyeID"), Some(&json!(5)));
        assert_eq!(serde_json::to_value(&hair).unwrap(), value);
    }

    #[test]
    fn test_hair_data_set_keeps_position() {
        let mut hair: HairData = serde_json::from_value(hair_json()).unwrap();
        hair.set(HairData::HERO_ID, 1002);
        let keys: Vec<&String> = hair.as_map().keys().collect();
        assert_eq!(keys, ["HeroID", "HairID", "Version", "BaseLevelID", "ParamData"]);
        assert_eq!(hair.hero_id(), Some(&Number::from(1002)));
    }

    #[test]
    fn test_raw_record_wire_shape() {
        let mut hair_data = HairData::new();
        hair_data.set(HairData::HERO_ID, 1001);
        let raw = RawRecord {
            face_data: vec![1001.into(), 3.into(), 50.into()],
            hair_data,
        };
        let value = serde_json::to_value(&raw).unwrap();
        assert_eq!(value["faceData"], json!([1001, 3, 50]));
        assert_eq!(value["hairData"], json!({"HeroID": 1001}));
    }

    #[test]
    fn test_null_face_slots_read_as_zero() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"faceData":[1001,null,5],"hairData":{"HeroID":1001}}"#)
                .unwrap();
        assert_eq!(raw.face_data, vec![Number::from(1001), Number::from(0), Number::from(5)]);
    }

    #[test]
    fn test_non_numeric_face_slot_rejected() {
        let result =
            serde_json::from_str::<RawRecord>(r#"{"faceData":[1001,"x"],"hairData":{}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_face_data_accessors() {
        let mut face = FaceData::new();
        assert!(face.is_empty());
        face.set("ParamData/Eyes/Right", 42);
        assert_eq!(face.number("ParamData/Eyes/Right").and_then(Number::as_u64), Some(42));
        assert_eq!(face.get("ParamData/Eyes"), Some(&json!({"Right": 42})));
        assert!(face.get("ParamData/Eyes/Left").is_none());
    }

    #[test]
    fn test_parsed_record_without_face_data() {
        let parsed: ParsedRecord =
            serde_json::from_value(json!({ "hairData": hair_json() })).unwrap();
        assert!(parsed.face_data.is_empty());
        assert_eq!(parsed.hair_data.hair_id(), Some(&Number::from(2040)));
    }
}

//! Record input resolution shared by the handlers

use anyhow::{Context, Result};
use naraka::{ParsedRecord, RawRecord};
use serde_json::Value;
use std::path::Path;

use crate::file_io::read_text;
use crate::remote;

/// Read `input` as text: `-` is stdin, an existing file is read, anything
/// else is taken literally
pub fn read_source(input: &str) -> Result<String> {
    if input == "-" {
        return read_text(None);
    }

    let path = Path::new(input);
    if path.is_file() {
        return read_text(Some(path));
    }

    Ok(input.to_string())
}

/// Parse a JSON record, accepting both parsed and raw shapes
pub fn parse_record_json(text: &str) -> Result<ParsedRecord> {
    let value: Value = serde_json::from_str(text).context("Failed to parse JSON record")?;

    if value.get("faceData").is_some_and(Value::is_array) {
        let raw: RawRecord =
            serde_json::from_value(value).context("Failed to parse raw JSON record")?;
        return Ok(raw.to_parsed());
    }

    serde_json::from_value(value).context("Failed to parse JSON record")
}

/// Load a record from a share code, share URL, JSON document, or a file
/// holding any of those
pub fn load_record(input: &str, proxy: Option<&str>) -> Result<ParsedRecord> {
    let text = read_source(input)?;
    let text = text.trim();

    if text.starts_with('{') {
        return parse_record_json(text);
    }

    let code = remote::resolve_token(text, proxy)?;
    naraka::decode_code_to_parsed(&code).context("Failed to decode share code")
}

#[cfg(test)]
mod tests {
    use super::*;
    use naraka::schema;
    use serde_json::{json, Number};

    fn sample_raw() -> RawRecord {
        RawRecord {
            face_data: (0..schema::len()).map(|i| Number::from(i as u64 % 101)).collect(),
            ..RawRecord::default()
        }
    }

    #[test]
    fn test_literal_passthrough() {
        assert_eq!(read_source("NARAKA-FACEHAIR-abc").unwrap(), "NARAKA-FACEHAIR-abc");
    }

    #[test]
    fn test_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("code.txt");
        std::fs::write(&path, "NARAKA-FACEHAIR-abc\n").unwrap();
        assert_eq!(read_source(path.to_str().unwrap()).unwrap(), "NARAKA-FACEHAIR-abc\n");
    }

    #[test]
    fn test_parse_raw_and_parsed_json() {
        let raw = sample_raw();
        let from_raw = parse_record_json(&serde_json::to_string(&raw).unwrap()).unwrap();
        let from_parsed =
            parse_record_json(&serde_json::to_string(&raw.to_parsed()).unwrap()).unwrap();

        assert_eq!(from_raw, raw.to_parsed());
        assert_eq!(from_parsed, from_raw);
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        assert!(parse_record_json("{").is_err());
        assert!(parse_record_json(&json!({"faceData": 3}).to_string()).is_err());
    }

    #[test]
    fn test_load_record_from_code() {
        let raw = sample_raw();
        let code = naraka::encode_raw_to_code(&raw).unwrap();
        assert_eq!(load_record(&code, None).unwrap(), raw.to_parsed());
    }

    #[test]
    fn test_load_record_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.json");
        let parsed = sample_raw().to_parsed();
        std::fs::write(&path, serde_json::to_string_pretty(&parsed).unwrap()).unwrap();

        assert_eq!(load_record(path.to_str().unwrap(), None).unwrap(), parsed);
    }
}

//! Share code decode/encode command handlers

use anyhow::{Context, Result};
use naraka::RawRecord;
use std::path::Path;

use super::input::{parse_record_json, read_source};
use crate::config::Config;
use crate::file_io::{read_bytes, read_text, write_bytes, write_text};
use crate::remote;

/// Render a share code as pretty JSON, parsed or raw
pub fn decode_to_json(code: &str, raw: bool) -> Result<String> {
    let record = naraka::decode_code_to_raw(code).context("Failed to decode share code")?;

    let json = if raw {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string_pretty(&record.to_parsed())?
    };

    Ok(json)
}

/// Encode a JSON record as a share code
pub fn encode_from_json(text: &str, raw: bool) -> Result<String> {
    let record: RawRecord = if raw {
        serde_json::from_str(text).context("Failed to parse raw JSON record")?
    } else {
        parse_record_json(text)?.to_raw()
    };

    naraka::encode_raw_to_code(&record).context("Failed to encode share code")
}

fn scan_qr_image(input: &str) -> Result<String> {
    let path = (input != "-").then(|| Path::new(input));
    let bytes = read_bytes(path)?;

    naraka::scan_qr_bytes(&bytes)
        .context("Failed to read QR image")?
        .context("No QR code found in image")
}

/// Handle the decode command
pub fn decode(input: &str, qr: bool, raw: bool, output: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let text = if qr {
        scan_qr_image(input)?
    } else {
        read_source(input)?
    };

    let code = remote::resolve_token(text.trim(), config.get_proxy())?;

    let json = decode_to_json(&code, raw)?;
    write_text(output, &json)
}

/// Handle the encode command
pub fn encode(input: Option<&Path>, raw: bool, qr: Option<&Path>) -> Result<()> {
    let text = read_text(input)?;
    let code = encode_from_json(&text, raw)?;

    if let Some(path) = qr {
        let png = naraka::render_qr_png(&code).context("Failed to render QR code")?;
        write_bytes(Some(path), &png)?;
        tracing::info!(path = %path.display(), "wrote QR code");
    }

    write_text(None, &code)
}

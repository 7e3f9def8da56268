//! WebAssembly bindings for naraka
//!
//! Records cross the boundary as JavaScript objects with the same shape as
//! the share-code JSON (`faceData` / `hairData`).

use crate::preset;
use crate::record::{ParsedRecord, RawRecord};
use crate::token;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))?;
    js_sys::JSON::parse(&json)
}

fn from_js<T: DeserializeOwned>(value: &JsValue) -> Result<T, JsValue> {
    let json: String = js_sys::JSON::stringify(value)?.into();
    serde_json::from_str(&json).map_err(|e| JsValue::from_str(&format!("Parse failed: {}", e)))
}

/// Decode a share code into a parsed record object
#[wasm_bindgen(js_name = decodeCode)]
pub fn decode_code(code: &str) -> Result<JsValue, JsValue> {
    let parsed = token::decode_code_to_parsed(code)
        .map_err(|e| JsValue::from_str(&format!("Decode failed: {}", e)))?;
    to_js(&parsed)
}

/// Decode a share code into a raw record object (flat face data array)
#[wasm_bindgen(js_name = decodeCodeRaw)]
pub fn decode_code_raw(code: &str) -> Result<JsValue, JsValue> {
    let raw = token::decode_code_to_raw(code)
        .map_err(|e| JsValue::from_str(&format!("Decode failed: {}", e)))?;
    to_js(&raw)
}

/// Encode a parsed record object into a share code
#[wasm_bindgen(js_name = encodeCode)]
pub fn encode_code(parsed: JsValue) -> Result<String, JsValue> {
    let parsed: ParsedRecord = from_js(&parsed)?;
    token::encode_parsed_to_code(&parsed)
        .map_err(|e| JsValue::from_str(&format!("Encode failed: {}", e)))
}

/// Encode a raw record object into a share code
#[wasm_bindgen(js_name = encodeRawCode)]
pub fn encode_raw_code(raw: JsValue) -> Result<String, JsValue> {
    let raw: RawRecord = from_js(&raw)?;
    token::encode_raw_to_code(&raw).map_err(|e| JsValue::from_str(&format!("Encode failed: {}", e)))
}

/// Smart-apply a preset onto the current record
#[wasm_bindgen(js_name = applySmartPreset)]
pub fn apply_smart_preset(current: JsValue, preset: JsValue) -> Result<JsValue, JsValue> {
    let current: ParsedRecord = from_js(&current)?;
    let preset: ParsedRecord = from_js(&preset)?;
    to_js(&preset::apply_smart_preset(&current, &preset))
}

#[wasm_bindgen(js_name = randomize)]
pub fn randomize(current: JsValue) -> Result<JsValue, JsValue> {
    let current: ParsedRecord = from_js(&current)?;
    to_js(&preset::randomize(&current))
}

#[wasm_bindgen(js_name = nullify)]
pub fn nullify(current: JsValue) -> Result<JsValue, JsValue> {
    let current: ParsedRecord = from_js(&current)?;
    to_js(&preset::nullify(&current))
}

/// Render a share code as a PNG QR image
#[cfg(feature = "qr")]
#[wasm_bindgen(js_name = renderQrPng)]
pub fn render_qr_png(code: &str) -> Result<Vec<u8>, JsValue> {
    crate::qr::render_qr_png(code).map_err(|e| JsValue::from_str(&format!("QR render failed: {}", e)))
}

/// Scan an encoded image for a share code; `undefined` when none is found
#[cfg(feature = "qr")]
#[wasm_bindgen(js_name = scanQr)]
pub fn scan_qr(image_bytes: &[u8]) -> Result<Option<String>, JsValue> {
    crate::qr::scan_qr_bytes(image_bytes)
        .map_err(|e| JsValue::from_str(&format!("QR scan failed: {}", e)))
}

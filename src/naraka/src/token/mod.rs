//! Share code encoding and decoding.
//!
//! Format:
//! 1. Codes start with the `NARAKA-FACEHAIR-` prefix (optional on decode)
//! 2. The rest is standard base64 (with padding)
//! 3. Decoded bytes are an LZMA1 stream whose header has the share-code
//!    size-field layout (see [`header`])
//! 4. Decompressed bytes are the JSON form of a [`RawRecord`]

pub mod header;
pub mod lzma;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::record::{ParsedRecord, RawRecord};

pub use header::{quirk_header, restore_header, HEADER_LEN};

/// Prefix of every share code
pub const CODE_PREFIX: &str = "NARAKA-FACEHAIR-";

/// LZMA preset level used when encoding
pub const COMPRESSION_PRESET: u32 = 5;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid base64 encoding: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Compressed data too short for an LZMA header: {len} bytes")]
    HeaderTooShort { len: usize },

    #[error("Uncompressed size {0:#x} does not fit the share code header")]
    SizeOverflow(u64),

    #[error("Payload of {0} bytes is too large to encode")]
    PayloadTooLarge(usize),

    #[error("Compression failed: {0}")]
    Compress(#[source] xz2::stream::Error),

    #[error("Decompression failed: {0}")]
    Decompress(#[source] xz2::stream::Error),

    #[error("Compressed stream is truncated")]
    Truncated,

    #[error("Decompressed {actual} bytes, header says {expected}")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("Failed to parse share code payload: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Remove the share-code prefix if present
pub fn strip_prefix(code: &str) -> &str {
    code.strip_prefix(CODE_PREFIX).unwrap_or(code)
}

/// Encode a raw record into a share code
pub fn encode_raw_to_code(raw: &RawRecord) -> Result<String, TokenError> {
    let json = serde_json::to_vec(raw).map_err(TokenError::Serialize)?;
    let compressed = lzma::compress(&json, COMPRESSION_PRESET)?;
    let quirked = quirk_header(&compressed)?;

    tracing::debug!(
        json_len = json.len(),
        compressed_len = compressed.len(),
        "encoded share code"
    );

    Ok(format!("{}{}", CODE_PREFIX, STANDARD.encode(quirked)))
}

/// Decode a share code (with or without prefix) into a raw record
pub fn decode_code_to_raw(code: &str) -> Result<RawRecord, TokenError> {
    let body = strip_prefix(code.trim());
    let quirked = STANDARD.decode(body.trim())?;
    let standard = restore_header(&quirked)?;
    let size_field = header::uncompressed_size(&standard)?;

    tracing::debug!(
        compressed_len = standard.len(),
        size_field,
        "restored share code header"
    );

    let json = lzma::decompress(&standard)?;
    serde_json::from_slice(&json).map_err(TokenError::Parse)
}

/// Decode a share code into a parsed record
pub fn decode_code_to_parsed(code: &str) -> Result<ParsedRecord, TokenError> {
    decode_code_to_raw(code).map(|raw| raw.to_parsed())
}

/// Encode a parsed record into a share code
pub fn encode_parsed_to_code(parsed: &ParsedRecord) -> Result<String, TokenError> {
    encode_raw_to_code(&parsed.to_raw())
}

//! # naraka
//!
//! Naraka: Bladepoint face/hair share-code library.
//!
//! This library provides functionality to:
//! - Decode and encode `NARAKA-FACEHAIR-` share codes
//! - Convert the game's flat face-data array to and from nested,
//!   path-addressed face data
//! - Apply presets, randomize and reset face sliders
//! - Read and render share codes as QR images (feature `qr`)
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let code = std::fs::read_to_string("face.txt")?;
//!
//! // Decode into nested face data
//! let mut parsed = naraka::decode_code_to_parsed(&code)?;
//! println!("Right eye: {:?}", parsed.face_data.get("ParamData/Eyes/Right"));
//!
//! parsed.face_data.set("ParamData/Eyes/Right", 60);
//!
//! // Re-encode as a share code
//! let code = naraka::encode_parsed_to_code(&parsed)?;
//! println!("{}", code);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod path;
pub mod preset;
pub mod record;
pub mod schema;
pub mod token;

#[cfg(feature = "qr")]
pub mod qr;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use codec::{array_to_face, decode_raw_to_parsed, encode_parsed_to_raw, face_to_array};
#[doc(inline)]
pub use preset::{apply_smart_preset, nullify, randomize, randomize_with, SLIDER_MAX};
#[doc(inline)]
pub use record::{FaceData, HairData, ParsedRecord, RawRecord};
#[doc(inline)]
pub use schema::{SchemaEntry, SCHEMA};
#[doc(inline)]
pub use token::{
    decode_code_to_parsed, decode_code_to_raw, encode_parsed_to_code, encode_raw_to_code,
    TokenError, CODE_PREFIX,
};

#[cfg(feature = "qr")]
#[doc(inline)]
pub use qr::{render_qr_png, scan_qr, scan_qr_bytes, QrError};

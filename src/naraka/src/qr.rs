//! QR code images for share codes.
//!
//! Scanning an image without a readable symbol is not an error: it yields
//! `None` and the caller decides how to report it.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcodegen::{QrCode, QrCodeEcc};
use thiserror::Error;

use crate::record::RawRecord;
use crate::token::{self, TokenError};

/// Quiet zone around the symbol, in modules
const BORDER: u32 = 4;

/// Pixels per module
const SCALE: u32 = 8;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Share code does not fit in a QR symbol: {0}")]
    Encode(#[from] qrcodegen::DataTooLong),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Return the text of the first readable QR symbol in `image`
pub fn scan_qr(image: &DynamicImage) -> Option<String> {
    let luma = image.to_luma8();
    let (width, height) = luma.dimensions();

    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
            luma.get_pixel(x as u32, y as u32).0[0]
        });

    let grids = prepared.detect_grids();
    let found = grids
        .iter()
        .find_map(|grid| grid.decode().ok().map(|(_meta, content)| content));

    tracing::debug!(grids = grids.len(), found = found.is_some(), "scanned image for QR code");
    found
}

/// Decode an encoded image file (PNG, JPEG, BMP) and scan it
pub fn scan_qr_bytes(bytes: &[u8]) -> Result<Option<String>, QrError> {
    let image = image::load_from_memory(bytes)?;
    Ok(scan_qr(&image))
}

/// Render `text` as a QR symbol
pub fn render_qr(text: &str) -> Result<GrayImage, QrError> {
    let code = QrCode::encode_text(text, QrCodeEcc::Medium)?;
    let modules = code.size() as u32 + 2 * BORDER;
    let dim = modules * SCALE;

    Ok(GrayImage::from_fn(dim, dim, |x, y| {
        let mx = (x / SCALE) as i32 - BORDER as i32;
        let my = (y / SCALE) as i32 - BORDER as i32;
        if code.get_module(mx, my) {
            Luma([0])
        } else {
            Luma([255])
        }
    }))
}

/// Render `text` as a QR symbol and encode it as PNG
pub fn render_qr_png(text: &str) -> Result<Vec<u8>, QrError> {
    let image = DynamicImage::ImageLuma8(render_qr(text)?);
    let mut png = Cursor::new(Vec::new());
    image.write_to(&mut png, ImageFormat::Png)?;
    Ok(png.into_inner())
}

/// Encode a raw record as a share code and render it as a PNG QR image
pub fn encode_raw_to_qr_png(raw: &RawRecord) -> Result<Vec<u8>, QrError> {
    let code = token::encode_raw_to_code(raw)?;
    render_qr_png(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use serde_json::Number;

    #[test]
    fn test_render_has_quiet_zone() {
        let image = render_qr("NARAKA-FACEHAIR-test").unwrap();
        assert_eq!(image.width(), image.height());
        assert_eq!(image.width() % SCALE, 0);
        // Corner pixel lies in the quiet zone
        assert_eq!(image.get_pixel(0, 0).0, [255]);
        // First module of the top-left finder pattern is dark
        assert_eq!(image.get_pixel(BORDER * SCALE, BORDER * SCALE).0, [0]);
    }

    #[test]
    fn test_render_then_scan() {
        let text = "NARAKA-FACEHAIR-XQAAgAA0AQAANAEAAAAAAAAAPY";
        let image = DynamicImage::ImageLuma8(render_qr(text).unwrap());
        assert_eq!(scan_qr(&image).as_deref(), Some(text));
    }

    #[test]
    fn test_png_roundtrip_with_share_code() {
        let raw = RawRecord {
            face_data: (0..schema::len()).map(|i| Number::from(i as u64 % 101)).collect(),
            ..RawRecord::default()
        };
        let png = encode_raw_to_qr_png(&raw).unwrap();
        let code = scan_qr_bytes(&png).unwrap().unwrap();
        assert!(code.starts_with(token::CODE_PREFIX));
        assert_eq!(token::decode_code_to_raw(&code).unwrap(), raw);
    }

    #[test]
    fn test_blank_image_has_no_code() {
        let blank = DynamicImage::ImageLuma8(GrayImage::from_pixel(64, 64, Luma([255])));
        assert_eq!(scan_qr(&blank), None);
    }

    #[test]
    fn test_invalid_image_bytes() {
        assert!(matches!(scan_qr_bytes(b"not an image"), Err(QrError::Image(_))));
    }
}

//! LZMA container header rewriting.
//!
//! A standard `.lzma` header is 13 bytes:
//!
//! ```text
//! 0      1..5         5..13                13..
//! props  dict size    uncompressed size    payload
//!                     (u64 LE)
//! ```
//!
//! Share codes store the low half of the size field twice instead: bytes
//! 5..9 are copied over 9..13. Restoring zeroes 9..13 again, so the
//! transform only round-trips for payloads under 4 GiB.

use super::TokenError;

/// Length of the LZMA container header
pub const HEADER_LEN: usize = 13;

const SIZE_LOW: usize = 5;
const SIZE_HIGH: usize = 9;

/// Uncompressed size value meaning "unknown, stream ends with a marker"
pub const UNKNOWN_SIZE: u64 = u64::MAX;

fn check_len(buf: &[u8]) -> Result<(), TokenError> {
    if buf.len() < HEADER_LEN {
        return Err(TokenError::HeaderTooShort { len: buf.len() });
    }
    Ok(())
}

/// Read the 8-byte uncompressed size field of a standard header
pub fn uncompressed_size(buf: &[u8]) -> Result<u64, TokenError> {
    check_len(buf)?;
    let mut field = [0u8; 8];
    field.copy_from_slice(&buf[SIZE_LOW..HEADER_LEN]);
    Ok(u64::from_le_bytes(field))
}

/// Overwrite the uncompressed size field of a standard header
pub fn set_uncompressed_size(buf: &mut [u8], size: u64) -> Result<(), TokenError> {
    check_len(buf)?;
    buf[SIZE_LOW..HEADER_LEN].copy_from_slice(&size.to_le_bytes());
    Ok(())
}

/// Rewrite a standard header into the share-code layout.
///
/// Fails with [`TokenError::SizeOverflow`] if the high half of the size
/// field is non-zero, since that information would be lost.
pub fn quirk_header(standard: &[u8]) -> Result<Vec<u8>, TokenError> {
    check_len(standard)?;

    if standard[SIZE_HIGH..HEADER_LEN].iter().any(|&b| b != 0) {
        return Err(TokenError::SizeOverflow(uncompressed_size(standard)?));
    }

    let mut quirked = standard.to_vec();
    quirked.copy_within(SIZE_LOW..SIZE_HIGH, SIZE_HIGH);
    Ok(quirked)
}

/// Rewrite a share-code header back into a standard header
pub fn restore_header(quirked: &[u8]) -> Result<Vec<u8>, TokenError> {
    check_len(quirked)?;

    let mut standard = quirked.to_vec();
    standard[SIZE_HIGH..HEADER_LEN].fill(0);
    Ok(standard)
}

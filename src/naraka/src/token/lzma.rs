//! LZMA1 (`.lzma` container) compression via liblzma.

use xz2::stream::{Action, LzmaOptions, Status, Stream};

use super::header::{self, HEADER_LEN, UNKNOWN_SIZE};
use super::TokenError;

/// Decoder memory limit
const MEMLIMIT: u64 = 256 * 1024 * 1024;

/// Upper bound on output preallocation taken from an untrusted header
const MAX_PREALLOC: usize = 16 * 1024 * 1024;

const CHUNK: usize = 16 * 1024;

/// Compress `data` into a standard `.lzma` stream.
///
/// liblzma leaves the size field as "unknown"; the true length is written
/// back so the header can go through [`header::quirk_header`].
pub fn compress(data: &[u8], preset: u32) -> Result<Vec<u8>, TokenError> {
    let size = u32::try_from(data.len()).map_err(|_| TokenError::PayloadTooLarge(data.len()))?;

    let options = LzmaOptions::new_preset(preset).map_err(TokenError::Compress)?;
    let mut stream = Stream::new_lzma_encoder(&options).map_err(TokenError::Compress)?;

    let mut output = Vec::with_capacity(HEADER_LEN + data.len() / 2);
    loop {
        let before = (stream.total_in(), stream.total_out());
        output.reserve(CHUNK);

        let status = stream
            .process_vec(&data[before.0 as usize..], &mut output, Action::Finish)
            .map_err(TokenError::Compress)?;

        if status == Status::StreamEnd {
            break;
        }
        if (stream.total_in(), stream.total_out()) == before {
            return Err(TokenError::Truncated);
        }
    }

    header::set_uncompressed_size(&mut output, u64::from(size))?;
    Ok(output)
}

/// Decompress a standard `.lzma` stream.
///
/// Accepts streams with a known size (with or without an end marker) and
/// streams of unknown size terminated by an end marker.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, TokenError> {
    let expected = header::uncompressed_size(data)?;
    let mut stream = Stream::new_lzma_decoder(MEMLIMIT).map_err(TokenError::Decompress)?;

    let prealloc = usize::try_from(expected).map_or(MAX_PREALLOC, |n| n.min(MAX_PREALLOC));
    let mut output = Vec::with_capacity(prealloc);
    loop {
        let before = (stream.total_in(), stream.total_out());
        output.reserve(CHUNK);

        let status = stream
            .process_vec(&data[before.0 as usize..], &mut output, Action::Run)
            .map_err(TokenError::Decompress)?;

        if status == Status::StreamEnd {
            break;
        }
        if (stream.total_in(), stream.total_out()) == before {
            return Err(TokenError::Truncated);
        }
    }

    if expected != UNKNOWN_SIZE && output.len() as u64 != expected {
        return Err(TokenError::SizeMismatch {
            expected,
            actual: output.len() as u64,
        });
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> Vec<u8> {
        br#"{"faceData":[1001,3,50,50,50,50,0,0,100],"hairData":{"HeroID":1001}}"#.repeat(8)
    }

    #[test]
    fn test_roundtrip() {
        let data = payload();
        let compressed = compress(&data, 5).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_header_records_true_size() {
        let data = payload();
        let compressed = compress(&data, 5).unwrap();
        assert_eq!(header::uncompressed_size(&compressed).unwrap(), data.len() as u64);
        // lc=3 lp=0 pb=2, 8 MiB dictionary at preset 5
        assert_eq!(compressed[..5], [0x5D, 0x00, 0x00, 0x80, 0x00]);
    }

    #[test]
    fn test_compresses_repetitive_input() {
        let data = payload();
        let compressed = compress(&data, 5).unwrap();
        assert!(compressed.len() < data.len());
    }

    #[test]
    fn test_unknown_size_stream() {
        let data = payload();
        let mut compressed = compress(&data, 5).unwrap();
        header::set_uncompressed_size(&mut compressed, UNKNOWN_SIZE).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_truncated_stream() {
        let data = payload();
        let compressed = compress(&data, 5).unwrap();
        let cut = &compressed[..compressed.len() / 2];
        assert!(decompress(cut).is_err());
    }

    #[test]
    fn test_garbage_stream() {
        let garbage = [0xFFu8; 32];
        assert!(decompress(&garbage).is_err());
        assert!(matches!(decompress(&garbage[..4]), Err(TokenError::HeaderTooShort { .. })));
    }
}

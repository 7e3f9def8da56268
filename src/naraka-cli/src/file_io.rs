//! Stdin/stdout fallbacks for handler input and output
//!
//! Every helper takes `Option<&Path>`; `None` means the standard stream.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Read a whole file, or all of stdin
pub fn read_bytes(path: Option<&Path>) -> Result<Vec<u8>> {
    let Some(path) = path else {
        let mut bytes = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut bytes)
            .context("Failed to read stdin")?;
        return Ok(bytes);
    };

    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read UTF-8 text from a file, or from stdin
pub fn read_text(path: Option<&Path>) -> Result<String> {
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).context("Input is not valid UTF-8")
}

/// Write bytes to a file, or to stdout
pub fn write_bytes(path: Option<&Path>, data: &[u8]) -> Result<()> {
    let Some(path) = path else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data).context("Failed to write stdout")?;
        return stdout.flush().context("Failed to write stdout");
    };

    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write text, newline-terminated on stdout
pub fn write_text(path: Option<&Path>, text: &str) -> Result<()> {
    if path.is_some() {
        return write_bytes(path, text.as_bytes());
    }

    write_bytes(None, format!("{}\n", text).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_text(Some(&path), "{\"faceData\":[]}").unwrap();
        assert_eq!(read_text(Some(&path)).unwrap(), "{\"faceData\":[]}");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_bytes(Some(&dir.path().join("missing.png"))).unwrap_err();
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0xFFu8, 0xFE]).unwrap();
        assert!(read_text(Some(&path)).is_err());
    }
}

// crates/remove_sourcemap/src/decode.rs

use anyhow::{anyhow, Result};
use std::path::Path;

/// Decodes `bytes` as UTF-8, silently discarding every invalid sequence.
///
/// No replacement character is inserted. Returns the text together with the
/// number of bytes that were dropped.
pub fn decode_lossy(bytes: &[u8]) -> (String, usize) {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }
    (text, dropped)
}

/// Decodes the contents of `path` according to the configured policy.
///
/// # Errors
///
/// In strict mode (`lossy == false`) returns an error naming the file and the
/// offset of the first invalid byte.
pub fn decode(bytes: Vec<u8>, lossy: bool, path: &Path) -> Result<(String, usize)> {
    if lossy {
        return Ok(decode_lossy(&bytes));
    }
    String::from_utf8(bytes)
        .map(|text| (text, 0))
        .map_err(|err| {
            anyhow!(
                "{} is not valid UTF-8 (first invalid byte at offset {})",
                path.display(),
                err.utf8_error().valid_up_to()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lossy_valid_input_untouched() {
        let (text, dropped) = decode_lossy("const π = 3.14;\n".as_bytes());
        assert_eq!(text, "const π = 3.14;\n");
        assert_eq!(dropped, 0);
    }

    #[test]
    fn test_decode_lossy_drops_invalid_bytes() {
        // 0xFF never appears in UTF-8; 0xE2 0x82 is a truncated 3-byte sequence.
        let bytes = b"ab\xFFcd\xE2\x82\n";
        let (text, dropped) = decode_lossy(bytes);
        assert_eq!(text, "abcd\n");
        assert_eq!(dropped, 3);
    }

    #[test]
    fn test_strict_decode_reports_offset() {
        let err = decode(b"ok\xFF".to_vec(), false, Path::new("lib/ti.js")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("lib/ti.js"));
        assert!(message.contains("offset 2"));
    }

    #[test]
    fn test_lossy_decode_never_fails() {
        let (text, dropped) = decode(b"\xC0\xC1".to_vec(), true, Path::new("x.js")).unwrap();
        assert!(text.is_empty());
        assert_eq!(dropped, 2);
    }
}

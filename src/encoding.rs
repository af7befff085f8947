//! Input encodings
//!
//! The hashers consume 16-bit code units. Text is read as UTF-16LE, so
//! `"A"` becomes `[0x41, 0x00]` and every encoded string has even length.

use crate::error::Result;

/// Encode `text` as UTF-16LE code units
pub fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Decode a hex message, ignoring surrounding whitespace
pub fn from_hex(input: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(input.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_utf16le_ascii() {
        assert_eq!(utf16le("abc"), vec![0x61, 0x00, 0x62, 0x00, 0x63, 0x00]);
        assert!(utf16le("").is_empty());
    }

    #[test]
    fn test_utf16le_code_unit() {
        // U+FB41 packs to the bytes 41 FB
        assert_eq!(utf16le("\u{fb41}"), vec![0x41, 0xfb]);
        // Surrogate pairs become two code units
        assert_eq!(utf16le("\u{1f600}").len(), 4);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex(" 41FB\n").unwrap(), vec![0x41, 0xfb]);
        assert!(matches!(from_hex("4"), Err(Error::Hex(_))));
        assert!(matches!(from_hex("zz"), Err(Error::Hex(_))));
    }
}

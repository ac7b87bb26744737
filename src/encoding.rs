//! Byte-to-string normalization for the two feed locales.
//!
//! The Russian feed is served in windows-1251 and must be transcoded to
//! UTF-8 before any structural parsing. The English feed is plain
//! ASCII/UTF-8 on the wire (whatever its prologue claims) and only needs
//! validation.

use encoding_rs::{UTF_8, WINDOWS_1251};

use crate::error::{CbrError, Result};

/// Transcode a windows-1251 response body to a UTF-8 string.
///
/// # Arguments
/// * `bytes` - Raw response body
///
/// # Returns
/// The body as UTF-8 text, or `CbrError::Encoding` if it contains byte
/// sequences with no windows-1251 mapping.
pub fn decode_windows_1251(bytes: &[u8]) -> Result<String> {
    let (text, _, had_errors) = WINDOWS_1251.decode(bytes);
    if had_errors {
        return Err(CbrError::Encoding {
            encoding: "windows-1251",
        });
    }
    Ok(text.into_owned())
}

/// Validate a response body as UTF-8 text.
///
/// Used for the English feed, which parses directly. A body that is not
/// valid UTF-8 fails here instead of garbling downstream.
pub fn decode_utf8(bytes: &[u8]) -> Result<String> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        return Err(CbrError::Encoding { encoding: "utf-8" });
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_windows_1251_cyrillic() {
        // "Рубль" in windows-1251
        let bytes = [0xD0, 0xF3, 0xE1, 0xEB, 0xFC];
        assert_eq!(decode_windows_1251(&bytes).unwrap(), "Рубль");
    }

    #[test]
    fn test_decode_windows_1251_ascii_passthrough() {
        let bytes = b"<CharCode>AUD</CharCode>";
        assert_eq!(
            decode_windows_1251(bytes).unwrap(),
            "<CharCode>AUD</CharCode>"
        );
    }

    #[test]
    fn test_decode_windows_1251_unmapped_byte() {
        // 0x98 has no assignment in windows-1251
        let bytes = [0x41, 0x98, 0x42];
        let err = decode_windows_1251(&bytes).unwrap_err();
        assert!(matches!(
            err,
            CbrError::Encoding {
                encoding: "windows-1251"
            }
        ));
    }

    #[test]
    fn test_decode_utf8_valid() {
        assert_eq!(decode_utf8("Rouble".as_bytes()).unwrap(), "Rouble");
    }

    #[test]
    fn test_decode_utf8_invalid() {
        // A lone continuation byte is not valid UTF-8
        let err = decode_utf8(&[0x80]).unwrap_err();
        assert!(matches!(err, CbrError::Encoding { encoding: "utf-8" }));
    }
}

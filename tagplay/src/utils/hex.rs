//! Hexadecimal helpers.
//!
//! Tag identifiers are lowercase hex strings of the UID, and frame bytes are
//! logged in spaced hex, so both forms live here together with a lenient
//! parser for configured identifiers.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0x04, 0xa1]` -> `"04a1"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte. Used for frame dumps in debug logs.
///
/// Example: `&[0x00, 0xff]` -> `"00 ff"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes. ASCII whitespace is ignored and both
/// upper and lower case digits are accepted.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            // from_str_radix alone would accept a leading '+'
            if !pair.iter().all(u8::is_ascii_hexdigit) {
                return Err(format!(
                    "invalid hex pair '{}'",
                    String::from_utf8_lossy(pair)
                ));
            }
            let pair = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}

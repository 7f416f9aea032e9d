// tagplay/src/protocol/parser.rs

use crate::constants::PN532_DEVICE_TO_HOST;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Check the chip->host marker and the response opcode (`opcode + 1`) at
/// the head of a decoded data region, and return what follows them.
pub fn strip_response_header(data: &[u8], opcode: u8) -> Result<&[u8]> {
    let tfi = byte_at(data, 0)?;
    if tfi != PN532_DEVICE_TO_HOST {
        return Err(Error::UnexpectedResponse {
            expected: PN532_DEVICE_TO_HOST,
            actual: tfi,
        });
    }
    let expected = opcode.wrapping_add(1);
    let actual = byte_at(data, 1)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(&data[2..])
}

// tagplay/src/protocol/checksum.rs

/// Compute Length Checksum (LCS) for a PN532 frame
/// LCS = 0x100 - length (mod 256), so LEN + LCS == 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) for a PN532 frame
/// DCS = 0x100 - (sum(data) & 0xff), so sum(data) + DCS == 0 (mod 256)
pub fn dcs(data: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(data))
}

/// Additive mod-256 sum of a byte slice.
pub fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

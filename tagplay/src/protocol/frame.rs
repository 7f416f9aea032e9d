// tagplay/src/protocol/frame.rs

use crate::constants::{
    PN532_ACK, PN532_FRAME_OVERHEAD, PN532_MAX_DATA_LEN, PN532_POSTAMBLE, PN532_PREAMBLE,
    PN532_PREAMBLE_BYTE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::status::Status;
use crate::{Error, Result};

/// PN532 normal information frame helper.
/// Format: [Preamble(1)] [Start code(2)] [Len(1)] [LCS(1)] [Data(n)] [DCS(1)] [Postamble(1)]
/// Preamble + start code: 0x00 0x00 0xFF
/// Postamble: 0x00
pub struct Frame;

impl Frame {
    /// Encode a data region into a full wire frame
    pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
        if data.len() > PN532_MAX_DATA_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MAX_DATA_LEN,
                actual: data.len(),
            });
        }

        let len = data.len() as u8;
        let mut out = Vec::with_capacity(PN532_FRAME_OVERHEAD + data.len());
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(data);
        out.push(dcs(data));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Decode a wire frame and return its data region.
    ///
    /// Any run of 0x00 padding before the 0xFF start code is skipped, since
    /// the chip may emit several leading zeros. A missing postamble is
    /// tolerated (best-effort reads can stop right after the DCS) but a
    /// present one must be 0x00.
    pub fn decode(raw: &[u8]) -> Result<Vec<u8>> {
        let start = raw
            .iter()
            .position(|&b| b != PN532_PREAMBLE_BYTE)
            .ok_or_else(|| Error::FrameFormat("preamble does not contain 0x00FF".into()))?;

        if raw[start] != PN532_PREAMBLE[2] {
            return Err(Error::FrameFormat("preamble does not contain 0x00FF".into()));
        }

        let len_idx = start + 1;
        if raw.len() < len_idx + 2 {
            return Err(Error::InvalidLength {
                expected: len_idx + 2,
                actual: raw.len(),
            });
        }

        let len = raw[len_idx];
        let lcs_actual = raw[len_idx + 1];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        let data_start = len_idx + 2;
        let data_end = data_start + (len as usize);
        if raw.len() <= data_end {
            return Err(Error::InvalidLength {
                expected: data_end + 1,
                actual: raw.len(),
            });
        }

        let data = &raw[data_start..data_end];
        let dcs_actual = raw[data_end];
        let dcs_expected = dcs(data);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if let Some(&post) = raw.get(data_end + 1) {
            if post != PN532_POSTAMBLE {
                return Err(Error::FrameFormat("invalid postamble".into()));
            }
        }

        Ok(data.to_vec())
    }
}

/// Compare bytes read after a command against the ACK frame. Anything but
/// an exact match is an `ACK_ERROR`.
pub fn check_ack(bytes: &[u8]) -> Status {
    if bytes == PN532_ACK {
        Status::OK
    } else {
        Status::ACK_ERROR
    }
}

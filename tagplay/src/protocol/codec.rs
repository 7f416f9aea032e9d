// tagplay/src/protocol/codec.rs

use crate::constants::{PN532_DEVICE_TO_HOST, PN532_HOST_TO_DEVICE};
use crate::Result;

use super::Frame;
use super::parser::strip_response_header;

/// Data region of a host command: TFI, opcode, parameters.
pub fn command_data(opcode: u8, params: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(2 + params.len());
    v.push(PN532_HOST_TO_DEVICE);
    v.push(opcode);
    v.extend_from_slice(params);
    v
}

/// Encode a command into a full wire frame (with preamble/LCS/DCS/postamble).
pub fn encode_command_frame(opcode: u8, params: &[u8]) -> Result<Vec<u8>> {
    Frame::encode(&command_data(opcode, params))
}

/// Frame a chip reply to `opcode`: `D5 opcode+1 payload...`. The driver
/// never sends these; they feed simulations and benchmarks.
pub fn encode_response_frame(opcode: u8, payload: &[u8]) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(2 + payload.len());
    data.push(PN532_DEVICE_TO_HOST);
    data.push(opcode.wrapping_add(1));
    data.extend_from_slice(payload);
    Frame::encode(&data)
}

/// Decode a full wire frame and return the reply payload for the
/// expected command code.
pub fn decode_response_frame(opcode: u8, frame: &[u8]) -> Result<Vec<u8>> {
    let data = Frame::decode(frame)?;
    strip_response_header(&data, opcode).map(<[u8]>::to_vec)
}

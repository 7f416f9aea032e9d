//! Test support helpers intended for use by unit and integration tests.
//!
//! Reply builders produce the exact bytes a PN532 puts on the wire, and
//! `mock_reader` wires a `Pn532` to the in-memory transport, pins and delay
//! so tests can script the chip and inspect what the driver did.
#![allow(dead_code)]

use crate::constants::{
    PN532_ACK, PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_INLIST_PASSIVE_TARGET,
    PN532_CMD_SAM_CONFIGURATION, PN532_DEVICE_TO_HOST, PN532_POSTAMBLE, PN532_PREAMBLE,
};
use crate::device::Pn532;
use crate::protocol::checksum::{dcs, lcs};
use crate::transport::mock::{MockDelay, MockPin, MockTransport};

/// Firmware reply payload of a PN532 v1.6
pub const FIRMWARE_PAYLOAD: [u8; 4] = [0x32, 0x01, 0x06, 0x07];

#[doc(hidden)]
pub fn ack_bytes() -> Vec<u8> {
    PN532_ACK.to_vec()
}

/// Response frame for `opcode` carrying `payload`, without the ACK.
/// Payloads longer than 253 bytes are truncated to fit one frame.
#[doc(hidden)]
pub fn response_frame(opcode: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![PN532_DEVICE_TO_HOST, opcode.wrapping_add(1)];
    data.extend_from_slice(&payload[..payload.len().min(253)]);

    let len = data.len() as u8;
    let mut frame = PN532_PREAMBLE.to_vec();
    frame.push(len);
    frame.push(lcs(len));
    frame.extend_from_slice(&data);
    frame.push(dcs(&data));
    frame.push(PN532_POSTAMBLE);
    frame
}

/// Six bytes where the ACK belongs, with the packet code byte corrupted.
#[doc(hidden)]
pub fn noisy_ack() -> Vec<u8> {
    let mut ack = ack_bytes();
    ack[3] = 0x5A;
    ack
}

/// `reply` with its leading ACK replaced by `noisy_ack()`.
#[doc(hidden)]
pub fn with_noisy_ack(reply: Vec<u8>) -> Vec<u8> {
    let mut bytes = noisy_ack();
    bytes.extend_from_slice(&reply[PN532_ACK.len()..]);
    bytes
}

/// ACK followed by the response frame: what the chip sends for a command
/// that succeeds.
#[doc(hidden)]
pub fn reply(opcode: u8, payload: &[u8]) -> Vec<u8> {
    let mut bytes = ack_bytes();
    bytes.extend_from_slice(&response_frame(opcode, payload));
    bytes
}

#[doc(hidden)]
pub fn firmware_reply() -> Vec<u8> {
    reply(PN532_CMD_GET_FIRMWARE_VERSION, &FIRMWARE_PAYLOAD)
}

#[doc(hidden)]
pub fn sam_reply() -> Vec<u8> {
    reply(PN532_CMD_SAM_CONFIGURATION, &[])
}

/// InListPassiveTarget payload for one type A target with `uid`. The UID
/// length byte is taken from `uid`, so an oversized UID can be scripted.
#[doc(hidden)]
pub fn detection_payload(uid: &[u8]) -> Vec<u8> {
    // NbTg, Tg, SENS_RES, SEL_RES, NFCIDLength
    let mut payload = vec![0x01, 0x01, 0x00, 0x04, 0x08, uid.len() as u8];
    payload.extend_from_slice(uid);
    payload
}

#[doc(hidden)]
pub fn detection_reply(uid: &[u8]) -> Vec<u8> {
    reply(PN532_CMD_INLIST_PASSIVE_TARGET, &detection_payload(uid))
}

/// ACK and nothing else: the chip saw no tag before the poll timed out.
#[doc(hidden)]
pub fn idle_reply() -> Vec<u8> {
    ack_bytes()
}

/// A well-formed frame answering the wrong command: decodes as `MALFORMED`.
#[doc(hidden)]
pub fn failure_reply() -> Vec<u8> {
    reply(PN532_CMD_SAM_CONFIGURATION, &[])
}

/// Handles kept by the test after the driver takes ownership of the mocks.
#[derive(Debug, Clone)]
pub struct MockRig {
    pub transport: MockTransport,
    pub reset: MockPin,
    pub delay: MockDelay,
}

/// A `Pn532` over fresh mocks, reset line starting high.
#[doc(hidden)]
pub fn mock_reader() -> (Pn532, MockRig) {
    let rig = MockRig {
        transport: MockTransport::new(),
        reset: MockPin::new(true),
        delay: MockDelay::new(),
    };
    let reader = Pn532::new(
        Box::new(rig.transport.clone()),
        Box::new(rig.reset.clone()),
        Box::new(rig.delay.clone()),
    );
    (reader, rig)
}

// tagplay/src/constants.rs
//! Wire-level constants for the PN532 high-speed UART link

/// Frame preamble and start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Leading preamble byte
pub const PN532_PREAMBLE_BYTE: u8 = 0x00;

/// Frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Framing overhead in bytes: preamble(3) + len(1) + lcs(1) + dcs(1) + postamble(1)
pub const PN532_FRAME_OVERHEAD: usize = 7;

/// Largest data region a normal information frame can carry
pub const PN532_MAX_DATA_LEN: usize = 255;

/// Acknowledgement frame sent by the chip after accepting a command frame
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Wake-up sequence for HSU mode. Written raw, outside the framed path.
pub const PN532_WAKEUP: [u8; 14] = [
    0x55, 0x55, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Direction marker host->chip (TFI) and chip->host
pub const PN532_HOST_TO_DEVICE: u8 = 0xD4;
pub const PN532_DEVICE_TO_HOST: u8 = 0xD5;

/// Command opcodes
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;

/// Expected GetFirmwareVersion payload length (IC, Ver, Rev, Support)
pub const PN532_FIRMWARE_VERSION_LEN: usize = 4;

/// Upper bound of the InListPassiveTarget payload for one ISO14443A target
/// with a 7-byte UID
pub const PN532_INLIST_RESPONSE_LEN: usize = 19;

/// Longest UID accepted from a detection response
pub const MAX_UID_LEN: usize = 7;

/// Fixed UART baud rate of the reader
pub const PN532_BAUD_RATE: u32 = 115_200;

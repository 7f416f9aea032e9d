// tagplay/src/device/commands.rs

//! PN532 command data builders and reply decoders

use log::{debug, warn};

use crate::constants::MAX_UID_LEN;
use crate::protocol::parser::{byte_at, slice_at};
use crate::status::Status;
use crate::types::{BaudProfile, Uid};

/// SAMConfiguration: normal mode
pub const SAM_MODE_NORMAL: u8 = 0x01;
/// SAMConfiguration: virtual card timeout, 50ms * 20 = 1 second
pub const SAM_TIMEOUT_1S: u8 = 0x14;
/// SAMConfiguration: signal through the IRQ pin
pub const SAM_USE_IRQ: u8 = 0x01;

pub fn sam_configuration_params() -> [u8; 3] {
    [SAM_MODE_NORMAL, SAM_TIMEOUT_1S, SAM_USE_IRQ]
}

/// InListPassiveTarget parameters: MaxTg, BrTy
pub fn in_list_passive_target_params(max_targets: u8, baud: BaudProfile) -> [u8; 2] {
    [max_targets, baud.as_u8()]
}

/// Decode an InListPassiveTarget payload (markers already stripped) for a
/// single 106 kbps type A target:
/// `NbTg Tg SENS_RES(2) SEL_RES NFCIDLength NFCID1...`
///
/// Anything but exactly one target, or a UID longer than 7 bytes, is a
/// `CARD_ERROR`; a payload too short for what it declares is `MALFORMED`.
pub fn decode_single_target(payload: &[u8]) -> Result<Uid, Status> {
    let count = byte_at(payload, 0).map_err(|e| e.status())?;
    if count != 1 {
        if count > 1 {
            warn!("more than one card detected ({})", count);
        } else {
            debug!("no card in detection reply");
        }
        return Err(Status::CARD_ERROR);
    }

    let uid_len = byte_at(payload, 5).map_err(|e| e.status())? as usize;
    if uid_len > MAX_UID_LEN {
        warn!("found card with unexpectedly long UID ({} bytes)", uid_len);
        return Err(Status::CARD_ERROR);
    }

    let bytes = slice_at(payload, 6, uid_len).map_err(|e| e.status())?;
    Uid::try_from(bytes).map_err(|_| Status::CARD_ERROR)
}

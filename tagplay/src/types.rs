// tagplay/src/types.rs

use std::convert::TryFrom;
use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::constants::{MAX_UID_LEN, PN532_FIRMWARE_VERSION_LEN};

/// UID - Newtype Pattern (最大 7 バイト)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// Tag identifier: the lowercase hex encoding of a UID. This is the key
/// used by the tag catalog.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    /// Parse a configured identifier. Whitespace is ignored and the result
    /// is normalised to lowercase so `"04 A1 B2 C3"` and `"04a1b2c3"` name
    /// the same tag.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let bytes = crate::utils::parse_hex(s).map_err(|e| Error::Config(format!("tag id {s:?}: {e}")))?;
        if bytes.is_empty() {
            return Err(Error::Config("empty tag id".into()));
        }
        Ok(Self(crate::utils::bytes_to_hex(&bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Uid> for TagId {
    fn from(uid: &Uid) -> Self {
        Self(uid.to_hex())
    }
}

/// GetFirmwareVersion reply: IC, Ver, Rev, Support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

impl TryFrom<&[u8]> for FirmwareVersion {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != PN532_FIRMWARE_VERSION_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_FIRMWARE_VERSION_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            ic: bytes[0],
            version: bytes[1],
            revision: bytes[2],
            support: bytes[3],
        })
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PN5{:x} v{}.{} (support {:#04x})",
            self.ic, self.version, self.revision, self.support
        )
    }
}

/// InListPassiveTarget BrTy parameter (bit rate / modulation type)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaudProfile {
    /// 106 kbps type A (ISO/IEC14443 Type A, MIFARE)
    #[default]
    Iso14443A = 0x00,
    /// 212 kbps (FeliCa polling)
    Felica212 = 0x01,
    /// 424 kbps (FeliCa polling)
    Felica424 = 0x02,
    /// 106 kbps type B (ISO/IEC14443-3B)
    Iso14443B = 0x03,
    /// 106 kbps Innovision Jewel tag
    Jewel = 0x04,
}

impl BaudProfile {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

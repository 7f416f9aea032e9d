// tagplay/src/status.rs

//! Composable result flags returned by every framed exchange.
//!
//! A single exchange can fail in more than one way (a valid frame after a
//! corrupted ACK, for instance), so the status is a small bit set rather
//! than a closed enum. `Status::OK` is the all-clear value and callers
//! compare against it exactly, after masking whatever bits their policy
//! ignores.

use std::fmt;

use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, BitAnd, BitOr, BitAndAssign, BitOrAssign)]
pub struct Status(u8);

impl Status {
    pub const OK: Self = Self(0);
    pub const TIMEOUT: Self = Self(1 << 0);
    pub const CHECKSUM_ERROR: Self = Self(1 << 1);
    pub const MALFORMED: Self = Self(1 << 2);
    pub const ACK_ERROR: Self = Self(1 << 3);
    pub const CARD_ERROR: Self = Self(1 << 4);

    /// Every defined flag
    pub const ALL: Self = Self(0x1f);

    const NAMES: [(Self, &'static str); 5] = [
        (Self::TIMEOUT, "TIMEOUT"),
        (Self::CHECKSUM_ERROR, "CHECKSUM_ERROR"),
        (Self::MALFORMED, "MALFORMED"),
        (Self::ACK_ERROR, "ACK_ERROR"),
        (Self::CARD_ERROR, "CARD_ERROR"),
    ];

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn is_ok(self) -> bool {
        self == Self::OK
    }

    /// True when every bit of `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Clear the bits of `other`.
    pub fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Keep only the bits of `mask`.
    pub fn masked(self, mask: Self) -> Self {
        self & mask
    }

    /// A failure strictly worse than a plain timeout. Clean timeouts are what
    /// an idle reader reports, so they never count against chip health.
    pub fn is_worse_than_timeout(self) -> bool {
        !self.without(Self::TIMEOUT).is_ok()
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status({:#04x} {})", self.0, self)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return f.write_str("OK");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        let unknown = self.without(Self::ALL);
        if !unknown.is_ok() {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{:#04x}", unknown.0)?;
        }
        Ok(())
    }
}

//! Timeout helpers used across the crate.
//!
//! Every wait in the driver is bounded; these helpers centralise the default
//! values and the deadline arithmetic used by blocking reads.

use std::time::{Duration, Instant};

/// Default bound for a detection exchange when the caller doesn't provide one.
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 1000;

/// Default bound for a framed command's ACK and response.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// GetFirmwareVersion is used as a liveness probe, so it waits less.
pub const FIRMWARE_PROBE_TIMEOUT_MS: u64 = 500;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Time left until `deadline`, or `None` once it has passed.
pub fn remaining(deadline: Instant) -> Option<Duration> {
    deadline
        .checked_duration_since(Instant::now())
        .filter(|d| !d.is_zero())
}

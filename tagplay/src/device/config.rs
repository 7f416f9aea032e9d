// tagplay/src/device/config.rs

//! Driver timing configuration

use serde::{Deserialize, Serialize};

use crate::utils::timeout::{DEFAULT_READ_TIMEOUT_MS, FIRMWARE_PROBE_TIMEOUT_MS};

/// Timeouts and settle delays used by the link driver. Each wait is
/// configured on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Upper bound for the ACK after a command frame (ms)
    pub ack_timeout_ms: u64,
    /// Response bound for commands issued without an explicit timeout (ms)
    pub read_timeout_ms: u64,
    /// GetFirmwareVersion bound; this call doubles as a liveness probe (ms)
    pub firmware_timeout_ms: u64,
    /// Reset line held high before the pulse (ms)
    pub reset_high_ms: u64,
    /// Reset line held low (ms)
    pub reset_low_ms: u64,
    /// Settle time after releasing reset (ms)
    pub reset_settle_ms: u64,
    /// initialize/wake/probe rounds before giving up
    pub init_attempts: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            ack_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            firmware_timeout_ms: FIRMWARE_PROBE_TIMEOUT_MS,
            reset_high_ms: 100,
            reset_low_ms: 500,
            reset_settle_ms: 100,
            // the first probe after power-up often fails
            init_attempts: 4,
        }
    }
}

// tagplay/src/error.rs

use thiserror::Error;

use crate::status::Status;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("operation timed out")]
    Timeout,

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    /// A framed command completed with a non-OK status where the caller
    /// needed a decoded value.
    #[error("command failed: {0}")]
    Command(Status),

    #[error("cannot open serial port {port} after {attempts} attempt(s): {reason}")]
    SerialOpen {
        port: String,
        attempts: u32,
        reason: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("gpio error: {0}")]
    Gpio(String),

    #[error("unable to initialize reader after {attempts} attempt(s)")]
    DeviceInitFailure { attempts: u32 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dispatch failed: {0}")]
    Dispatch(String),
}

impl Error {
    /// Fold a transport-level error into status flags. Errors that are not
    /// transport-level map to `MALFORMED` so they still count against
    /// device health.
    pub fn status(&self) -> Status {
        match self {
            Error::Timeout => Status::TIMEOUT,
            Error::ChecksumMismatch { .. } => Status::CHECKSUM_ERROR,
            Error::Io(_) | Error::Gpio(_) | Error::SerialOpen { .. } => Status::ACK_ERROR,
            Error::Command(status) => *status,
            _ => Status::MALFORMED,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#![cfg(feature = "hardware")]

//! 共通: 実機テスト用ヘルパー
//!
//! `--features hardware` でコンパイルされる実機テスト用。PN532 HAT が
//! 接続されていない環境（CI 等）では `Ok(None)` を返す。
//! ポートとピンは TAGPLAY_PORT / TAGPLAY_RESET_PIN で上書きできる。

use tagplay::config::{DEFAULT_OPEN_ATTEMPTS, DEFAULT_RESET_PIN, DEFAULT_SERIAL_PORT};
use tagplay::constants::PN532_BAUD_RATE;
use tagplay::device::{DeviceBuilder, Pn532};
use tagplay::transport::{RpiOutputPin, SerialTransport};
use tagplay::{Error, Result};

/// Open the reader and run the reset sequence.
///
/// - Ok(Some(reader)) : リーダが見つかり初期化に成功
/// - Ok(None) : シリアルポートが無い（CI 等では許容）
/// - Err(e) : その他の致命的なエラー
pub fn open_and_reset_reader() -> Result<Option<Pn532>> {
    let port = std::env::var("TAGPLAY_PORT").unwrap_or_else(|_| DEFAULT_SERIAL_PORT.to_string());
    let reset_pin = std::env::var("TAGPLAY_RESET_PIN")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RESET_PIN);

    if !std::path::Path::new(&port).exists() {
        return Ok(None);
    }

    let mut reader = DeviceBuilder::new()
        .with_transport(Box::new(SerialTransport::new(
            port,
            PN532_BAUD_RATE,
            DEFAULT_OPEN_ATTEMPTS,
        )))
        .with_reset_pin(Box::new(RpiOutputPin::new(reset_pin)?))
        .build()?;

    match reader.reset_device() {
        Ok(_) => Ok(Some(reader)),
        Err(Error::SerialOpen { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

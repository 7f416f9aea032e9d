#![cfg(all(feature = "serial", feature = "rpi"))]

//! Reset a PN532 HAT and print its firmware version, then report one
//! detection attempt.
//!
//! Usage:
//!   cargo run -p tagplay --example firmware_probe --features serial,rpi -- [PORT] [RESET_PIN]

use tagplay::config::{DEFAULT_OPEN_ATTEMPTS, DEFAULT_RESET_PIN, DEFAULT_SERIAL_PORT};
use tagplay::constants::PN532_BAUD_RATE;
use tagplay::device::DeviceBuilder;
use tagplay::transport::{RpiOutputPin, SerialTransport};
use tagplay::{BaudProfile, Result};

fn main() -> Result<()> {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .try_init();

    let mut args = std::env::args().skip(1);
    let port = args.next().unwrap_or_else(|| DEFAULT_SERIAL_PORT.to_string());
    let reset_pin = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RESET_PIN);

    let mut reader = DeviceBuilder::new()
        .with_transport(Box::new(SerialTransport::new(
            port.clone(),
            PN532_BAUD_RATE,
            DEFAULT_OPEN_ATTEMPTS,
        )))
        .with_reset_pin(Box::new(RpiOutputPin::new(reset_pin)?))
        .build()?;

    let fw = reader.reset_device()?;
    println!("{} on {}", fw, port);

    println!("Place a tag on the reader...");
    let (status, uid) = reader.detect_tag(BaudProfile::Iso14443A, 3000);
    match uid {
        Some(uid) => println!("Detected tag {} ({} bytes)", uid.to_hex(), uid.len()),
        None => println!("No tag: {}", status),
    }

    reader.shutdown();
    Ok(())
}

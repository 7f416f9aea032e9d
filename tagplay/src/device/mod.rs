// tagplay/src/device/mod.rs

//! PN532 link driver: framed command exchange, reset and wake sequencing,
//! firmware probe and tag detection.

pub mod builder;
pub mod commands;
pub mod config;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::DriverConfig;
pub use handle::Pn532;

// tagplay/src/config.rs

//! JSON application configuration.
//!
//! Only `tags` is required. Every other section falls back to the values a
//! PN532 HAT on a Raspberry Pi UART needs.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::TagCatalog;
use crate::constants::PN532_BAUD_RATE;
use crate::device::DriverConfig;
use crate::poller::{
    DEFAULT_HEALTH_THRESHOLD, DEFAULT_HEALTH_WINDOW, PollerConfig, UnknownTagPolicy,
};
use crate::types::BaudProfile;
use crate::utils::timeout::DEFAULT_POLL_TIMEOUT_MS;
use crate::{Error, Result};

pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyS0";
pub const DEFAULT_RESET_PIN: u8 = 20;
pub const DEFAULT_IRQ_PIN: u8 = 16;
pub const DEFAULT_OPEN_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub tags: TagCatalog,
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub reader: ReaderConfig,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Sleep between polls, in seconds
    pub polling_delay_secs: f64,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            polling_delay_secs: 1.0,
        }
    }
}

/// Serial line, GPIO lines and detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub port: String,
    pub baudrate: u32,
    pub open_attempts: u32,
    /// BCM number of the reset line
    pub reset_pin: u8,
    /// BCM number of the IRQ line; `null` when not wired
    pub irq_pin: Option<u8>,
    pub poll_timeout_ms: u64,
    pub baud_profile: BaudProfile,
    pub timing: DriverConfig,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERIAL_PORT.to_string(),
            baudrate: PN532_BAUD_RATE,
            open_attempts: DEFAULT_OPEN_ATTEMPTS,
            reset_pin: DEFAULT_RESET_PIN,
            irq_pin: Some(DEFAULT_IRQ_PIN),
            poll_timeout_ms: DEFAULT_POLL_TIMEOUT_MS,
            baud_profile: BaudProfile::default(),
            timing: DriverConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    pub window: usize,
    pub threshold: f64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_HEALTH_WINDOW,
            threshold: DEFAULT_HEALTH_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Status bits that must be clear for a detection to dispatch
    pub status_mask: u8,
    /// Whether an unknown tag suppresses its own repeat warnings
    pub remember_unknown: bool,
    /// External player: program followed by leading arguments. Empty logs
    /// requests instead.
    pub command: Vec<String>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            status_mask: 0xff,
            remember_unknown: true,
            command: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Range checks serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let delay = self.sound.polling_delay_secs;
        if !delay.is_finite() || delay < 0.0 {
            return Err(Error::Config(format!(
                "polling_delay_secs must be a non-negative number, got {}",
                delay
            )));
        }
        if self.health.window == 0 {
            return Err(Error::Config("health window must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.health.threshold) {
            return Err(Error::Config(format!(
                "health threshold must be within 0..=1, got {}",
                self.health.threshold
            )));
        }
        if self.reader.poll_timeout_ms == 0 {
            return Err(Error::Config("poll_timeout_ms must be positive".into()));
        }
        if self.reader.timing.init_attempts == 0 {
            return Err(Error::Config("init_attempts must be positive".into()));
        }
        Ok(())
    }

    pub fn poll_delay(&self) -> Duration {
        Duration::from_secs_f64(self.sound.polling_delay_secs)
    }

    pub fn poller_config(&self) -> PollerConfig {
        PollerConfig {
            poll_timeout_ms: self.reader.poll_timeout_ms,
            poll_delay: self.poll_delay(),
            health_window: self.health.window,
            health_threshold: self.health.threshold,
            status_mask: self.dispatch.status_mask,
            unknown_tag: if self.dispatch.remember_unknown {
                UnknownTagPolicy::Remember
            } else {
                UnknownTagPolicy::Forget
            },
            baud: self.reader.baud_profile,
        }
    }
}

// tagplay/src/prelude.rs

pub use crate::catalog::{CatalogItem, ItemKind, ItemUri, TagCatalog, TagEntry};
pub use crate::config::AppConfig;
pub use crate::device::{DeviceBuilder, DriverConfig, Pn532};
pub use crate::playback::{CommandDispatcher, LogDispatcher, PlaybackRequest};
pub use crate::poller::{CycleOutcome, Dispatcher, Poller, PollerConfig, UnknownTagPolicy};
pub use crate::transport::{Delay, DigitalInput, DigitalOutput, ReadPolicy, StdDelay, Transport};
pub use crate::{BaudProfile, Error, FirmwareVersion, Result, Status, TagId, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};

// tagplay/src/lib.rs

//! tagplay
//!
//! PN532 NFC reader driver over a UART link and a tag polling loop that
//! maps presented tags to playback actions.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod playback;
pub mod poller;
pub mod prelude;
pub mod protocol;
pub mod status;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::status::Status;
pub use crate::types::*;

pub use prelude::*;

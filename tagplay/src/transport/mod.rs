// tagplay/src/transport/mod.rs

#[cfg(feature = "rpi")]
pub mod gpio;
pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

#[cfg(feature = "rpi")]
pub use gpio::{RpiInputPin, RpiOutputPin};
pub use mock::{MockDelay, MockPin, MockTransport};
#[cfg(feature = "serial")]
pub use serial::SerialTransport;
pub use traits::{Delay, DigitalInput, DigitalOutput, ReadPolicy, StdDelay, Transport};

// tagplay/src/transport/traits.rs

use std::time::Duration;

use crate::Result;

/// How many bytes a read must collect before it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPolicy {
    /// Exactly the requested count, or `Error::Timeout`.
    Exact,
    /// At least one byte and at most the requested count. Used where the
    /// reply length varies (a detection reply depends on the UID size) and
    /// waiting for the full count would always run into the deadline.
    UpTo,
}

/// Byte stream to the reader chip. Abstracts the UART away from the
/// protocol logic so the driver can run against a simulated chip.
pub trait Transport: Send {
    /// Open the channel. Reusing an already-open channel is a no-op.
    fn open(&mut self) -> Result<()> {
        Ok(())
    }

    /// Release the channel. The default does nothing.
    fn close(&mut self) {}

    /// Send raw bytes to the chip
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive up to `len` bytes, bounded by `timeout_ms`. Returns
    /// `Error::Timeout` when the policy could not be satisfied in time.
    fn receive(&mut self, len: usize, policy: ReadPolicy, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Drop any bytes already waiting in the receive buffer.
    fn clear_input(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Digital output line (the reader's reset pin).
pub trait DigitalOutput: Send {
    fn set_high(&mut self) -> Result<()>;
    fn set_low(&mut self) -> Result<()>;
}

/// Digital input line (the reader's IRQ pin).
pub trait DigitalInput: Send {
    fn is_high(&self) -> Result<bool>;
}

/// Blocking delay provider. Hardware settle times and the inter-poll sleep
/// go through this so tests can record them instead of sleeping.
pub trait Delay: Send {
    fn delay(&mut self, duration: Duration);
}

/// `Delay` backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl Delay for StdDelay {
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

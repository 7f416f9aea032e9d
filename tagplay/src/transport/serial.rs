// tagplay/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{Read, Write};
use std::time::{Duration, Instant};

use log::{debug, warn};
use serialport::{ClearBuffer, SerialPort};

use crate::transport::traits::{Delay, ReadPolicy, StdDelay, Transport};
use crate::utils::{ms, remaining};
use crate::{Error, Result};

/// Once a best-effort read has some bytes, a gap this long ends it.
const INTER_BYTE_GAP: Duration = Duration::from_millis(20);

/// Default pause between failed open attempts
pub const DEFAULT_OPEN_RETRY_DELAY: Duration = Duration::from_millis(250);

/// UART transport to a PN532 in HSU mode. The port is opened lazily and
/// kept for the life of the transport; `open()` on an open port is a no-op.
pub struct SerialTransport {
    path: String,
    baud_rate: u32,
    open_attempts: u32,
    retry_delay: Duration,
    delay: Box<dyn Delay>,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialTransport {
    pub fn new(path: impl Into<String>, baud_rate: u32, open_attempts: u32) -> Self {
        Self {
            path: path.into(),
            baud_rate,
            open_attempts: open_attempts.max(1),
            retry_delay: DEFAULT_OPEN_RETRY_DELAY,
            delay: Box::new(StdDelay),
            port: None,
        }
    }

    /// Pause between failed open attempts, taken through `delay`.
    pub fn with_retry_delay(mut self, retry_delay: Duration, delay: Box<dyn Delay>) -> Self {
        self.retry_delay = retry_delay;
        self.delay = delay;
        self
    }

    pub fn is_open(&self) -> bool {
        self.port.is_some()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn port(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.open()?;
        self.port
            .as_mut()
            .ok_or_else(|| Error::FrameFormat("serial port not open".into()))
    }
}

fn serial_error(err: serialport::Error) -> Error {
    Error::Io(err.into())
}

/// Deadline-bounded read loop. `set_timeout` re-arms the port's read
/// timeout before every chunk.
fn read_until<R, F>(
    port: &mut R,
    len: usize,
    policy: ReadPolicy,
    deadline: Instant,
    mut set_timeout: F,
) -> Result<Vec<u8>>
where
    R: Read + ?Sized,
    F: FnMut(&mut R, Duration) -> Result<()>,
{
    let mut out = Vec::with_capacity(len);
    let mut chunk = [0u8; 64];

    while out.len() < len {
        let Some(mut wait) = remaining(deadline) else {
            break;
        };
        let best_effort = policy == ReadPolicy::UpTo && !out.is_empty();
        if best_effort {
            wait = wait.min(INTER_BYTE_GAP);
        }
        set_timeout(port, wait)?;

        let want = (len - out.len()).min(chunk.len());
        match port.read(&mut chunk[..want]) {
            // end of stream: nothing more will arrive before the deadline
            Ok(0) => break,
            Ok(n) => out.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                if best_effort {
                    break;
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    match policy {
        ReadPolicy::Exact if out.len() < len => Err(Error::Timeout),
        ReadPolicy::UpTo if out.is_empty() => Err(Error::Timeout),
        _ => Ok(out),
    }
}

impl Transport for SerialTransport {
    fn open(&mut self) -> Result<()> {
        if self.port.is_some() {
            return Ok(());
        }

        let mut reason = String::new();
        for attempt in 1..=self.open_attempts {
            match serialport::new(&self.path, self.baud_rate)
                .timeout(ms(100))
                .open()
            {
                Ok(port) => {
                    debug!("opened {} at {} baud", self.path, self.baud_rate);
                    self.port = Some(port);
                    return Ok(());
                }
                Err(e) => {
                    warn!("cannot open {} (attempt {}): {}", self.path, attempt, e);
                    reason = e.to_string();
                    if attempt < self.open_attempts {
                        self.delay.delay(self.retry_delay);
                    }
                }
            }
        }

        Err(Error::SerialOpen {
            port: self.path.clone(),
            attempts: self.open_attempts,
            reason,
        })
    }

    fn close(&mut self) {
        if self.port.take().is_some() {
            debug!("closed {}", self.path);
        }
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port()?;
        port.write_all(data)?;
        port.flush()?;
        Ok(())
    }

    fn receive(&mut self, len: usize, policy: ReadPolicy, timeout_ms: u64) -> Result<Vec<u8>> {
        let deadline = Instant::now() + ms(timeout_ms);
        let port = self.port()?;
        read_until(port, len, policy, deadline, |port, wait| {
            port.set_timeout(wait).map_err(serial_error)
        })
    }

    fn clear_input(&mut self) -> Result<()> {
        self.port()?
            .clear(ClearBuffer::Input)
            .map_err(serial_error)
    }
}

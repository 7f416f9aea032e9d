// tagplay/src/transport/mock.rs

//! In-memory stand-ins for the reader hardware.
//!
//! `MockTransport` behaves like a chip that answers framed commands: every
//! write that starts with the frame preamble releases the next scripted
//! reply into the receive buffer. Raw writes (the wake-up sequence) get no
//! reply. Handles are cheap clones over shared state so a test can keep one
//! while the driver owns another.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::constants::PN532_PREAMBLE;
use crate::transport::traits::{Delay, DigitalInput, DigitalOutput, ReadPolicy, Transport};
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<Vec<u8>>,
    replies: VecDeque<Vec<u8>>,
    rx: VecDeque<u8>,
    open_calls: usize,
    close_calls: usize,
    /// Testing hook: number of subsequent sends that fail with an I/O error
    send_failures: usize,
}

/// Scripted byte stream for unit and integration tests.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue the bytes the chip sends back after the next framed command.
    pub fn push_reply(&self, reply: Vec<u8>) {
        self.lock().replies.push_back(reply);
    }

    /// Queue a reply of nothing: the next framed command times out.
    pub fn push_silence(&self) {
        self.push_reply(Vec::new());
    }

    /// Put bytes straight into the receive buffer.
    pub fn inject_rx(&self, bytes: &[u8]) {
        self.lock().rx.extend(bytes.iter().copied());
    }

    /// Set how many subsequent sends should fail (for tests).
    pub fn set_send_failures(&self, n: usize) {
        self.lock().send_failures = n;
    }

    /// Every write so far, in order.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.lock().sent.clone()
    }

    /// Writes that carried a framed command.
    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.lock()
            .sent
            .iter()
            .filter(|s| s.starts_with(&PN532_PREAMBLE))
            .cloned()
            .collect()
    }

    pub fn pending_replies(&self) -> usize {
        self.lock().replies.len()
    }

    pub fn open_calls(&self) -> usize {
        self.lock().open_calls
    }

    pub fn close_calls(&self) -> usize {
        self.lock().close_calls
    }
}

impl Transport for MockTransport {
    fn open(&mut self) -> Result<()> {
        self.lock().open_calls += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.lock().close_calls += 1;
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut st = self.lock();
        if st.send_failures > 0 {
            st.send_failures -= 1;
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock send failure",
            )));
        }
        st.sent.push(data.to_vec());
        if data.starts_with(&PN532_PREAMBLE) {
            if let Some(reply) = st.replies.pop_front() {
                st.rx.extend(reply);
            }
        }
        Ok(())
    }

    fn receive(&mut self, len: usize, policy: ReadPolicy, _timeout_ms: u64) -> Result<Vec<u8>> {
        let mut st = self.lock();
        let take = match policy {
            ReadPolicy::Exact if st.rx.len() >= len => len,
            ReadPolicy::Exact => {
                // A real port would hand back whatever arrived before the
                // deadline; the partial read is consumed either way.
                st.rx.clear();
                return Err(Error::Timeout);
            }
            ReadPolicy::UpTo if st.rx.is_empty() => return Err(Error::Timeout),
            ReadPolicy::UpTo => len.min(st.rx.len()),
        };
        Ok(st.rx.drain(..take).collect())
    }

    fn clear_input(&mut self) -> Result<()> {
        self.lock().rx.clear();
        Ok(())
    }
}

/// Recording GPIO line, usable as both output and input.
#[derive(Debug, Clone, Default)]
pub struct MockPin {
    levels: Arc<Mutex<Vec<bool>>>,
}

impl MockPin {
    pub fn new(initial_high: bool) -> Self {
        Self {
            levels: Arc::new(Mutex::new(vec![initial_high])),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<bool>> {
        self.levels.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Level history, initial level first.
    pub fn levels(&self) -> Vec<bool> {
        self.lock().clone()
    }

    pub fn level(&self) -> bool {
        self.lock().last().copied().unwrap_or(false)
    }
}

impl DigitalOutput for MockPin {
    fn set_high(&mut self) -> Result<()> {
        self.lock().push(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.lock().push(false);
        Ok(())
    }
}

impl DigitalInput for MockPin {
    fn is_high(&self) -> Result<bool> {
        Ok(self.level())
    }
}

/// Delay that records requested durations instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    calls: Arc<Mutex<Vec<Duration>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Duration>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn calls(&self) -> Vec<Duration> {
        self.lock().clone()
    }

    pub fn total(&self) -> Duration {
        self.lock().iter().sum()
    }
}

impl Delay for MockDelay {
    fn delay(&mut self, duration: Duration) {
        self.lock().push(duration);
    }
}

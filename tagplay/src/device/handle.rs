// tagplay/src/device/handle.rs

use std::time::Duration;

use log::{debug, error, info, warn};

use crate::constants::{
    PN532_ACK, PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_INLIST_PASSIVE_TARGET,
    PN532_CMD_SAM_CONFIGURATION, PN532_FIRMWARE_VERSION_LEN, PN532_FRAME_OVERHEAD,
    PN532_INLIST_RESPONSE_LEN, PN532_WAKEUP,
};
use crate::device::commands;
use crate::device::config::DriverConfig;
use crate::protocol::codec::encode_command_frame;
use crate::protocol::frame::{Frame, check_ack};
use crate::protocol::parser::strip_response_header;
use crate::status::Status;
use crate::transport::{Delay, DigitalInput, DigitalOutput, ReadPolicy, Transport};
use crate::types::{BaudProfile, FirmwareVersion, Uid};
use crate::utils::{bytes_to_hex_spaced, ms};
use crate::{Error, Result};

/// PN532 link driver.
///
/// Owns the byte stream and the reset/IRQ lines for the process lifetime.
/// Exchanges are strictly sequential: the chip's protocol is not pipelined,
/// so every method takes `&mut self`.
pub struct Pn532 {
    transport: Box<dyn Transport>,
    reset: Box<dyn DigitalOutput>,
    irq: Option<Box<dyn DigitalInput>>,
    delay: Box<dyn Delay>,
    config: DriverConfig,
}

impl Pn532 {
    pub fn new(
        transport: Box<dyn Transport>,
        reset: Box<dyn DigitalOutput>,
        delay: Box<dyn Delay>,
    ) -> Self {
        Self {
            transport,
            reset,
            irq: None,
            delay,
            config: DriverConfig::default(),
        }
    }

    pub fn with_irq(mut self, irq: Box<dyn DigitalInput>) -> Self {
        self.irq = Some(irq);
        self
    }

    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// IRQ line level, when one is wired. The PN532 pulls IRQ low when a
    /// reply is ready. Not used for polling.
    pub fn irq_asserted(&self) -> Option<Result<bool>> {
        self.irq.as_ref().map(|irq| irq.is_high().map(|high| !high))
    }

    /// Block for `duration` through the driver's delay provider.
    pub fn sleep(&mut self, duration: Duration) {
        self.delay.delay(duration);
    }

    /// Pulse the reset line and open the serial channel.
    ///
    /// high, settle, low, hold, high, settle. The channel is reused when it
    /// is already open.
    pub fn initialize(&mut self) -> Result<()> {
        self.reset.set_high()?;
        self.delay.delay(ms(self.config.reset_high_ms));
        self.reset.set_low()?;
        self.delay.delay(ms(self.config.reset_low_ms));
        self.reset.set_high()?;
        self.delay.delay(ms(self.config.reset_settle_ms));

        self.transport.open()
    }

    /// Write the HSU wake-up sequence, then configure the SAM for card
    /// reading. The wake-up bytes bypass framing since the chip is not
    /// listening for frames yet.
    pub fn wake(&mut self) -> Status {
        if let Err(e) = self.transport.send(&PN532_WAKEUP) {
            warn!("wake-up write failed: {}", e);
            return e.status();
        }
        self.configure_for_card_reading()
    }

    /// SAMConfiguration: normal mode, 1 s timeout, IRQ signalling. Only the
    /// handshake result matters.
    pub fn configure_for_card_reading(&mut self) -> Status {
        let params = commands::sam_configuration_params();
        let (status, _) = self.send_command(
            PN532_CMD_SAM_CONFIGURATION,
            0,
            &params,
            self.config.read_timeout_ms,
            ReadPolicy::Exact,
        );
        if !status.is_ok() {
            debug!("SAM configuration: {}", status);
        }
        status
    }

    /// GetFirmwareVersion with the short probe timeout.
    pub fn get_firmware_version(&mut self) -> Result<FirmwareVersion> {
        let (status, payload) = self.send_command(
            PN532_CMD_GET_FIRMWARE_VERSION,
            PN532_FIRMWARE_VERSION_LEN,
            &[],
            self.config.firmware_timeout_ms,
            ReadPolicy::Exact,
        );
        if !status.is_ok() {
            return Err(Error::Command(status));
        }
        FirmwareVersion::try_from(payload.as_slice())
    }

    /// Full recovery: initialize, wake, and probe the firmware version, up
    /// to `init_attempts` times. A serial port that cannot be opened ends
    /// the sequence at once. Exhausting the budget closes the channel and
    /// returns `DeviceInitFailure`.
    pub fn reset_device(&mut self) -> Result<FirmwareVersion> {
        let attempts = self.config.init_attempts.max(1);
        for attempt in 1..=attempts {
            match self.initialize() {
                Ok(()) => {}
                Err(e @ Error::SerialOpen { .. }) => {
                    error!("{}", e);
                    return Err(e);
                }
                Err(e) => {
                    warn!("reader initialization failed (attempt {}): {}", attempt, e);
                    continue;
                }
            }

            let wake = self.wake();
            match self.get_firmware_version() {
                Ok(fw) => {
                    info!("reader ready: {}", fw);
                    return Ok(fw);
                }
                Err(e) => {
                    warn!(
                        "firmware probe failed (attempt {}, wake {}): {}",
                        attempt, wake, e
                    );
                }
            }
        }

        error!("unable to connect to reader after {} attempt(s)", attempts);
        self.transport.close();
        Err(Error::DeviceInitFailure { attempts })
    }

    /// Frame and send one command, check the ACK, then read and validate the
    /// response frame.
    ///
    /// The response is read as `response_len + 2` data bytes (the two
    /// marker bytes) plus framing, using `policy`. On `Status::OK` the
    /// returned bytes are the payload with the markers stripped. On failure
    /// they are whatever is useful for diagnostics: the raw frame when it
    /// did not decode, the decoded data region otherwise.
    pub fn send_command(
        &mut self,
        opcode: u8,
        response_len: usize,
        params: &[u8],
        timeout_ms: u64,
        policy: ReadPolicy,
    ) -> (Status, Vec<u8>) {
        let frame = match encode_command_frame(opcode, params) {
            Ok(f) => f,
            Err(e) => {
                warn!("cannot frame command {:#04x}: {}", opcode, e);
                return (e.status(), Vec::new());
            }
        };

        // Stale bytes from an earlier timed-out exchange must not be taken
        // for this command's ACK.
        if let Err(e) = self.transport.clear_input() {
            debug!("clear input failed: {}", e);
        }

        debug!("-> {}", bytes_to_hex_spaced(&frame));
        if let Err(e) = self.transport.send(&frame) {
            warn!("command {:#04x} write failed: {}", opcode, e);
            return (e.status(), Vec::new());
        }

        let ack_timeout = self.config.ack_timeout_ms.min(timeout_ms);
        let ack = match self
            .transport
            .receive(PN532_ACK.len(), ReadPolicy::Exact, ack_timeout)
        {
            Ok(ack) => ack,
            Err(e) => return (e.status() | Status::ACK_ERROR, Vec::new()),
        };
        let ack_status = check_ack(&ack);
        if !ack_status.is_ok() {
            debug!("unexpected ACK: {}", bytes_to_hex_spaced(&ack));
        }

        let raw = match self.transport.receive(
            response_len + 2 + PN532_FRAME_OVERHEAD,
            policy,
            timeout_ms,
        ) {
            Ok(raw) => raw,
            Err(e) => return (e.status() | ack_status, Vec::new()),
        };
        debug!("<- {}", bytes_to_hex_spaced(&raw));

        let data = match Frame::decode(&raw) {
            Ok(data) => data,
            Err(e) => {
                debug!("response to {:#04x} rejected: {}", opcode, e);
                return (e.status() | ack_status, raw);
            }
        };

        match strip_response_header(&data, opcode) {
            Ok(payload) if ack_status.is_ok() => (Status::OK, payload.to_vec()),
            Ok(_) => (ack_status, data),
            Err(e) => {
                debug!("unexpected response to {:#04x}: {}", opcode, e);
                (ack_status | Status::MALFORMED, data)
            }
        }
    }

    /// InListPassiveTarget for one target. The reply length depends on the
    /// UID size, so it is read best-effort.
    ///
    /// A bad ACK in front of an intact response frame still yields the UID,
    /// with `ACK_ERROR` left in the status: whether that counts as a
    /// detection is the caller's status mask to decide.
    pub fn detect_tag(&mut self, baud: BaudProfile, timeout_ms: u64) -> (Status, Option<Uid>) {
        let params = commands::in_list_passive_target_params(1, baud);
        let (status, data) = self.send_command(
            PN532_CMD_INLIST_PASSIVE_TARGET,
            PN532_INLIST_RESPONSE_LEN,
            &params,
            timeout_ms,
            ReadPolicy::UpTo,
        );

        let payload = if status.is_ok() {
            data
        } else if status == Status::ACK_ERROR {
            // send_command leaves the markers on when the ACK was off
            match strip_response_header(&data, PN532_CMD_INLIST_PASSIVE_TARGET) {
                Ok(payload) => payload.to_vec(),
                Err(e) => return (status | e.status(), None),
            }
        } else {
            return (status, None);
        };

        match commands::decode_single_target(&payload) {
            Ok(uid) => (status, Some(uid)),
            Err(err) => (status | err, None),
        }
    }

    /// Close the serial channel. The driver can be brought back with
    /// `reset_device`.
    pub fn shutdown(&mut self) {
        self.transport.close();
    }
}

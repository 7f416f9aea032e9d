// tagplay/src/device/builder.rs

use crate::device::config::DriverConfig;
use crate::device::handle::Pn532;
use crate::transport::{Delay, DigitalInput, DigitalOutput, StdDelay, Transport};
use crate::{Error, Result};

/// Helper to construct a `Pn532` from its capabilities.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    reset: Option<Box<dyn DigitalOutput>>,
    irq: Option<Box<dyn DigitalInput>>,
    delay: Option<Box<dyn Delay>>,
    config: DriverConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_reset_pin(mut self, pin: Box<dyn DigitalOutput>) -> Self {
        self.reset = Some(pin);
        self
    }

    pub fn with_irq_pin(mut self, pin: Box<dyn DigitalInput>) -> Self {
        self.irq = Some(pin);
        self
    }

    /// Defaults to `StdDelay`.
    pub fn with_delay(mut self, delay: Box<dyn Delay>) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. The transport and the reset line are required.
    /// Nothing is opened or pulsed until `initialize`/`reset_device`.
    pub fn build(self) -> Result<Pn532> {
        let transport = self
            .transport
            .ok_or_else(|| Error::Config("no transport provided".into()))?;
        let reset = self
            .reset
            .ok_or_else(|| Error::Config("no reset pin provided".into()))?;
        let delay = self.delay.unwrap_or_else(|| Box::new(StdDelay));

        let mut reader = Pn532::new(transport, reset, delay).with_config(self.config);
        if let Some(irq) = self.irq {
            reader = reader.with_irq(irq);
        }
        Ok(reader)
    }
}

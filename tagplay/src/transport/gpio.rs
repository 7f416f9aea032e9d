// tagplay/src/transport/gpio.rs

#![cfg(feature = "rpi")]

//! Raspberry Pi GPIO lines for the reader's reset and IRQ pins.

use rppal::gpio::{Gpio, InputPin, OutputPin};

use crate::transport::traits::{DigitalInput, DigitalOutput};
use crate::{Error, Result};

fn gpio_error(err: rppal::gpio::Error) -> Error {
    Error::Gpio(err.to_string())
}

/// Reset line. Driven high on acquisition so the chip is out of reset.
pub struct RpiOutputPin(OutputPin);

impl RpiOutputPin {
    pub fn new(bcm_pin: u8) -> Result<Self> {
        let mut pin = Gpio::new()
            .map_err(gpio_error)?
            .get(bcm_pin)
            .map_err(gpio_error)?
            .into_output_high();
        // Leave the chip powered when the process exits.
        pin.set_reset_on_drop(false);
        Ok(Self(pin))
    }
}

impl DigitalOutput for RpiOutputPin {
    fn set_high(&mut self) -> Result<()> {
        self.0.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.0.set_low();
        Ok(())
    }
}

/// IRQ line (active low on the PN532).
pub struct RpiInputPin(InputPin);

impl RpiInputPin {
    pub fn new(bcm_pin: u8) -> Result<Self> {
        let pin = Gpio::new()
            .map_err(gpio_error)?
            .get(bcm_pin)
            .map_err(gpio_error)?
            .into_input();
        Ok(Self(pin))
    }
}

impl DigitalInput for RpiInputPin {
    fn is_high(&self) -> Result<bool> {
        Ok(self.0.is_high())
    }
}

//! RP2040 GPIO implementation
//!
//! This module provides GPIO support for RP2040 using `embassy_rp::gpio::Flex`.

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};
use embassy_rp::gpio::{Flex, Pull};

/// RP2040 GPIO implementation
///
/// Wraps a flexible embassy-rp pin so the direction can be changed at runtime.
/// The pin starts as an input, as after `gpio_init` in the Pico SDK.
pub struct Rp2040Gpio {
    pin: Flex<'static>,
    mode: GpioMode,
}

impl Rp2040Gpio {
    /// Create a new RP2040 GPIO instance in input mode
    ///
    /// # Arguments
    ///
    /// * `pin` - The embassy-rp flexible pin
    pub fn new(mut pin: Flex<'static>) -> Self {
        pin.set_pull(Pull::None);
        pin.set_as_input();
        Self {
            pin,
            mode: GpioMode::Input,
        }
    }

    fn ensure_output(&self) -> Result<()> {
        if self.mode.is_output() {
            Ok(())
        } else {
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        }
    }
}

impl GpioInterface for Rp2040Gpio {
    fn set_high(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.pin.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.pin.set_low();
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        self.ensure_output()?;
        self.pin.toggle();
        Ok(())
    }

    fn read(&self) -> bool {
        if self.mode.is_output() {
            self.pin.is_set_high()
        } else {
            self.pin.is_high()
        }
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        match mode {
            GpioMode::Input => {
                self.pin.set_pull(Pull::None);
                self.pin.set_as_input();
            }
            GpioMode::OutputPushPull => {
                self.pin.set_pull(Pull::None);
                self.pin.set_as_output();
            }
            // SIO outputs are push-pull only
            GpioMode::OutputOpenDrain => {
                return Err(PlatformError::Gpio(GpioError::InvalidMode));
            }
        }
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

//! RP2040 Platform implementation

use super::{Rp2040Console, Rp2040Gpio, Rp2040Timer, CONSOLE_BAUD_RATE};
use crate::platform::{
    error::{GpioError, PlatformError},
    traits::Platform,
    Result, DEFAULT_LED_PIN, MAX_GPIO,
};
use embassy_rp::gpio::Flex;
use embassy_rp::peripherals::{PIN_0, PIN_25, UART0};
use embassy_rp::uart::{self, UartTx};
use embassy_rp::Peripherals;

/// RP2040 Platform implementation
///
/// Claims the peripherals the bring-up loop needs from `embassy_rp::init`
/// and hands each of them out once.
pub struct Rp2040Platform {
    led: Option<PIN_25>,
    uart: Option<(UART0, PIN_0)>,
    timer_taken: bool,
}

impl Rp2040Platform {
    /// Create the platform from the initialized peripherals
    pub fn new(p: Peripherals) -> Self {
        Self {
            led: Some(p.PIN_25),
            uart: Some((p.UART0, p.PIN_0)),
            timer_taken: false,
        }
    }
}

impl Platform for Rp2040Platform {
    type Gpio = Rp2040Gpio;
    type Timer = Rp2040Timer;
    type Console = Rp2040Console;

    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio> {
        if pin > MAX_GPIO {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }
        // Only the LED pin is claimed from the peripherals
        if pin != DEFAULT_LED_PIN {
            return Err(PlatformError::ResourceUnavailable);
        }
        let led = self.led.take().ok_or(PlatformError::ResourceUnavailable)?;
        Ok(Rp2040Gpio::new(Flex::new(led)))
    }

    fn create_timer(&mut self) -> Result<Self::Timer> {
        if self.timer_taken {
            return Err(PlatformError::ResourceUnavailable);
        }
        self.timer_taken = true;
        Ok(Rp2040Timer::new())
    }

    fn create_console(&mut self) -> Result<Self::Console> {
        let (uart0, tx_pin) = self.uart.take().ok_or(PlatformError::ResourceUnavailable)?;

        let mut config = uart::Config::default();
        config.baudrate = CONSOLE_BAUD_RATE;

        crate::log_debug!("console on UART0 at {} baud", CONSOLE_BAUD_RATE);
        Ok(Rp2040Console::new(UartTx::new_blocking(uart0, tx_pin, config)))
    }
}

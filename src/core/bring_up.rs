//! Bring-up loop
//!
//! Initializes the console and the LED pin, then blinks the LED forever:
//!
//! ```text
//!        ┌─────┐     ┌─────┐     ┌───
//! LED    │     │     │     │     │
//!   ─────┘     └─────┘     └─────┘
//!        0    500  1000  1500  2000  ms
//! ```
//!
//! Each cycle drives the pin high, waits one half period, drives it low, waits
//! one half period and then writes the variant's heartbeat line, if any.
//! Delays are blocking; nothing else runs on the core.

use core::convert::Infallible;

use crate::core::variant::{BannerOrder, BringUpConfig};
use crate::platform::{
    traits::{ConsoleInterface, GpioInterface, GpioMode, Platform, TimerInterface},
    Result,
};

/// Running bring-up program
///
/// Owns the LED pin, the delay timer and the console taken from the platform.
pub struct BringUp<P: Platform> {
    led: P::Gpio,
    timer: P::Timer,
    console: P::Console,
    config: BringUpConfig,
    cycles: u32,
}

impl<P: Platform> BringUp<P> {
    /// Claim the console, timer and LED pin from `platform` and write the banner
    ///
    /// The console is always set up first. The banner is written before or
    /// after the LED pin setup depending on `config.banner_order`. The LED pin
    /// ends up as a push-pull output driven low.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if `config` is rejected, before
    /// any peripheral is claimed. Otherwise propagates the first platform error.
    pub fn init(platform: &mut P, config: BringUpConfig) -> Result<Self> {
        config.validate()?;

        let mut console = platform.create_console()?;
        let timer = platform.create_timer()?;

        if config.banner_order == BannerOrder::BeforePinInit {
            console.write_line(config.banner)?;
        }

        let mut led = platform.create_gpio(config.led_pin)?;
        led.set_mode(GpioMode::OutputPushPull)?;
        led.set_low()?;

        if config.banner_order == BannerOrder::AfterPinInit {
            console.write_line(config.banner)?;
        }

        crate::log_info!(
            "bring-up ready: LED on GPIO{}, {} ms per level",
            config.led_pin,
            config.half_period_ms
        );

        Ok(Self {
            led,
            timer,
            console,
            config,
            cycles: 0,
        })
    }

    /// Run one high phase, one low phase and the optional heartbeat
    pub fn cycle(&mut self) -> Result<()> {
        self.led.set_high()?;
        self.timer.delay_ms(self.config.half_period_ms)?;
        self.led.set_low()?;
        self.timer.delay_ms(self.config.half_period_ms)?;

        if let Some(heartbeat) = self.config.heartbeat {
            self.console.write_line(heartbeat)?;
        }

        self.cycles = self.cycles.wrapping_add(1);
        crate::log_trace!("cycle {} done", self.cycles);
        Ok(())
    }

    /// Blink forever
    ///
    /// Only returns if the platform reports an error, which the RP2040
    /// peripherals never do.
    pub fn run(&mut self) -> Result<Infallible> {
        loop {
            if let Err(e) = self.cycle() {
                crate::log_error!("bring-up loop stopped after {} cycles: {}", self.cycles, e);
                return Err(e);
            }
        }
    }

    /// Number of completed cycles (wraps)
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Configuration this program runs with
    pub fn config(&self) -> &BringUpConfig {
        &self.config
    }

    /// LED pin
    pub fn led(&self) -> &P::Gpio {
        &self.led
    }

    /// Delay timer
    pub fn timer(&self) -> &P::Timer {
        &self.timer
    }

    /// Console channel
    pub fn console(&self) -> &P::Console {
        &self.console
    }
}

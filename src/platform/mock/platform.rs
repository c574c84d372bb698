//! Mock Platform implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::Platform,
    Result, MAX_GPIO,
};

use super::{MockClock, MockConsole, MockGpio, MockTimer};
use std::vec::Vec;

/// Mock Platform implementation
///
/// Provides mock peripheral implementations for hardware-free testing.
/// Every peripheral handed out shares the platform's [`MockClock`].
///
/// GPIOs are handed out in input mode, as after reset on the RP2040.
///
/// # Example
///
#[cfg_attr(feature = "mock", doc = "```")]
#[cfg_attr(not(feature = "mock"), doc = "```ignore")]
/// use picocalc_blinky::platform::mock::MockPlatform;
/// use picocalc_blinky::platform::traits::{GpioInterface, GpioMode, Platform, TimerInterface};
///
/// let mut platform = MockPlatform::new();
/// let mut led = platform.create_gpio(25).unwrap();
/// let mut timer = platform.create_timer().unwrap();
///
/// led.set_mode(GpioMode::OutputPushPull).unwrap();
/// timer.delay_ms(500).unwrap();
/// led.set_high().unwrap();
/// assert_eq!(led.rising_edges(), [500_000]);
/// ```
#[derive(Debug)]
pub struct MockPlatform {
    clock: MockClock,
    horizon_ms: Option<u64>,
    gpio_allocated: Vec<u8>,
    timer_taken: bool,
    console_taken: bool,
    console_stalled: bool,
}

impl MockPlatform {
    /// Create a new mock platform
    pub fn new() -> Self {
        Self {
            clock: MockClock::new(),
            horizon_ms: None,
            gpio_allocated: Vec::new(),
            timer_taken: false,
            console_taken: false,
            console_stalled: false,
        }
    }

    /// Bound the simulated time the platform timer may reach
    ///
    /// See [`MockTimer::with_horizon_ms`].
    pub fn with_horizon_ms(mut self, ms: u64) -> Self {
        self.horizon_ms = Some(ms);
        self
    }

    /// Hand out a console that accepts no bytes
    pub fn with_stalled_console(mut self) -> Self {
        self.console_stalled = true;
        self
    }

    /// Clock shared by all peripherals of this platform
    pub fn clock(&self) -> &MockClock {
        &self.clock
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Gpio = MockGpio;
    type Timer = MockTimer;
    type Console = MockConsole;

    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio> {
        if pin > MAX_GPIO {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }
        if self.gpio_allocated.contains(&pin) {
            return Err(PlatformError::ResourceUnavailable);
        }
        self.gpio_allocated.push(pin);
        Ok(MockGpio::new_input().with_clock(self.clock.clone()))
    }

    fn create_timer(&mut self) -> Result<Self::Timer> {
        if self.timer_taken {
            return Err(PlatformError::ResourceUnavailable);
        }
        self.timer_taken = true;
        let timer = MockTimer::with_clock(self.clock.clone());
        Ok(match self.horizon_ms {
            Some(ms) => timer.with_horizon_ms(ms),
            None => timer,
        })
    }

    fn create_console(&mut self) -> Result<Self::Console> {
        if self.console_taken {
            return Err(PlatformError::ResourceUnavailable);
        }
        self.console_taken = true;
        let mut console = MockConsole::new().with_clock(self.clock.clone());
        console.set_accepting(!self.console_stalled);
        Ok(console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::traits::{ConsoleInterface, GpioInterface, GpioMode, TimerInterface};

    #[test]
    fn test_mock_platform_gpio() {
        let mut platform = MockPlatform::new();
        let mut gpio0 = platform.create_gpio(0).unwrap();
        assert_eq!(gpio0.mode(), GpioMode::Input);
        gpio0.set_mode(GpioMode::OutputPushPull).unwrap();
        gpio0.set_high().unwrap();

        // Same GPIO should not be allocatable twice
        assert_eq!(
            platform.create_gpio(0).unwrap_err(),
            PlatformError::ResourceUnavailable
        );

        // Different GPIO should work
        let _gpio1 = platform.create_gpio(1).unwrap();

        // Highest RP2040 GPIO exists, the next one does not
        assert!(platform.create_gpio(MAX_GPIO).is_ok());
        assert_eq!(
            platform.create_gpio(MAX_GPIO + 1).unwrap_err(),
            PlatformError::Gpio(GpioError::InvalidPin)
        );
    }

    #[test]
    fn test_mock_platform_single_timer_and_console() {
        let mut platform = MockPlatform::new();
        let _timer = platform.create_timer().unwrap();
        let _console = platform.create_console().unwrap();

        assert!(platform.create_timer().is_err());
        assert!(platform.create_console().is_err());
    }

    #[test]
    fn test_mock_platform_shared_clock() {
        let mut platform = MockPlatform::new();
        let mut timer = platform.create_timer().unwrap();
        let mut console = platform.create_console().unwrap();

        timer.delay_ms(1).unwrap();
        console.write_line("tick").unwrap();

        assert_eq!(platform.clock().now_us(), 1000);
        assert_eq!(console.line_times_us(), [1000]);
    }

    #[test]
    fn test_mock_platform_stalled_console() {
        let mut platform = MockPlatform::new().with_stalled_console();
        let mut console = platform.create_console().unwrap();
        assert!(console.write_line("lost").is_err());
    }

    #[test]
    fn test_mock_platform_horizon() {
        let mut platform = MockPlatform::new().with_horizon_ms(1);
        let mut timer = platform.create_timer().unwrap();

        timer.delay_ms(1).unwrap();
        assert!(timer.delay_ms(1).is_err());
    }
}

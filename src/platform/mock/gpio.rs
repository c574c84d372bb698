//! Mock GPIO implementation for testing

use super::MockClock;
use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};
use std::vec::Vec;

/// A change of the driven level, stamped with simulated time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    /// Simulated time of the change in microseconds
    pub at_us: u64,
    /// Level after the change
    pub high: bool,
}

/// Mock GPIO implementation
///
/// Tracks pin state (high/low) and mode for test verification. Every change
/// of the output level is recorded with the time of the attached clock
/// (time zero when no clock is attached).
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    initial_state: bool,
    mode: GpioMode,
    clock: Option<MockClock>,
    changes: Vec<LevelChange>,
}

impl MockGpio {
    fn with_mode(mode: GpioMode) -> Self {
        Self {
            state: false,
            initial_state: false,
            mode,
            clock: None,
            changes: Vec::new(),
        }
    }

    /// Create a new mock GPIO in output mode
    pub fn new_output() -> Self {
        Self::with_mode(GpioMode::OutputPushPull)
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self::with_mode(GpioMode::Input)
    }

    /// Timestamp level changes with `clock`
    pub fn with_clock(mut self, clock: MockClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Recorded level changes, oldest first
    pub fn changes(&self) -> &[LevelChange] {
        &self.changes
    }

    /// Times of low-to-high transitions
    pub fn rising_edges(&self) -> Vec<u64> {
        self.edge_times(true)
    }

    /// Times of high-to-low transitions
    pub fn falling_edges(&self) -> Vec<u64> {
        self.edge_times(false)
    }

    /// Driven level at simulated time `us`
    ///
    /// A change recorded at exactly `us` is already in effect.
    pub fn level_at(&self, us: u64) -> bool {
        self.changes
            .iter()
            .take_while(|change| change.at_us <= us)
            .last()
            .map_or(self.initial_state, |change| change.high)
    }

    fn edge_times(&self, high: bool) -> Vec<u64> {
        self.changes
            .iter()
            .filter(|change| change.high == high)
            .map(|change| change.at_us)
            .collect()
    }

    fn drive(&mut self, high: bool) -> Result<()> {
        if !self.mode.is_output() {
            return Err(PlatformError::Gpio(GpioError::InvalidMode));
        }
        if self.state != high {
            let at_us = self.clock.as_ref().map_or(0, MockClock::now_us);
            self.changes.push(LevelChange { at_us, high });
        }
        self.state = high;
        Ok(())
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        self.drive(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.drive(false)
    }

    fn toggle(&mut self) -> Result<()> {
        self.drive(!self.state)
    }

    fn read(&self) -> bool {
        self.state
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_output() {
        let mut gpio = MockGpio::new_output();
        assert!(!gpio.read());

        gpio.set_high().unwrap();
        assert!(gpio.read());

        gpio.set_low().unwrap();
        assert!(!gpio.read());
    }

    #[test]
    fn test_mock_gpio_toggle() {
        let mut gpio = MockGpio::new_output();

        gpio.toggle().unwrap();
        assert!(gpio.read());

        gpio.toggle().unwrap();
        assert!(!gpio.read());
    }

    #[test]
    fn test_mock_gpio_input() {
        let mut gpio = MockGpio::new_input();
        assert!(!gpio.read());

        // Input mode should not allow set_high/set_low
        assert!(gpio.set_high().is_err());
        assert!(gpio.set_low().is_err());
        assert!(gpio.toggle().is_err());
        assert!(gpio.changes().is_empty());
    }

    #[test]
    fn test_mock_gpio_mode() {
        let mut gpio = MockGpio::new_input();
        assert_eq!(gpio.mode(), GpioMode::Input);

        gpio.set_mode(GpioMode::OutputPushPull).unwrap();
        assert_eq!(gpio.mode(), GpioMode::OutputPushPull);
        assert!(gpio.set_high().is_ok());
    }

    #[test]
    fn test_mock_gpio_records_only_changes() {
        let clock = MockClock::new();
        let mut gpio = MockGpio::new_output().with_clock(clock.clone());

        gpio.set_low().unwrap();
        clock.advance_us(100);
        gpio.set_high().unwrap();
        gpio.set_high().unwrap();
        clock.advance_us(100);
        gpio.set_low().unwrap();

        assert_eq!(
            gpio.changes(),
            &[
                LevelChange { at_us: 100, high: true },
                LevelChange { at_us: 200, high: false },
            ]
        );
        assert_eq!(gpio.rising_edges(), [100]);
        assert_eq!(gpio.falling_edges(), [200]);
    }

    #[test]
    fn test_mock_gpio_level_at() {
        let clock = MockClock::new();
        let mut gpio = MockGpio::new_output().with_clock(clock.clone());

        clock.advance_us(10);
        gpio.set_high().unwrap();
        clock.advance_us(10);
        gpio.set_low().unwrap();

        assert!(!gpio.level_at(0));
        assert!(!gpio.level_at(9));
        assert!(gpio.level_at(10));
        assert!(gpio.level_at(19));
        assert!(!gpio.level_at(20));
        assert!(!gpio.level_at(1_000));
    }
}

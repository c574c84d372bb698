//! Mock Timer implementation for testing

use super::MockClock;
use crate::platform::{
    error::{PlatformError, TimerError},
    traits::TimerInterface,
    Result,
};

/// Mock Timer implementation
///
/// Uses simulated time for delays in test environment. A delay returns
/// immediately after moving the shared [`MockClock`] forward.
///
/// An optional horizon bounds how far the clock may be moved. A delay that
/// would end past it fails with `TimerError::Overflow` and leaves the clock
/// untouched, which lets tests observe a never-ending loop for a fixed time.
#[derive(Debug)]
pub struct MockTimer {
    clock: MockClock,
    horizon_us: Option<u64>,
}

impl MockTimer {
    /// Create a new mock timer with its own clock
    pub fn new() -> Self {
        Self::with_clock(MockClock::new())
    }

    /// Create a mock timer driving an existing clock
    pub fn with_clock(clock: MockClock) -> Self {
        Self {
            clock,
            horizon_us: None,
        }
    }

    /// Refuse delays that would end after `ms` milliseconds of simulated time
    pub fn with_horizon_ms(mut self, ms: u64) -> Self {
        self.horizon_us = Some(ms.saturating_mul(1000));
        self
    }

    /// Clock driven by this timer
    pub fn clock(&self) -> &MockClock {
        &self.clock
    }

    fn advance(&mut self, us: u64) -> Result<()> {
        let end = self.clock.now_us().saturating_add(us);
        if self.horizon_us.is_some_and(|horizon| end > horizon) {
            return Err(PlatformError::Timer(TimerError::Overflow));
        }
        self.clock.advance_us(us);
        Ok(())
    }
}

impl Default for MockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerInterface for MockTimer {
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.advance(u64::from(ms) * 1000)
    }

    fn now_us(&self) -> u64 {
        self.clock.now_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_timer_delay_ms() {
        let mut timer = MockTimer::new();

        timer.delay_ms(1).unwrap();
        assert_eq!(timer.now_us(), 1000);

        timer.delay_ms(5).unwrap();
        assert_eq!(timer.now_us(), 6000);
    }

    #[test]
    fn test_mock_timer_now_ms() {
        let timer = MockTimer::new();
        timer.clock().advance_us(3500);
        assert_eq!(timer.now_ms(), 3);
    }

    #[test]
    fn test_mock_timer_long_delay_ms() {
        // Past u32::MAX microseconds
        let mut timer = MockTimer::new();
        timer.delay_ms(5_000_000).unwrap();
        assert_eq!(timer.now_ms(), 5_000_000);
    }

    #[test]
    fn test_mock_timer_horizon() {
        let mut timer = MockTimer::new().with_horizon_ms(1000);

        timer.delay_ms(500).unwrap();
        timer.delay_ms(500).unwrap();
        assert_eq!(timer.now_ms(), 1000);

        assert_eq!(
            timer.delay_ms(1),
            Err(PlatformError::Timer(TimerError::Overflow))
        );
        assert_eq!(timer.now_ms(), 1000);
    }
}

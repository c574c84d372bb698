//! RP2040 Timer implementation
//!
//! This module provides blocking delays on top of the `embassy-time` driver
//! backed by the RP2040's 64-bit microsecond timer.

use crate::platform::{traits::TimerInterface, Result};
use embassy_time::{block_for, Duration, Instant};

/// RP2040 Timer implementation
///
/// Delays busy-wait on the time driver. They never yield to the executor,
/// so nothing else runs while a delay is in progress.
pub struct Rp2040Timer {
    _private: (),
}

impl Rp2040Timer {
    pub(super) fn new() -> Self {
        Self { _private: () }
    }
}

impl TimerInterface for Rp2040Timer {
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        block_for(Duration::from_millis(u64::from(ms)));
        Ok(())
    }

    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}

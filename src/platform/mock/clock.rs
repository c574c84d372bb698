//! Simulated time source shared by mock peripherals

use std::cell::Cell;
use std::rc::Rc;

/// Simulated microsecond clock
///
/// Clones share the same counter. Only [`MockTimer`](super::MockTimer) moves it
/// forward; other mocks read it to timestamp what they record.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now_us: Rc<Cell<u64>>,
}

impl MockClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in microseconds
    pub fn now_us(&self) -> u64 {
        self.now_us.get()
    }

    /// Move the clock forward by `us` microseconds
    pub fn advance_us(&self, us: u64) {
        self.now_us.set(self.now_us.get().saturating_add(us));
    }
}

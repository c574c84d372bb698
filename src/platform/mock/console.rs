//! Mock console implementation for testing

use super::MockClock;
use crate::platform::{traits::ConsoleInterface, Result};
use std::string::String;
use std::vec::Vec;

/// Mock console implementation
///
/// Captures written bytes in memory so tests can check the emitted lines.
/// When a clock is attached, the time of each line terminator is recorded.
///
/// # Example
///
#[cfg_attr(feature = "mock", doc = "```")]
#[cfg_attr(not(feature = "mock"), doc = "```ignore")]
/// use picocalc_blinky::platform::mock::MockConsole;
/// use picocalc_blinky::platform::traits::ConsoleInterface;
///
/// let mut console = MockConsole::new();
/// console.write_line("Hello").unwrap();
/// assert_eq!(console.tx_buffer(), b"Hello\r\n");
/// ```
#[derive(Debug)]
pub struct MockConsole {
    tx_buffer: Vec<u8>,
    line_times_us: Vec<u64>,
    clock: Option<MockClock>,
    accepting: bool,
    flush_count: usize,
}

impl MockConsole {
    /// Create a new mock console
    pub fn new() -> Self {
        Self {
            tx_buffer: Vec::new(),
            line_times_us: Vec::new(),
            clock: None,
            accepting: true,
            flush_count: 0,
        }
    }

    /// Timestamp line terminators with `clock`
    pub fn with_clock(mut self, clock: MockClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Stop accepting bytes (simulates a stalled channel)
    pub fn set_accepting(&mut self, accepting: bool) {
        self.accepting = accepting;
    }

    /// Get transmitted data (for test verification)
    pub fn tx_buffer(&self) -> &[u8] {
        &self.tx_buffer
    }

    /// Completed lines, without terminators
    pub fn lines(&self) -> Vec<String> {
        let text = String::from_utf8_lossy(&self.tx_buffer);
        let mut lines: Vec<String> = text
            .split('\n')
            .map(|line| line.trim_end_matches('\r').into())
            .collect();
        // Text after the last terminator is not a completed line
        lines.pop();
        lines
    }

    /// Simulated time at which each completed line was terminated
    pub fn line_times_us(&self) -> &[u64] {
        &self.line_times_us
    }

    /// Number of flush calls
    pub fn flush_count(&self) -> usize {
        self.flush_count
    }
}

impl Default for MockConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleInterface for MockConsole {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if !self.accepting {
            return Ok(0);
        }
        let now = self.clock.as_ref().map_or(0, MockClock::now_us);
        for _ in data.iter().filter(|&&byte| byte == b'\n') {
            self.line_times_us.push(now);
        }
        self.tx_buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_count += 1;
        Ok(())
    }
}

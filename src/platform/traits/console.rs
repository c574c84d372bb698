//! Console interface trait
//!
//! This module defines the write-only text channel used for status lines.

use crate::platform::{
    error::{ConsoleError, PlatformError},
    Result,
};

/// Line terminator written after every console line
///
/// Matches the CRLF translation of the Pico SDK's stdio.
pub const LINE_ENDING: &[u8] = b"\r\n";

/// Console interface trait
///
/// Platform implementations must provide this interface for text output.
///
/// # Safety Invariants
///
/// - Console must be initialized before use
/// - Only one owner per console instance
pub trait ConsoleInterface {
    /// Write bytes to the console
    ///
    /// Returns the number of bytes accepted, which may be less than `data.len()`.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Console` if the write fails.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Block until all written bytes have left the device
    fn flush(&mut self) -> Result<()>;

    /// Write all of `data`
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Console(ConsoleError::WriteFailed)` if the
    /// console stops accepting bytes.
    fn write_all(&mut self, mut data: &[u8]) -> Result<()> {
        while !data.is_empty() {
            match self.write(data)? {
                0 => return Err(PlatformError::Console(ConsoleError::WriteFailed)),
                n => data = &data[n..],
            }
        }
        Ok(())
    }

    /// Write one line followed by [`LINE_ENDING`] and flush
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.write_all(line.as_bytes())?;
        self.write_all(LINE_ENDING)?;
        self.flush()
    }
}

//! RP2040 console implementation
//!
//! The console is UART0 transmitting on GPIO0, the Pico SDK's default stdio
//! UART. The PicoCalc bridges it to the USB-C port.

use crate::platform::{
    error::{ConsoleError, PlatformError},
    traits::ConsoleInterface,
    Result,
};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{Blocking, UartTx};

/// Console baud rate (8N1)
pub const CONSOLE_BAUD_RATE: u32 = 115_200;

/// RP2040 console implementation
///
/// Wraps a blocking embassy-rp UART transmitter.
pub struct Rp2040Console {
    tx: UartTx<'static, UART0, Blocking>,
}

impl Rp2040Console {
    /// Create a new console on a configured UART transmitter
    pub fn new(tx: UartTx<'static, UART0, Blocking>) -> Self {
        Self { tx }
    }
}

impl ConsoleInterface for Rp2040Console {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.tx.blocking_write(data).map_err(|e| {
            crate::log_warn!("console write failed: {:?}", e);
            PlatformError::Console(ConsoleError::WriteFailed)
        })?;
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        self.tx
            .blocking_flush()
            .map_err(|_| PlatformError::Console(ConsoleError::WriteFailed))
    }
}

//! Root platform trait
//!
//! This module defines the root Platform trait that hands out the peripherals
//! the bring-up loop drives.

use super::{ConsoleInterface, GpioInterface, TimerInterface};
use crate::platform::Result;

/// Root platform trait
///
/// Platform implementations must provide concrete types for each peripheral interface
/// via associated types, enabling zero-cost abstractions through compile-time dispatch.
///
/// Every peripheral can be created once. The platform owns the hardware
/// until then and transfers ownership to the caller.
///
/// # Example
///
/// ```ignore
/// let p = embassy_rp::init(Default::default());
/// let mut platform = Rp2040Platform::new(p);
///
/// let mut console = platform.create_console()?;
/// console.write_line("Hello, PicoCalc!")?;
///
/// let mut led = platform.create_gpio(25)?;
/// led.set_mode(GpioMode::OutputPushPull)?;
/// ```
pub trait Platform: Sized {
    /// GPIO peripheral type
    type Gpio: GpioInterface;

    /// Timer peripheral type
    type Timer: TimerInterface;

    /// Console peripheral type
    type Console: ConsoleInterface;

    /// Create a GPIO peripheral instance
    ///
    /// # Arguments
    ///
    /// * `pin` - GPIO pin number
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidPin)` if the pin does
    /// not exist on this platform, or `PlatformError::ResourceUnavailable`
    /// if it is already in use or the platform does not hand it out.
    fn create_gpio(&mut self, pin: u8) -> Result<Self::Gpio>;

    /// Create the blocking delay timer
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the timer is already in use.
    fn create_timer(&mut self) -> Result<Self::Timer>;

    /// Create the console text channel
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the console is already in use.
    fn create_console(&mut self) -> Result<Self::Console>;
}

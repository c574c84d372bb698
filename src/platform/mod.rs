//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the bring-up loop.
//! All RP2040-specific code is isolated to the `rp2040` module.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico")]
pub mod rp2040;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

/// Board-default LED pin of the Raspberry Pi Pico (GPIO25)
pub const DEFAULT_LED_PIN: u8 = 25;

/// Highest GPIO number on the RP2040 (GPIO0..=GPIO29)
pub const MAX_GPIO: u8 = 29;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{ConsoleInterface, GpioInterface, GpioMode, Platform, TimerInterface};

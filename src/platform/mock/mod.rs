//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! All peripherals created by one [`MockPlatform`] share a [`MockClock`], so pin
//! transitions and console lines carry the simulated time at which they happened.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
#![cfg_attr(feature = "mock", doc = "```")]
#![cfg_attr(not(feature = "mock"), doc = "```ignore")]
//! use picocalc_blinky::platform::mock::MockPlatform;
//! use picocalc_blinky::platform::traits::{ConsoleInterface, Platform};
//!
//! let mut platform = MockPlatform::new();
//! let mut console = platform.create_console().unwrap();
//! console.write_line("test").unwrap();
//! assert_eq!(console.lines(), ["test"]);
//! ```

#![cfg(any(test, feature = "mock"))]

mod clock;
mod console;
mod gpio;
mod platform;
mod timer;

pub use clock::MockClock;
pub use console::MockConsole;
pub use gpio::{LevelChange, MockGpio};
pub use platform::MockPlatform;
pub use timer::MockTimer;

//! RP2040 platform implementation for the Raspberry Pi Pico in a PicoCalc
//!
//! This module provides concrete implementations of the platform abstraction
//! traits for the RP2040 microcontroller using the `embassy-rp` crate.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! picocalc_blinky = { version = "0.1", features = ["pico"] }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use picocalc_blinky::platform::rp2040::Rp2040Platform;
//! use picocalc_blinky::platform::traits::{ConsoleInterface, Platform};
//!
//! let p = embassy_rp::init(Default::default());
//! let mut platform = Rp2040Platform::new(p);
//! let mut console = platform.create_console().unwrap();
//! console.write_line("hello").unwrap();
//! ```

mod console;
mod gpio;
mod platform;
mod timer;

pub use console::{Rp2040Console, CONSOLE_BAUD_RATE};
pub use gpio::Rp2040Gpio;
pub use platform::Rp2040Platform;
pub use timer::Rp2040Timer;

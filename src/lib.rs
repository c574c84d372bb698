#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! picocalc_blinky - LED and serial bring-up for a Raspberry Pi Pico in a PicoCalc
//!
//! This library provides the platform abstraction and the bring-up loop shared by
//! the `hello_picocalc` and `pico_project` firmware binaries.

// Platform abstraction layer (RP2040 hardware and host mocks)
pub mod platform;

// Bring-up loop, variants and logging
pub mod core;

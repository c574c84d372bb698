//! Core bring-up functionality
//!
//! This module contains the bring-up loop, the two firmware variants and the
//! logging infrastructure.

pub mod bring_up;
pub mod logging;
pub mod variant;

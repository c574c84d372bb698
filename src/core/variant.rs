//! Bring-up variants
//!
//! The two firmware binaries run the same loop and differ only in the text
//! they print and in when the startup banner goes out.

use crate::platform::{PlatformError, Result, DEFAULT_LED_PIN};

/// Time the LED spends at each level
pub const HALF_PERIOD_MS: u32 = 500;

/// When the startup banner is written relative to LED pin setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico", derive(defmt::Format))]
pub enum BannerOrder {
    /// Console, banner, then LED pin
    BeforePinInit,
    /// Console, LED pin, then banner
    AfterPinInit,
}

/// Fixed parameters of one bring-up program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico", derive(defmt::Format))]
pub struct BringUpConfig {
    /// GPIO driving the LED
    pub led_pin: u8,
    /// Duration of each high and each low phase
    pub half_period_ms: u32,
    /// Line written once at startup
    pub banner: &'static str,
    /// Whether the banner precedes LED setup
    pub banner_order: BannerOrder,
    /// Line written after every completed cycle
    pub heartbeat: Option<&'static str>,
}

impl BringUpConfig {
    /// Full high-plus-low period in milliseconds
    pub const fn period_ms(&self) -> u32 {
        self.half_period_ms.saturating_mul(2)
    }

    /// Check the configuration before any hardware is claimed
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` for a zero half period.
    pub fn validate(&self) -> Result<()> {
        if self.half_period_ms == 0 {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(())
    }
}

/// `hello_picocalc`: greets the PicoCalc, then blinks silently
pub const HELLO_PICOCALC: BringUpConfig = BringUpConfig {
    led_pin: DEFAULT_LED_PIN,
    half_period_ms: HALF_PERIOD_MS,
    banner: "Hello, PicoCalc!",
    banner_order: BannerOrder::BeforePinInit,
    heartbeat: None,
};

/// `pico_project`: announces itself after LED setup and reports every cycle
pub const PICO_PROJECT: BringUpConfig = BringUpConfig {
    led_pin: DEFAULT_LED_PIN,
    half_period_ms: HALF_PERIOD_MS,
    banner: "Pico Project Started!",
    banner_order: BannerOrder::AfterPinInit,
    heartbeat: Some("LED Toggle"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_blink_at_one_hertz() {
        for config in [HELLO_PICOCALC, PICO_PROJECT] {
            assert_eq!(config.led_pin, 25);
            assert_eq!(config.period_ms(), 1000);
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_variants_differ_in_text_only() {
        assert_ne!(HELLO_PICOCALC.banner, PICO_PROJECT.banner);
        assert_eq!(HELLO_PICOCALC.heartbeat, None);
        assert_eq!(PICO_PROJECT.heartbeat, Some("LED Toggle"));
        assert_eq!(HELLO_PICOCALC.banner_order, BannerOrder::BeforePinInit);
        assert_eq!(PICO_PROJECT.banner_order, BannerOrder::AfterPinInit);
    }

    #[test]
    fn test_zero_half_period_rejected() {
        let config = BringUpConfig {
            half_period_ms: 0,
            ..HELLO_PICOCALC
        };
        assert_eq!(config.validate(), Err(PlatformError::InvalidConfig));
    }
}

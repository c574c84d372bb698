//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (pico): Uses defmt over RTT
//! - Host tests: Uses println!
//! - Host non-test: No-op
//!
//! These logs are diagnostics for a debug probe. The text the firmware itself
//! prints goes through the platform console, not through these macros.
//!
//! The active defmt level is selected at build time with `DEFMT_LOG`
//! (see `.cargo/config.toml`).

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "pico"), test))]
        println!("[INFO] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "pico"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "pico"), test))]
        println!("[WARN] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "pico"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico")]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "pico"), test))]
        eprintln!("[ERROR] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "pico"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "pico"), test))]
        println!("[DEBUG] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "pico"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "pico")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "pico"), test))]
        println!("[TRACE] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "pico"), not(test)))]
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_expand_on_host() {
        let cycle = 3u32;
        crate::log_info!("cycle {}", cycle);
        crate::log_warn!("cycle {}", cycle);
        crate::log_error!("cycle {}", cycle);
        crate::log_debug!("cycle {}", cycle);
        crate::log_trace!("cycle {}", cycle);
    }
}

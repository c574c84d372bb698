//! On-target checks for the RP2040 platform
//!
//! ```bash
//! cargo test --target thumbv6m-none-eabi --features pico --test integration
//! ```

#![no_std]
#![no_main]

use {defmt_rtt as _, panic_probe as _};

#[defmt_test::tests]
mod tests {
    use defmt::{assert, assert_eq};
    use picocalc_blinky::platform::error::{GpioError, PlatformError};
    use picocalc_blinky::platform::rp2040::{
        Rp2040Console, Rp2040Gpio, Rp2040Platform, Rp2040Timer,
    };
    use picocalc_blinky::platform::traits::{
        ConsoleInterface, GpioInterface, GpioMode, Platform, TimerInterface,
    };
    use picocalc_blinky::platform::{DEFAULT_LED_PIN, MAX_GPIO};

    struct State {
        platform: Rp2040Platform,
        led: Rp2040Gpio,
        timer: Rp2040Timer,
        console: Rp2040Console,
    }

    #[init]
    fn init() -> State {
        let p = embassy_rp::init(Default::default());
        let mut platform = Rp2040Platform::new(p);

        let led = platform.create_gpio(DEFAULT_LED_PIN).unwrap();
        let timer = platform.create_timer().unwrap();
        let console = platform.create_console().unwrap();

        State {
            platform,
            led,
            timer,
            console,
        }
    }

    #[test]
    fn led_starts_as_input(state: &mut State) {
        assert_eq!(state.led.mode(), GpioMode::Input);
        assert!(state.led.set_high().is_err());
    }

    #[test]
    fn led_drives_output(state: &mut State) {
        state.led.set_mode(GpioMode::OutputPushPull).unwrap();

        state.led.set_high().unwrap();
        assert!(state.led.read());

        state.led.toggle().unwrap();
        assert!(!state.led.read());
    }

    #[test]
    fn open_drain_not_offered(state: &mut State) {
        assert_eq!(
            state.led.set_mode(GpioMode::OutputOpenDrain),
            Err(PlatformError::Gpio(GpioError::InvalidMode))
        );
        assert_eq!(state.led.mode(), GpioMode::OutputPushPull);
    }

    #[test]
    fn delay_blocks_for_requested_time(state: &mut State) {
        let start = state.timer.now_us();
        state.timer.delay_ms(20).unwrap();
        let elapsed = state.timer.now_us() - start;

        assert!(elapsed >= 20_000);
        assert!(elapsed < 21_000);
    }

    #[test]
    fn console_accepts_line(state: &mut State) {
        state.console.write_line("integration test").unwrap();
    }

    #[test]
    fn peripherals_handed_out_once(state: &mut State) {
        assert_eq!(
            state.platform.create_gpio(DEFAULT_LED_PIN).err(),
            Some(PlatformError::ResourceUnavailable)
        );
        // GPIO2 exists but is not claimed by the platform
        assert_eq!(
            state.platform.create_gpio(2).err(),
            Some(PlatformError::ResourceUnavailable)
        );
        assert_eq!(
            state.platform.create_gpio(MAX_GPIO + 1).err(),
            Some(PlatformError::Gpio(GpioError::InvalidPin))
        );
        assert!(state.platform.create_timer().is_err());
        assert!(state.platform.create_console().is_err());
    }
}

//! PicoCalc bring-up: greeting, then a silent 1 Hz LED blink
//!
//! Prints `Hello, PicoCalc!` on UART0 before the LED pin is set up, then
//! toggles the Pico's on-board LED (GPIO25) every 500 ms forever.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --target thumbv6m-none-eabi --features pico --bin hello_picocalc
//! # Serial console: 115200 8N1 on the PicoCalc USB-C port
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use picocalc_blinky::core::bring_up::BringUp;
use picocalc_blinky::core::variant::HELLO_PICOCALC;
use picocalc_blinky::platform::rp2040::Rp2040Platform;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let mut platform = Rp2040Platform::new(p);

    let mut bring_up = match BringUp::init(&mut platform, HELLO_PICOCALC) {
        Ok(bring_up) => bring_up,
        Err(e) => defmt::panic!("bring-up init failed: {}", e),
    };

    match bring_up.run() {
        Ok(never) => match never {},
        Err(e) => defmt::panic!("LED loop stopped: {}", e),
    }
}

//! Pico project template: LED blink with a status line per cycle
//!
//! Sets up the on-board LED (GPIO25), prints `Pico Project Started!` on
//! UART0, then blinks at 1 Hz and prints `LED Toggle` after every cycle.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --target thumbv6m-none-eabi --features pico --bin pico_project
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use picocalc_blinky::core::bring_up::BringUp;
use picocalc_blinky::core::variant::PICO_PROJECT;
use picocalc_blinky::platform::rp2040::Rp2040Platform;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    let mut platform = Rp2040Platform::new(p);

    let mut bring_up = match BringUp::init(&mut platform, PICO_PROJECT) {
        Ok(bring_up) => bring_up,
        Err(e) => defmt::panic!("bring-up init failed: {}", e),
    };

    defmt::info!("entering LED loop");
    match bring_up.run() {
        Ok(never) => match never {},
        Err(e) => defmt::panic!("LED loop stopped: {}", e),
    }
}

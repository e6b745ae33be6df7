//! Tridim - Three-Channel Rotary Dimmer Firmware
//!
//! Main firmware binary for RP2040 boards with one rotary encoder, three
//! PWM outputs and a 128x128 OLED on a software serial bus.
//!
//! Turning the knob changes the duty of the selected channel; pressing and
//! releasing the knob selects the next channel.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod channels;
mod tasks;

use crate::board::Board;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tridim firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = Board::take(p);
    info!("Board pins claimed, bus at {} Hz", board::BUS_TIMING.frequency);

    spawner
        .spawn(tasks::controller_task(board.display, board.pwm))
        .unwrap();
    spawner.spawn(tasks::encoder_task(board.encoder)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
}

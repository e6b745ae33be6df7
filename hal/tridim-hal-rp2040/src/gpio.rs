//! GPIO line wrappers
//!
//! The RP2040 pads have no true open-drain mode. A bus line is emulated
//! by latching the output level low once and then toggling the pad
//! direction: output drives the line low, input lets the pull-up take it
//! high.

use embassy_rp::gpio::{Flex, Input, Pin, Pull};
use embassy_rp::Peri;
use tridim_hal::{InputPin, OutputPin};

/// Open-drain line built on a flexible pad
pub struct OpenDrainPin<'d> {
    pin: Flex<'d>,
}

impl<'d> OpenDrainPin<'d> {
    /// Take a pad and leave the line released
    ///
    /// `pull_up` enables the pad's internal pull-up. It is weak (about
    /// 50k); boards running the bus faster than the slow preset should
    /// fit external resistors.
    pub fn new(pin: Peri<'d, impl Pin>, pull_up: bool) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_pull(if pull_up { Pull::Up } else { Pull::None });
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }
}

impl OutputPin for OpenDrainPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_as_input();
    }

    fn set_low(&mut self) {
        self.pin.set_as_output();
    }
}

/// Input line sampled by the encoder decoder
pub struct LevelPin<'d> {
    pin: Input<'d>,
}

impl<'d> LevelPin<'d> {
    /// Configure a pad as input with the given pull
    pub fn new(pin: Peri<'d, impl Pin>, pull: Pull) -> Self {
        Self {
            pin: Input::new(pin, pull),
        }
    }

    /// Wait until the line changes level in either direction
    pub async fn wait_for_any_edge(&mut self) {
        self.pin.wait_for_any_edge().await;
    }
}

impl InputPin for LevelPin<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

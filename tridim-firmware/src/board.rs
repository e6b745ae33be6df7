//! Board wiring
//!
//! | Signal          | GPIO | Notes                                |
//! |-----------------|------|--------------------------------------|
//! | Display SDA     | 16   | open-drain emulation, pull-up        |
//! | Display SCL     | 17   | open-drain emulation, pull-up        |
//! | Encoder A       | 10   | pull-up                              |
//! | Encoder B       | 11   | pull-up                              |
//! | Encoder button  | 12   | pull-up, low while pressed           |
//! | Channel 1 PWM   | 0    | slice 0, output A                    |
//! | Channel 2 PWM   | 2    | slice 1, output A                    |
//! | Channel 3 PWM   | 4    | slice 2, output A                    |

use embassy_rp::gpio::Pull;
use embassy_rp::pwm::Pwm;
use embassy_rp::Peripherals;
use embassy_time::Delay;
use tridim_core::{DisplayDriver, Layout, SerialBitEngine};
use tridim_hal::BusTiming;
use tridim_hal_rp2040::{DimmerPwm, LevelPin, OpenDrainPin, PwmTiming};

/// Display bus speed
pub const BUS_TIMING: BusTiming = BusTiming::STANDARD;

/// Screen arrangement
pub const LAYOUT: Layout = Layout::DEFAULT;

// A layout that runs off the screen or overlaps itself fails the build
const _: () = assert!(LAYOUT.validate().is_ok());

/// Use the pads' internal pull-ups on the display bus
const BUS_INTERNAL_PULL_UP: bool = true;

/// Software serial bus to the display
pub type DisplayBus = SerialBitEngine<OpenDrainPin<'static>, OpenDrainPin<'static>, Delay>;

/// Encoder input lines
pub struct EncoderPins {
    pub a: LevelPin<'static>,
    pub b: LevelPin<'static>,
    pub button: LevelPin<'static>,
}

/// Everything the tasks need, split out of the peripherals
pub struct Board {
    pub display: DisplayDriver<DisplayBus>,
    pub encoder: EncoderPins,
    pub pwm: DimmerPwm<'static>,
}

impl Board {
    /// Claim the board's pins and slices
    pub fn take(p: Peripherals) -> Self {
        let scl = OpenDrainPin::new(p.PIN_17, BUS_INTERNAL_PULL_UP);
        let sda = OpenDrainPin::new(p.PIN_16, BUS_INTERNAL_PULL_UP);
        let bus = SerialBitEngine::new(scl, sda, Delay, BUS_TIMING);

        let encoder = EncoderPins {
            a: LevelPin::new(p.PIN_10, Pull::Up),
            b: LevelPin::new(p.PIN_11, Pull::Up),
            button: LevelPin::new(p.PIN_12, Pull::Up),
        };

        let timing = PwmTiming::default();
        let slices = [
            Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, timing.config(0)),
            Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, timing.config(0)),
            Pwm::new_output_a(p.PWM_SLICE2, p.PIN_4, timing.config(0)),
        ];

        Self {
            display: DisplayDriver::new(bus),
            encoder,
            pwm: DimmerPwm::new(slices, timing),
        }
    }
}

//! PWM outputs for the three dimmer channels
//!
//! Each channel owns one slice and uses its A output. The counter wraps at
//! `TOP = 254`, so a compare value equal to the duty gives 0 = always off
//! and 255 = always on with no scaling.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use tridim_core::channel::CHANNEL_COUNT;
use tridim_core::{ChannelId, PwmPeripheral};

/// Counter wrap value: 255 counts per period
pub const TOP: u16 = 254;

/// Slice clocking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTiming {
    /// Integer system clock divider (1-255)
    pub divider: u8,
}

impl Default for PwmTiming {
    /// 125 MHz / 64 / 255 counts, about 7.7 kHz
    fn default() -> Self {
        Self { divider: 64 }
    }
}

impl PwmTiming {
    /// Slice configuration with the given duty on output A
    pub fn config(&self, duty: u8) -> PwmConfig {
        let mut config = PwmConfig::default();
        config.top = TOP;
        config.divider = self.divider.max(1).into();
        config.compare_a = duty as u16;
        config
    }
}

/// Three slices, one per dimmer channel
pub struct DimmerPwm<'d> {
    slices: [Pwm<'d>; CHANNEL_COUNT],
    timing: PwmTiming,
}

impl<'d> DimmerPwm<'d> {
    /// Take the slices in channel order and start them at 0% duty
    pub fn new(slices: [Pwm<'d>; CHANNEL_COUNT], timing: PwmTiming) -> Self {
        let mut pwm = Self { slices, timing };
        for ch in ChannelId::ALL {
            pwm.set_duty(ch, 0);
        }
        pwm
    }
}

impl PwmPeripheral for DimmerPwm<'_> {
    fn set_duty(&mut self, channel: ChannelId, duty: u8) {
        let config = self.timing.config(duty);
        self.slices[channel.index()].set_config(&config);
    }
}

//! PWM output trait
//!
//! The core only computes a duty value per channel; turning that value into
//! a timer/compare configuration is the peripheral's job.

use crate::channel::ChannelId;

/// PWM peripheral driving the three dimmer outputs
pub trait PwmPeripheral {
    /// Set the duty cycle of one channel
    ///
    /// `duty` is the compare value: 0 = always off, 255 = always on.
    fn set_duty(&mut self, channel: ChannelId, duty: u8);
}

impl<P: PwmPeripheral + ?Sized> PwmPeripheral for &mut P {
    fn set_duty(&mut self, channel: ChannelId, duty: u8) {
        P::set_duty(self, channel, duty)
    }
}

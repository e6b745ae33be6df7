//! Channel controller
//!
//! Consumes what the decoder left in [`SharedInput`] and applies it to the
//! channels the steps were made on, then pushes the results to the screen
//! and the PWM peripheral. Every service call produces exactly one display
//! update and one PWM update for the active channel, even when the delta
//! is zero (a channel switch still moves the arrow and refreshes the
//! readout).

use super::{Channel, ChannelId, CHANNEL_COUNT};
use crate::bus::Transport;
use crate::display::{DisplayDriver, Layout};
use crate::input::SharedInput;
use crate::traits::PwmPeripheral;

/// Result of one service call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Update {
    /// Channel that was updated
    pub channel: ChannelId,
    /// Steps applied (before saturation)
    pub delta: i16,
    /// New duty
    pub duty: u8,
    /// New rounded percentage
    pub percent: u8,
}

/// Owner of the three channel duty values
pub struct ChannelController {
    channels: [Channel; CHANNEL_COUNT],
    layout: Layout,
}

impl Default for ChannelController {
    fn default() -> Self {
        Self::new(Layout::DEFAULT)
    }
}

impl ChannelController {
    /// All channels at zero duty
    pub const fn new(layout: Layout) -> Self {
        Self {
            channels: [Channel::new(); CHANNEL_COUNT],
            layout,
        }
    }

    /// Current state of a channel
    pub fn channel(&self, id: ChannelId) -> &Channel {
        &self.channels[id.index()]
    }

    /// Duty of every channel, in channel order
    pub fn duties(&self) -> [u8; CHANNEL_COUNT] {
        self.channels.map(|c| c.duty())
    }

    /// Draw the boot screen and drive every output to its current duty
    pub fn start<T, P>(&self, active: ChannelId, display: &mut DisplayDriver<T>, pwm: &mut P)
    where
        T: Transport,
        P: PwmPeripheral,
    {
        display.draw_static_screen(&self.layout, &self.duties(), active);
        for ch in ChannelId::ALL {
            pwm.set_duty(ch, self.channel(ch).duty());
        }
    }

    /// Apply pending steps and refresh the active channel's outputs
    ///
    /// Steps left on channels that are no longer selected are applied
    /// first, redrawing only their readouts. The active channel is then
    /// updated along with the arrow and reported. Each channel's steps are
    /// taken atomically, so steps that arrive while the screen is being
    /// drawn wait for the next call.
    pub fn service<T, P>(
        &mut self,
        shared: &SharedInput,
        display: &mut DisplayDriver<T>,
        pwm: &mut P,
    ) -> Update
    where
        T: Transport,
        P: PwmPeripheral,
    {
        let channel = shared.active_channel();

        for other in ChannelId::ALL {
            if other == channel {
                continue;
            }
            let delta = shared.take_delta(other);
            if delta != 0 {
                let duty = self.channels[other.index()].apply(delta);
                display.draw_readout(&self.layout, other, duty);
                pwm.set_duty(other, duty);
            }
        }

        let delta = shared.take_delta(channel);
        let slot = &mut self.channels[channel.index()];
        let duty = slot.apply(delta);
        let percent = slot.percent();

        display.draw_channel_update(&self.layout, channel, duty);
        pwm.set_duty(channel, duty);

        Update {
            channel,
            delta,
            duty,
            percent,
        }
    }
}

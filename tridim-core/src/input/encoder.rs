//! Rotary encoder decoder
//!
//! Runs on every level-change notification from the two quadrature lines
//! or the push button and turns edges into steps and channel selection.
//!
//! Rotation decoding is deliberately coarse: a step is emitted only when
//! both phase lines have changed since they were last recorded, and the
//! direction comes from whether the lines now agree. Some quadrature
//! transitions are coalesced this way; encoders with detents still produce
//! one step per click.
//!
//! The button is debounced by counting edges: a physical press and release
//! produce two edges, and every second edge advances the active channel.

use tridim_hal::InputPin;

use super::SharedInput;
use crate::channel::ChannelId;

/// Snapshot of the three encoder lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Levels {
    /// Phase A
    pub a: bool,
    /// Phase B
    pub b: bool,
    /// Push button (high = released with pull-up)
    pub button: bool,
}

impl Levels {
    pub const fn new(a: bool, b: bool, button: bool) -> Self {
        Self { a, b, button }
    }

    /// Read all three lines
    pub fn sample<A, B, S>(a: &A, b: &B, button: &S) -> Self
    where
        A: InputPin,
        B: InputPin,
        S: InputPin,
    {
        Self {
            a: a.is_high(),
            b: b.is_high(),
            button: button.is_high(),
        }
    }
}

/// What a single notification did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderEvent {
    /// Rotation step (+1 or -1) added to the pending delta
    Step(i8),
    /// Button edge counted, selection unchanged
    Click,
    /// Second button edge, selection moved to this channel
    ChannelAdvanced(ChannelId),
    /// Nothing qualified (bounce on B only, or no change)
    Idle,
}

/// Quadrature + button edge decoder
pub struct EncoderDecoder {
    a_prev: bool,
    b_prev: bool,
    s_prev: bool,
    /// Button edges seen toward the next channel advance (0 or 1)
    click_count: u8,
}

impl EncoderDecoder {
    /// Number of button edges per channel advance
    pub const EDGES_PER_ADVANCE: u8 = 2;

    /// Create a decoder seeded with the current line levels
    ///
    /// Seeding avoids counting the pull-up level of an idle button as an
    /// edge on the first notification.
    pub const fn new(initial: Levels) -> Self {
        Self {
            a_prev: initial.a,
            b_prev: initial.b,
            s_prev: initial.button,
            click_count: 0,
        }
    }

    /// Button edges counted toward the next advance
    pub const fn click_count(&self) -> u8 {
        self.click_count
    }

    /// Handle one level-change notification
    ///
    /// Rotation takes priority: when phase A changed, the button is not
    /// examined for this notification.
    pub fn on_change(&mut self, levels: Levels, shared: &SharedInput) -> DecoderEvent {
        if levels.a != self.a_prev {
            self.a_prev = levels.a;
            if levels.b != self.b_prev {
                self.b_prev = levels.b;
                let step = if levels.a == levels.b { 1 } else { -1 };
                shared.add_step(step);
                return DecoderEvent::Step(step);
            }
            return DecoderEvent::Idle;
        }

        if levels.button != self.s_prev {
            self.s_prev = levels.button;
            self.click_count += 1;
            if self.click_count >= Self::EDGES_PER_ADVANCE {
                self.click_count = 0;
                let next = shared.active_channel().next();
                shared.set_active_channel(next);
                return DecoderEvent::ChannelAdvanced(next);
            }
            return DecoderEvent::Click;
        }

        DecoderEvent::Idle
    }
}

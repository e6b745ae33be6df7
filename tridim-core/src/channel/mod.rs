//! Dimmer channels
//!
//! Exactly three channels exist for the lifetime of the device. Each holds
//! a PWM duty value in `0..=255` that starts at zero on power-up and is
//! never persisted.

pub mod controller;

pub use controller::{ChannelController, Update};

/// Number of dimmer channels
pub const CHANNEL_COUNT: usize = 3;

/// Errors when addressing a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    /// Channel number outside 1..=3 (or index outside 0..3)
    OutOfRange(u8),
}

/// One of the three dimmer channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelId {
    #[default]
    One,
    Two,
    Three,
}

impl ChannelId {
    /// All channels in selection order
    pub const ALL: [ChannelId; CHANNEL_COUNT] = [ChannelId::One, ChannelId::Two, ChannelId::Three];

    /// User-facing channel number (1-3)
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Array index (0-2)
    pub const fn index(self) -> usize {
        match self {
            ChannelId::One => 0,
            ChannelId::Two => 1,
            ChannelId::Three => 2,
        }
    }

    /// Next channel in selection order, wrapping 3 -> 1
    pub const fn next(self) -> Self {
        match self {
            ChannelId::One => ChannelId::Two,
            ChannelId::Two => ChannelId::Three,
            ChannelId::Three => ChannelId::One,
        }
    }
}

impl TryFrom<u8> for ChannelId {
    type Error = ChannelError;

    /// Channel from its user-facing number (1-3)
    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(ChannelId::One),
            2 => Ok(ChannelId::Two),
            3 => Ok(ChannelId::Three),
            n => Err(ChannelError::OutOfRange(n)),
        }
    }
}

/// Duty state of a single channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel {
    duty: u8,
}

impl Channel {
    /// A channel at zero duty
    pub const fn new() -> Self {
        Self { duty: 0 }
    }

    /// Current duty (PWM compare value)
    pub const fn duty(&self) -> u8 {
        self.duty
    }

    /// Duty as a rounded percentage
    pub const fn percent(&self) -> u8 {
        percent_of(self.duty)
    }

    /// Add a signed step count, saturating at 0 and 255
    ///
    /// Returns the new duty.
    pub fn apply(&mut self, delta: i16) -> u8 {
        let duty = (self.duty as i16).saturating_add(delta).clamp(0, u8::MAX as i16);
        self.duty = duty as u8;
        self.duty
    }
}

/// `round(100 * duty / 255)` in integer arithmetic
pub const fn percent_of(duty: u8) -> u8 {
    ((duty as u16 * 100 + 127) / 255) as u8
}

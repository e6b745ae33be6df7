//! State shared between the decoder and the controller
//!
//! This is the only cross-context mutable state in the firmware. Every
//! access is a single atomic operation; on cores without atomic
//! read-modify-write (thumbv6m) `portable-atomic` runs them inside a
//! critical section.
//!
//! Steps are kept per channel. A step lands in the slot of the channel
//! that was active when it was decoded, so a channel switch between two
//! controller passes cannot move steps onto the newly selected channel.

use portable_atomic::{AtomicI16, AtomicU8, Ordering};

use crate::channel::{ChannelId, CHANNEL_COUNT};

/// Pending encoder steps and the active channel selection
pub struct SharedInput {
    /// Steps not yet applied, per channel
    pending: [AtomicI16; CHANNEL_COUNT],
    /// Active channel index (0-2)
    active: AtomicU8,
}

impl Default for SharedInput {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedInput {
    /// No pending steps, channel 1 active
    pub const fn new() -> Self {
        Self {
            pending: [AtomicI16::new(0), AtomicI16::new(0), AtomicI16::new(0)],
            active: AtomicU8::new(0),
        }
    }

    /// Accumulate a step for the active channel
    ///
    /// Called only from the decoder, which is also the only writer of the
    /// selection, so the slot read here is the one the step belongs to.
    pub fn add_step(&self, step: i8) {
        let slot = &self.pending[self.active_channel().index()];
        slot.fetch_add(step as i16, Ordering::AcqRel);
    }

    /// Take a channel's pending steps, leaving zero behind
    pub fn take_delta(&self, channel: ChannelId) -> i16 {
        self.pending[channel.index()].swap(0, Ordering::AcqRel)
    }

    /// Peek at a channel's pending steps without consuming them
    pub fn pending(&self, channel: ChannelId) -> i16 {
        self.pending[channel.index()].load(Ordering::Acquire)
    }

    /// Currently selected channel
    pub fn active_channel(&self) -> ChannelId {
        // Only `set_active_channel` writes, and it stores a valid index
        match self.active.load(Ordering::Acquire) {
            1 => ChannelId::Two,
            2 => ChannelId::Three,
            _ => ChannelId::One,
        }
    }

    /// Select a channel
    pub fn set_active_channel(&self, channel: ChannelId) {
        self.active.store(channel.index() as u8, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let shared = SharedInput::new();
        for ch in ChannelId::ALL {
            assert_eq!(shared.pending(ch), 0);
        }
        assert_eq!(shared.active_channel(), ChannelId::One);
    }

    #[test]
    fn test_steps_accumulate_until_taken() {
        let shared = SharedInput::new();
        shared.add_step(1);
        shared.add_step(1);
        shared.add_step(-1);
        shared.add_step(1);
        assert_eq!(shared.pending(ChannelId::One), 2);
        assert_eq!(shared.take_delta(ChannelId::One), 2);
        assert_eq!(shared.pending(ChannelId::One), 0);
        assert_eq!(shared.take_delta(ChannelId::One), 0);
    }

    #[test]
    fn test_steps_stay_with_their_channel() {
        let shared = SharedInput::new();
        shared.add_step(1);
        shared.set_active_channel(ChannelId::Two);
        shared.add_step(-1);
        shared.add_step(-1);

        assert_eq!(shared.pending(ChannelId::One), 1);
        assert_eq!(shared.pending(ChannelId::Two), -2);
        assert_eq!(shared.pending(ChannelId::Three), 0);
    }

    #[test]
    fn test_active_channel_roundtrip() {
        let shared = SharedInput::new();
        for ch in ChannelId::ALL {
            shared.set_active_channel(ch);
            assert_eq!(shared.active_channel(), ch);
        }
    }
}

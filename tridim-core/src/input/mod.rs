//! Encoder input handling
//!
//! The decoder runs in interrupt context (or the task standing in for it)
//! and is the only writer of [`SharedInput`]; the channel controller is
//! the only consumer.

pub mod encoder;
pub mod shared;

pub use encoder::{DecoderEvent, EncoderDecoder, Levels};
pub use shared::SharedInput;

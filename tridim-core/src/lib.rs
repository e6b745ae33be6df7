//! Board-agnostic core logic for the three-channel dimmer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Software two-wire serial bus (bit-level transaction engine)
//! - Page-addressed OLED driver with glyph and stretched-glyph rendering
//! - Quadrature encoder decoder with two-edge click counting
//! - Channel model and the controller tying input to display and PWM
//!
//! Everything here runs on a host with fake pins, which is how it is tested.

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod channel;
pub mod dimmer;
pub mod display;
pub mod input;
pub mod traits;

pub use bus::{SerialBitEngine, Transport};
pub use channel::{Channel, ChannelController, ChannelError, ChannelId, Update};
pub use dimmer::Dimmer;
pub use display::{DisplayDriver, Glyph, Layout};
pub use input::{DecoderEvent, EncoderDecoder, Levels, SharedInput};
pub use traits::PwmPeripheral;

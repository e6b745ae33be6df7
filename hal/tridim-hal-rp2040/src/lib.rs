//! RP2040-specific HAL for the dimmer firmware
//!
//! This crate provides RP2040 implementations of the shared `tridim-hal`
//! traits and of the core's PWM seam:
//!
//! - Open-drain emulation for the software serial bus lines
//! - Level-sampled inputs with async edge waits for the encoder
//! - Three PWM slices driving the dimmer outputs

#![no_std]

pub mod gpio;
pub mod pwm;

pub use gpio::{LevelPin, OpenDrainPin};
pub use pwm::{DimmerPwm, PwmTiming};

// Re-export shared traits from tridim-hal for convenience
pub use tridim_hal::{InputPin, OutputPin};

//! Tridim Hardware Abstraction Layer
//!
//! This crate defines the small capability interface the dimmer core needs
//! from a chip: digital lines and serial bus timing. Chip-specific HALs
//! implement these traits so the same application logic runs on the target
//! and on a host with fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tridim-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tridim-core (protocol, UI, encoder)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tridim-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  tridim-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`bus::BusTiming`] - Software serial bus timing

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod gpio;

// Re-export key items at crate root for convenience
pub use bus::BusTiming;
pub use gpio::{InputPin, OutputPin};

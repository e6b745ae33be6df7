//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations that need core types.

pub mod pwm;

pub use pwm::PwmPeripheral;

//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod controller;
pub mod encoder;

pub use controller::controller_task;
pub use encoder::encoder_task;

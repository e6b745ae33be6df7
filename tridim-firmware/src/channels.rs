//! State shared between the encoder and controller tasks

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use tridim_core::SharedInput;

/// Pending rotation steps and the selected channel
///
/// Written by the encoder task, consumed by the controller task.
pub static SHARED_INPUT: SharedInput = SharedInput::new();

/// Raised after every decoded encoder notification
pub static ENCODER_NOTIFY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

//! Single-context dimmer
//!
//! Runs the decoder and the controller back to back on every notification,
//! the way a bare pin-change interrupt handler would. Firmware that wants
//! short interrupt latency splits the two halves across contexts instead
//! and shares a static [`SharedInput`]; this type is the simple variant.

use crate::bus::Transport;
use crate::channel::{ChannelController, Update};
use crate::display::{DisplayDriver, Layout};
use crate::input::{DecoderEvent, EncoderDecoder, Levels, SharedInput};
use crate::traits::PwmPeripheral;

/// Decoder, controller, display and PWM wired together
pub struct Dimmer<T, P> {
    decoder: EncoderDecoder,
    controller: ChannelController,
    shared: SharedInput,
    display: DisplayDriver<T>,
    pwm: P,
}

impl<T, P> Dimmer<T, P>
where
    T: Transport,
    P: PwmPeripheral,
{
    /// Wire up the parts; `initial` are the encoder line levels at boot
    pub fn new(display: DisplayDriver<T>, pwm: P, layout: Layout, initial: Levels) -> Self {
        Self {
            decoder: EncoderDecoder::new(initial),
            controller: ChannelController::new(layout),
            shared: SharedInput::new(),
            display,
            pwm,
        }
    }

    /// Initialize and clear the display, draw the boot screen, zero the outputs
    pub fn boot(&mut self) {
        self.display.initialize();
        self.display.clear();
        let active = self.shared.active_channel();
        self.controller.start(active, &mut self.display, &mut self.pwm);
    }

    /// Handle one level-change notification end to end
    pub fn notify(&mut self, levels: Levels) -> (DecoderEvent, Update) {
        let event = self.decoder.on_change(levels, &self.shared);
        let update = self
            .controller
            .service(&self.shared, &mut self.display, &mut self.pwm);
        (event, update)
    }

    /// Channel state
    pub fn controller(&self) -> &ChannelController {
        &self.controller
    }

    /// Selection and pending steps
    pub fn shared(&self) -> &SharedInput {
        &self.shared
    }

    /// Button edges counted toward the next channel advance
    pub fn click_count(&self) -> u8 {
        self.decoder.click_count()
    }

    /// PWM peripheral
    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Take the display and PWM back
    pub fn release(self) -> (DisplayDriver<T>, P) {
        (self.display, self.pwm)
    }
}

//! Encoder task
//!
//! Stands in for a pin-change interrupt: wakes on any edge of the three
//! encoder lines, samples all of them, runs the decoder and pokes the
//! controller. It never touches the display or the PWM, so a slow screen
//! update cannot make it miss edges.

use defmt::*;
use embassy_futures::select::select3;

use tridim_core::{DecoderEvent, EncoderDecoder, Levels};

use crate::board::EncoderPins;
use crate::channels::{ENCODER_NOTIFY, SHARED_INPUT};

/// Encoder task - decodes rotation and clicks into shared state
#[embassy_executor::task]
pub async fn encoder_task(mut pins: EncoderPins) {
    info!("Encoder task started");

    let initial = Levels::sample(&pins.a, &pins.b, &pins.button);
    let mut decoder = EncoderDecoder::new(initial);

    loop {
        select3(
            pins.a.wait_for_any_edge(),
            pins.b.wait_for_any_edge(),
            pins.button.wait_for_any_edge(),
        )
        .await;

        let levels = Levels::sample(&pins.a, &pins.b, &pins.button);
        let event = decoder.on_change(levels, &SHARED_INPUT);
        trace!("Encoder {} -> {}", levels, event);

        if let DecoderEvent::ChannelAdvanced(channel) = event {
            debug!("Selected channel {}", channel.number());
        }

        ENCODER_NOTIFY.signal(());
    }
}

//! Controller task
//!
//! Owns the display and the PWM outputs. Draws the boot screen, then
//! applies whatever the encoder task accumulated each time it is poked.

use defmt::*;

use tridim_core::{ChannelController, DisplayDriver};
use tridim_hal_rp2040::DimmerPwm;

use crate::board::{DisplayBus, LAYOUT};
use crate::channels::{ENCODER_NOTIFY, SHARED_INPUT};

/// How long the self-test pattern stays on screen
#[cfg(feature = "self-test")]
const SELF_TEST_MS: u64 = 500;

/// Controller task - channel state, screen and outputs
#[embassy_executor::task]
pub async fn controller_task(mut display: DisplayDriver<DisplayBus>, mut pwm: DimmerPwm<'static>) {
    info!("Controller task started");

    display.initialize();
    info!("Display initialized at {:#x}", display.config().address);

    #[cfg(feature = "self-test")]
    {
        display.fill();
        embassy_time::Timer::after_millis(SELF_TEST_MS).await;
    }

    display.clear();

    let mut controller = ChannelController::new(LAYOUT);
    controller.start(SHARED_INPUT.active_channel(), &mut display, &mut pwm);
    info!("Boot screen drawn, all channels at 0");

    loop {
        ENCODER_NOTIFY.wait().await;

        let update = controller.service(&SHARED_INPUT, &mut display, &mut pwm);
        if update.delta != 0 {
            debug!(
                "CH{} duty {} ({}%)",
                update.channel.number(),
                update.duty,
                update.percent
            );
        }
        trace!("Update {}", update);
    }
}

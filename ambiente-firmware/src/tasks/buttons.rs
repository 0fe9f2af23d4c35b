//! Button edge task
//!
//! Waits for a falling edge on the joystick switch or button B and hands
//! it to the input router with the current timestamp. Everything else
//! happens in the poll loop.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use ambiente_core::input::EdgeSource;

use crate::channels::INPUT_ROUTER;

#[embassy_executor::task]
pub async fn buttons_task(mut menu: Input<'static>, mut secondary: Input<'static>) {
    info!("Buttons task started");

    loop {
        let source = match select(
            menu.wait_for_falling_edge(),
            secondary.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => EdgeSource::Menu,
            Either::Second(()) => EdgeSource::Secondary,
        };

        let now_ms = Instant::now().as_millis() as u32;
        if INPUT_ROUTER.on_edge(source, now_ms) {
            debug!("{:?} edge accepted at {} ms", source, now_ms);
        } else {
            trace!("{:?} edge ignored", source);
        }
    }
}

//! Panel poll loop
//!
//! Owns the [`Panel`] and runs one tick every `timing.tick_ms`. A plain
//! timer is used rather than a ticker: calibration blocks a tick for
//! several seconds and the loop must not burst afterwards.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::PwmOutput;
use embassy_time::{Delay, Duration, Instant, Timer};

use ambiente_core::panel::{Events, Panel};
use ambiente_core::state::PanelEvent;
use ambiente_drivers::display::Ssd1306;
use ambiente_drivers::matrix::LedMatrix;
use ambiente_drivers::output::{DualBuzzer, PwmIntensity};

use crate::channels::{EVENT_CHANNEL, INPUT_ROUTER};
use crate::hw::{Joystick, PioMatrixWriter};

/// The panel wired to BitDogLab hardware
pub type FrontPanel = Panel<
    Joystick,
    Input<'static>,
    Ssd1306<I2c<'static, I2C1, Async>>,
    LedMatrix<PioMatrixWriter>,
    PwmIntensity<PwmOutput<'static>>,
    PwmIntensity<PwmOutput<'static>>,
    DualBuzzer<PwmOutput<'static>, PwmOutput<'static>, Delay>,
    Delay,
>;

#[embassy_executor::task]
pub async fn panel_task(mut panel: FrontPanel) {
    info!("Panel task started");

    let mut display_faulted = false;

    let events = panel.start(&INPUT_ROUTER).await;
    publish(events, &mut display_faulted);

    let tick = Duration::from_millis(panel.config().timing.tick_ms as u64);

    loop {
        Timer::after(tick).await;

        let now_ms = Instant::now().as_millis() as u32;
        let events = panel.tick(&INPUT_ROUTER, now_ms).await;
        publish(events, &mut display_faulted);
    }
}

/// Forward events to the log task
///
/// While the display keeps failing only the first fault is forwarded.
fn publish(events: Events, display_faulted: &mut bool) {
    let faulted = events
        .iter()
        .any(|e| matches!(e, PanelEvent::DisplayFault(_)));

    if *display_faulted && !faulted {
        info!("Display recovered");
    }

    for event in events {
        if matches!(event, PanelEvent::DisplayFault(_)) && *display_faulted {
            continue;
        }
        if EVENT_CHANNEL.try_send(event).is_err() {
            trace!("Event channel full, dropped {:?}", event);
        }
    }

    *display_faulted = faulted;
}

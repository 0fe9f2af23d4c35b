//! Joystick on the RP2040 ADC
//!
//! A failed conversion returns the last good sample for that axis, so a
//! glitch never shows up as a jump to zero.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};

use ambiente_core::traits::{AnalogInput, Axis};

/// Centre reading before the first conversion succeeds
const RAW_CENTER: u16 = 2047;

pub struct Joystick {
    adc: Adc<'static, Async>,
    x: Channel<'static>,
    y: Channel<'static>,
    /// Last good sample, indexed X then Y
    last: [u16; 2],
}

impl Joystick {
    pub fn new(adc: Adc<'static, Async>, x: Channel<'static>, y: Channel<'static>) -> Self {
        Self {
            adc,
            x,
            y,
            last: [RAW_CENTER; 2],
        }
    }
}

impl AnalogInput for Joystick {
    async fn read_raw(&mut self, axis: Axis) -> u16 {
        let (channel, slot) = match axis {
            Axis::X => (&mut self.x, 0),
            Axis::Y => (&mut self.y, 1),
        };

        match self.adc.read(channel).await {
            Ok(raw) => {
                self.last[slot] = raw;
                raw
            }
            Err(e) => {
                warn!("ADC read on {:?} axis failed: {:?}", axis, e);
                self.last[slot]
            }
        }
    }
}

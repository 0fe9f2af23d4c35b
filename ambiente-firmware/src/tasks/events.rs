//! Panel event log task

use defmt::*;

use ambiente_core::state::PanelEvent;

use crate::channels::EVENT_CHANNEL;

/// Log everything the panel reports
#[embassy_executor::task]
pub async fn event_log_task() {
    info!("Event log task started");

    loop {
        match EVENT_CHANNEL.receive().await {
            PanelEvent::ScreenEntered(screen) => info!("Screen: {:?}", screen),
            PanelEvent::FanThresholdCommitted { step, value } => {
                info!("Fan {:?} threshold set to {} C", step, value)
            }
            PanelEvent::HumidifierThresholdCommitted(value) => {
                info!("Humidifier threshold set to {} %", value)
            }
            PanelEvent::Calibrated { axis, calibration } => {
                info!("Axis {:?} calibrated: {:?}", axis, calibration)
            }
            PanelEvent::CalibrationRejected(axis) => {
                warn!("Axis {:?} calibration rejected, low == high", axis)
            }
            PanelEvent::LatchToggled(latched) => info!("Low-water latch: {}", latched),
            PanelEvent::DisplayFault(e) => warn!("Display flush failed: {:?}", e),
        }
    }
}

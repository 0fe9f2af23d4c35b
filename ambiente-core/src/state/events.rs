//! Events reported by the panel controller

use crate::classify::FanStep;
use crate::config::AxisCalibration;
use crate::traits::{Axis, DisplayError};

/// Something noteworthy that happened during a tick
///
/// The controller returns these to the poll loop, which logs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelEvent {
    /// A new screen became active and its entry actions ran
    ScreenEntered(crate::state::Screen),
    /// A fan threshold was committed from the temperature screen
    FanThresholdCommitted { step: FanStep, value: i32 },
    /// The humidifier threshold was committed
    HumidifierThresholdCommitted(i32),
    /// An axis calibration finished and was stored
    Calibrated {
        axis: Axis,
        calibration: AxisCalibration,
    },
    /// An axis calibration produced `low == high` and was discarded
    CalibrationRejected(Axis),
    /// The low-water latch changed to the given state
    LatchToggled(bool),
    /// Sending a frame to the display failed
    DisplayFault(DisplayError),
}

//! Joystick analog input

use core::future::Future;

/// Joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Horizontal axis, simulates humidity
    X,
    /// Vertical axis, simulates temperature
    Y,
}

/// Source of raw joystick samples
pub trait AnalogInput {
    /// Read one raw 12-bit sample (0..=4095) from an axis
    ///
    /// Implementations never fail: a converter error repeats the last
    /// good sample for that axis.
    fn read_raw(&mut self, axis: Axis) -> impl Future<Output = u16>;
}

//! Actuator outputs

use core::future::Future;

/// Full-scale intensity for [`IntensityOutput::set_level`]
pub const INTENSITY_MAX: u16 = 4095;

/// PWM-driven output (fan and humidifier indicators)
pub trait IntensityOutput {
    /// Set the output level on the `0..=INTENSITY_MAX` scale
    ///
    /// Levels above `INTENSITY_MAX` are treated as full on.
    fn set_level(&mut self, level: u16);
}

/// Buzzer pattern player
pub trait Tone {
    /// Play the two-pitch pattern for `duration_ms`, returning when silent
    fn beep(&mut self, duration_ms: u32) -> impl Future<Output = ()>;
}

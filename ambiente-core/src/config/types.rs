//! Configuration type definitions
//!
//! These types hold the panel configuration. All of them live in RAM only;
//! edits made from the panel screens are lost on power-down.

use crate::classify::FanStep;

/// Largest raw sample the 12-bit ADC produces
pub const ADC_MAX: u16 = 4095;

/// Fan and humidifier switching thresholds
///
/// Ordering (`fan_low < fan_medium < fan_high`) is expected but not
/// enforced; the threshold screens store whatever the joystick reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    /// Temperature (°C) at which the fan starts on low
    pub fan_low: i32,
    /// Temperature (°C) at which the fan steps up to medium
    pub fan_medium: i32,
    /// Temperature (°C) at which the fan runs at full speed
    pub fan_high: i32,
    /// Relative humidity (%) at or below which the humidifier runs
    pub humidifier_on: i32,
}

impl Thresholds {
    pub const DEFAULT: Self = Self {
        fan_low: 26,
        fan_medium: 30,
        fan_high: 32,
        humidifier_on: 60,
    };

    /// Threshold edited by a given step of the temperature screen
    pub fn fan(&self, step: FanStep) -> i32 {
        match step {
            FanStep::Low => self.fan_low,
            FanStep::Medium => self.fan_medium,
            FanStep::High => self.fan_high,
        }
    }

    pub fn set_fan(&mut self, step: FanStep, value: i32) {
        match step {
            FanStep::Low => self.fan_low = value,
            FanStep::Medium => self.fan_medium = value,
            FanStep::High => self.fan_high = value,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which calibration bound a sampling window writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bound {
    Low,
    MiddleLow,
    MiddleHigh,
    High,
}

/// Raw ADC bounds for one joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisCalibration {
    /// Raw reading at the low extreme
    pub low: u16,
    /// Lowest raw reading seen at rest
    pub middle_low: u16,
    /// Highest raw reading seen at rest
    pub middle_high: u16,
    /// Raw reading at the high extreme
    pub high: u16,
}

impl AxisCalibration {
    /// Uncalibrated full-scale bounds
    pub const FULL_SCALE: Self = Self {
        low: 0,
        middle_low: 2047,
        middle_high: 2047,
        high: ADC_MAX,
    };

    pub fn get(&self, bound: Bound) -> u16 {
        match bound {
            Bound::Low => self.low,
            Bound::MiddleLow => self.middle_low,
            Bound::MiddleHigh => self.middle_high,
            Bound::High => self.high,
        }
    }

    pub fn set(&mut self, bound: Bound, value: u16) {
        match bound {
            Bound::Low => self.low = value,
            Bound::MiddleLow => self.middle_low = value,
            Bound::MiddleHigh => self.middle_high = value,
            Bound::High => self.high = value,
        }
    }

    /// A calibration can drive the range mapper only if its extremes differ
    pub fn is_usable(&self) -> bool {
        self.low != self.high
    }
}

impl Default for AxisCalibration {
    fn default() -> Self {
        Self::FULL_SCALE
    }
}

/// Physical range a joystick axis simulates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeasureRange {
    pub min: i32,
    pub max: i32,
}

impl MeasureRange {
    /// Simulated temperature in °C
    pub const TEMPERATURE: Self = Self { min: -15, max: 50 };
    /// Simulated relative humidity in %
    pub const HUMIDITY: Self = Self { min: 0, max: 100 };

    /// Largest magnitude a configured bound may have
    pub const LIMIT: i32 = 10_000;

    /// Both bounds lie within `±LIMIT`
    pub fn within_limit(&self) -> bool {
        (-Self::LIMIT..=Self::LIMIT).contains(&self.min)
            && (-Self::LIMIT..=Self::LIMIT).contains(&self.max)
    }
}

/// Loop and calibration timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Sleep between poll loop iterations
    pub tick_ms: u32,
    /// Minimum gap between accepted button edges
    pub debounce_ms: u32,
    /// Wait after showing a calibration prompt before sampling
    pub settle_ms: u32,
    /// Samples taken per calibration window
    pub samples: u16,
    /// Delay between calibration samples
    pub sample_interval_ms: u32,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        tick_ms: 10,
        debounce_ms: 200,
        settle_ms: 2000,
        samples: 300,
        sample_interval_ms: 10,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Buzzer pattern durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tones {
    /// Played when a threshold is committed
    pub confirm_ms: u32,
    /// Played when the low-water latch is raised
    pub alert_ms: u32,
}

impl Default for Tones {
    fn default() -> Self {
        Self {
            confirm_ms: 100,
            alert_ms: 400,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    pub thresholds: Thresholds,
    /// Horizontal axis (humidity)
    pub x_axis: AxisCalibration,
    /// Vertical axis (temperature)
    pub y_axis: AxisCalibration,
    pub temperature: MeasureRange,
    pub humidity: MeasureRange,
    pub timing: Timing,
    pub tones: Tones,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::DEFAULT,
            x_axis: AxisCalibration::FULL_SCALE,
            y_axis: AxisCalibration::FULL_SCALE,
            temperature: MeasureRange::TEMPERATURE,
            humidity: MeasureRange::HUMIDITY,
            timing: Timing::default(),
            tones: Tones::default(),
        }
    }
}

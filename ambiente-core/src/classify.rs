//! Comfort classification
//!
//! Turns a temperature and humidity reading into fan speed, humidifier
//! state and the mood face shown on the display.

use crate::config::Thresholds;
use crate::traits::output::INTENSITY_MAX;

/// Fan speed derived from temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FanSpeed {
    Off,
    Low,
    Medium,
    High,
}

impl FanSpeed {
    /// Classify a temperature against the fan thresholds
    pub fn classify(temperature: i32, thresholds: &Thresholds) -> Self {
        if temperature < thresholds.fan_low {
            FanSpeed::Off
        } else if temperature < thresholds.fan_medium {
            FanSpeed::Low
        } else if temperature < thresholds.fan_high {
            FanSpeed::Medium
        } else {
            FanSpeed::High
        }
    }

    /// Output intensity on the 0..=4095 scale
    pub fn level(self) -> u16 {
        match self {
            FanSpeed::Off => 0,
            FanSpeed::Low => INTENSITY_MAX / 3,
            FanSpeed::Medium => INTENSITY_MAX / 3 * 2,
            FanSpeed::High => INTENSITY_MAX,
        }
    }

    /// Anything short of full speed still counts as comfortable
    pub fn is_comfortable(self) -> bool {
        !matches!(self, FanSpeed::High)
    }

    pub fn label(self) -> &'static str {
        match self {
            FanSpeed::Off => "off",
            FanSpeed::Low => "low",
            FanSpeed::Medium => "medium",
            FanSpeed::High => "high",
        }
    }
}

/// Fan threshold selected on the temperature screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FanStep {
    Low,
    Medium,
    High,
}

impl FanStep {
    /// Map the step counter to a step; `None` outside `0..=2`
    pub fn from_counter(counter: u8) -> Option<Self> {
        match counter {
            0 => Some(FanStep::Low),
            1 => Some(FanStep::Medium),
            2 => Some(FanStep::High),
            _ => None,
        }
    }

    /// Fan speed previewed while this threshold is edited
    pub fn preview(self) -> FanSpeed {
        match self {
            FanStep::Low => FanSpeed::Low,
            FanStep::Medium => FanSpeed::Medium,
            FanStep::High => FanSpeed::High,
        }
    }

    pub fn mood(self) -> Mood {
        match self {
            FanStep::Low | FanStep::Medium => Mood::Happy,
            FanStep::High => Mood::Sad,
        }
    }
}

/// Humidifier state derived from relative humidity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Humidifier {
    Off,
    On,
}

impl Humidifier {
    /// The humidifier runs until humidity exceeds `humidifier_on`
    pub fn classify(humidity: i32, thresholds: &Thresholds) -> Self {
        if humidity > thresholds.humidifier_on {
            Humidifier::Off
        } else {
            Humidifier::On
        }
    }

    pub fn level(self) -> u16 {
        match self {
            Humidifier::Off => 0,
            Humidifier::On => INTENSITY_MAX,
        }
    }

    pub fn is_comfortable(self) -> bool {
        matches!(self, Humidifier::Off)
    }

    pub fn label(self) -> &'static str {
        match self {
            Humidifier::Off => "off",
            Humidifier::On => "on",
        }
    }
}

/// Face shown in the top-right quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    pub fn from_comfort(fan: FanSpeed, humidifier: Humidifier) -> Self {
        match (fan.is_comfortable(), humidifier.is_comfortable()) {
            (true, true) => Mood::Happy,
            (false, false) => Mood::Sad,
            _ => Mood::Neutral,
        }
    }
}

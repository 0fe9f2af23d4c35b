//! Screen definition
//!
//! The menu is a fixed cycle: Home, temperature thresholds, humidity
//! threshold, joystick calibration, then back to Home.

use crate::matrix::Icon;

/// Panel screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Live status: temperature, humidity, fan, humidifier and mood
    #[default]
    Home,
    /// Edit the three fan thresholds in turn
    SelectTemperature,
    /// Edit the humidifier threshold
    SelectHumidity,
    /// Run the joystick calibration procedure
    CalibrateJoystick,
}

impl Screen {
    /// Number of screens in the cycle
    pub const COUNT: u8 = 4;

    /// Screen for a raw index; anything outside `0..COUNT` recovers to Home
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => Screen::SelectTemperature,
            2 => Screen::SelectHumidity,
            3 => Screen::CalibrateJoystick,
            _ => Screen::Home,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Screen::Home => 0,
            Screen::SelectTemperature => 1,
            Screen::SelectHumidity => 2,
            Screen::CalibrateJoystick => 3,
        }
    }

    /// Next screen in the menu cycle
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Only Home listens to the low-water button
    pub fn accepts_secondary(self) -> bool {
        matches!(self, Screen::Home)
    }

    /// Screens that force both intensity outputs off on entry
    pub fn zeroes_outputs(self) -> bool {
        matches!(self, Screen::Home | Screen::CalibrateJoystick)
    }

    /// Matrix icon shown while this screen is active
    pub fn icon(self, latched: bool) -> Option<Icon> {
        match self {
            Screen::Home if latched => Some(Icon::Alert),
            Screen::Home => None,
            Screen::SelectTemperature => Some(Icon::Thermometer),
            Screen::SelectHumidity => Some(Icon::Droplet),
            Screen::CalibrateJoystick => Some(Icon::Crosshair),
        }
    }
}

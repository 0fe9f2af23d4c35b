//! BitDogLab board wiring
//!
//! Pin numbers are documentation for the `p.PIN_n` fields `main` hands to
//! the drivers; the PWM numbers configure the slices behind them.
//!
//! | Function            | GPIO | Peripheral        |
//! |---------------------|------|-------------------|
//! | Joystick VRy        | 26   | ADC0              |
//! | Joystick VRx        | 27   | ADC1              |
//! | Joystick switch     | 22   | input, falling    |
//! | Button A (confirm)  | 5    | input, polled     |
//! | Button B (secondary)| 6    | input, falling    |
//! | Blue LED            | 12   | PWM6 A            |
//! | Red LED             | 13   | PWM6 B            |
//! | Buzzer A            | 21   | PWM2 B            |
//! | Buzzer B            | 10   | PWM5 A            |
//! | OLED SDA / SCL      | 14/15| I2C1              |
//! | WS2812 matrix       | 7    | PIO0 SM0, DMA0    |

use embassy_rp::pwm::Config as PwmConfig;
use fixed::traits::ToFixed;

use ambiente_core::traits::INTENSITY_MAX;

/// OLED bus clock
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// RGB LED slice runs at the full system clock
pub const INTENSITY_DIVIDER: u8 = 1;

/// Buzzer slices: 125 MHz / 125 = 1 MHz counter
pub const BUZZER_DIVIDER: u8 = 125;
/// 1 MHz / 3823 ≈ 262 Hz (C4)
pub const BUZZER_A_TOP: u16 = 3822;
/// 1 MHz / 2025 ≈ 494 Hz (B4)
pub const BUZZER_B_TOP: u16 = 2024;

/// PWM config for the fan and humidifier indicators
pub fn intensity_pwm() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = INTENSITY_MAX;
    config.divider = INTENSITY_DIVIDER.to_fixed();
    config
}

/// PWM config for one buzzer, silent until the tone driver sets a duty
pub fn buzzer_pwm(top: u16) -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = top;
    config.divider = BUZZER_DIVIDER.to_fixed();
    config
}

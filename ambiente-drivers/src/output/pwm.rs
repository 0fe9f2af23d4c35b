//! PWM intensity output
//!
//! Maps the panel's 0..=4095 intensity scale onto any
//! `embedded_hal::pwm::SetDutyCycle` channel, independent of the
//! channel's own counter resolution.

use embedded_hal::pwm::SetDutyCycle;

use ambiente_core::traits::{IntensityOutput, INTENSITY_MAX};

/// Intensity output on one PWM channel
pub struct PwmIntensity<P> {
    pwm: P,
    level: u16,
}

impl<P: SetDutyCycle> PwmIntensity<P> {
    /// Wrap a PWM channel, starting switched off
    pub fn new(pwm: P) -> Self {
        let mut output = Self { pwm, level: 0 };
        output.set_level(0);
        output
    }

    /// Last level applied
    pub fn level(&self) -> u16 {
        self.level
    }
}

impl<P: SetDutyCycle> IntensityOutput for PwmIntensity<P> {
    fn set_level(&mut self, level: u16) {
        let level = level.min(INTENSITY_MAX);
        self.level = level;
        let _ = self.pwm.set_duty_cycle_fraction(level, INTENSITY_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    /// Channel with a 16-bit counter like the RP2040 slices
    struct MockPwm {
        max: u16,
        duty: u16,
    }

    impl ErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_starts_off() {
        let output = PwmIntensity::new(MockPwm {
            max: 4095,
            duty: 1234,
        });
        assert_eq!(output.pwm.duty, 0);
        assert_eq!(output.level(), 0);
    }

    #[test]
    fn test_levels_match_counter() {
        let mut output = PwmIntensity::new(MockPwm { max: 4095, duty: 0 });
        output.set_level(1365);
        assert_eq!(output.pwm.duty, 1365);
        output.set_level(4095);
        assert_eq!(output.pwm.duty, 4095);
    }

    #[test]
    fn test_rescales_to_channel_resolution() {
        let mut output = PwmIntensity::new(MockPwm { max: 1000, duty: 0 });
        output.set_level(4095);
        assert_eq!(output.pwm.duty, 1000);
        output.set_level(2730);
        assert_eq!(output.pwm.duty, 666);
    }

    #[test]
    fn test_level_clamped() {
        let mut output = PwmIntensity::new(MockPwm { max: 4095, duty: 0 });
        output.set_level(u16::MAX);
        assert_eq!(output.level(), 4095);
        assert_eq!(output.pwm.duty, 4095);
    }
}

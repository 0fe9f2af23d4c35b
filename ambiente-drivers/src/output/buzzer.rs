//! Dual passive buzzer tone player
//!
//! Two buzzers, each on a PWM slice pre-configured to its own pitch.
//! A beep alternates low, high, low, high, each for a quarter of the
//! requested duration, at 50% duty.

use embedded_hal::pwm::SetDutyCycle;
use embedded_hal_async::delay::DelayNs;

use ambiente_core::traits::Tone;

/// Tone player over two fixed-pitch PWM channels
pub struct DualBuzzer<A, B, D> {
    low: A,
    high: B,
    delay: D,
}

impl<A, B, D> DualBuzzer<A, B, D>
where
    A: SetDutyCycle,
    B: SetDutyCycle,
    D: DelayNs,
{
    /// `low` and `high` must already run at their pitch frequencies
    pub fn new(low: A, high: B, delay: D) -> Self {
        let mut buzzer = Self { low, high, delay };
        let _ = buzzer.low.set_duty_cycle_fully_off();
        let _ = buzzer.high.set_duty_cycle_fully_off();
        buzzer
    }
}

impl<A, B, D> Tone for DualBuzzer<A, B, D>
where
    A: SetDutyCycle,
    B: SetDutyCycle,
    D: DelayNs,
{
    async fn beep(&mut self, duration_ms: u32) {
        let quarter = duration_ms / 4;

        for _ in 0..2 {
            let _ = self.low.set_duty_cycle_percent(50);
            self.delay.delay_ms(quarter).await;
            let _ = self.low.set_duty_cycle_fully_off();

            let _ = self.high.set_duty_cycle_percent(50);
            self.delay.delay_ms(quarter).await;
            let _ = self.high.set_duty_cycle_fully_off();
        }
    }
}

//! PWM-driven outputs

pub mod buzzer;
pub mod pwm;

pub use buzzer::DualBuzzer;
pub use pwm::PwmIntensity;

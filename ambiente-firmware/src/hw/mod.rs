//! RP2040 adapters for the core traits

pub mod joystick;
pub mod ws2812;

pub use joystick::Joystick;
pub use ws2812::PioMatrixWriter;

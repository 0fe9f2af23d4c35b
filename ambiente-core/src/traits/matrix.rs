//! 5x5 RGB LED matrix sink

use core::future::Future;

/// Number of LEDs in the matrix
pub const MATRIX_LEDS: usize = 25;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }
}

/// Buffered LED matrix
///
/// `set_pixel` and `clear` only touch the buffer; `flush` pushes it out.
/// Indices are in strip order, see [`crate::matrix::led_index`].
pub trait MatrixSink {
    /// Set one LED; indices `>= MATRIX_LEDS` are ignored
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Turn every LED off
    fn clear(&mut self);

    /// Write the buffer to the LEDs
    fn flush(&mut self) -> impl Future<Output = ()>;
}

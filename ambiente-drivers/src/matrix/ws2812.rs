//! WS2812 LED matrix
//!
//! Keeps a 25-pixel buffer in strip order and hands it to a
//! [`PixelWriter`] on flush. The writer owns the timing-critical part
//! (PIO state machine, SPI trick, bit-bang); this type only buffers
//! colors.

use core::future::Future;

use ambiente_core::traits::matrix::MATRIX_LEDS;
use ambiente_core::traits::{MatrixSink, Rgb};

/// Low-level WS2812 strip output
pub trait PixelWriter {
    /// Send one complete frame, first element to the first LED
    fn write(&mut self, pixels: &[Rgb; MATRIX_LEDS]) -> impl Future<Output = ()>;
}

/// Buffered 5x5 WS2812 matrix
pub struct LedMatrix<W> {
    writer: W,
    pixels: [Rgb; MATRIX_LEDS],
}

impl<W: PixelWriter> LedMatrix<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [Rgb::OFF; MATRIX_LEDS],
        }
    }
}

impl<W: PixelWriter> MatrixSink for LedMatrix<W> {
    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn clear(&mut self) {
        self.pixels = [Rgb::OFF; MATRIX_LEDS];
    }

    async fn flush(&mut self) {
        self.writer.write(&self.pixels).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambiente_core::matrix::{led_index, Icon, MatrixExt};
    use embassy_futures::block_on;

    #[derive(Default)]
    struct MockWriter {
        frames: u32,
        last: Option<[Rgb; MATRIX_LEDS]>,
    }

    impl PixelWriter for MockWriter {
        async fn write(&mut self, pixels: &[Rgb; MATRIX_LEDS]) {
            self.frames += 1;
            self.last = Some(*pixels);
        }
    }

    #[test]
    fn test_buffer_until_flush() {
        let mut matrix = LedMatrix::new(MockWriter::default());
        matrix.set_pixel(3, Rgb::new(10, 0, 0));
        assert_eq!(matrix.writer.frames, 0);

        block_on(matrix.flush());
        let frame = matrix.writer.last.unwrap();
        assert_eq!(frame[3], Rgb::new(10, 0, 0));
        assert_eq!(frame[4], Rgb::OFF);
    }

    #[test]
    fn test_index_out_of_range_ignored() {
        let mut matrix = LedMatrix::new(MockWriter::default());
        matrix.set_pixel(25, Rgb::new(1, 1, 1));
        assert!(matrix.pixels.iter().all(|p| p.is_off()));
    }

    #[test]
    fn test_clear_sends_dark_frame() {
        let mut matrix = LedMatrix::new(MockWriter::default());
        matrix.set_pixel(0, Rgb::new(255, 100, 0));
        block_on(matrix.flush());
        matrix.clear();
        block_on(matrix.flush());
        assert_eq!(matrix.writer.frames, 2);
        assert!(matrix.writer.last.unwrap().iter().all(|p| p.is_off()));
    }

    #[test]
    fn test_icon_through_driver() {
        let mut matrix = LedMatrix::new(MockWriter::default());
        matrix.draw_icon(Icon::Alert);
        block_on(matrix.flush());
        let frame = matrix.writer.last.unwrap();
        assert!(!frame[led_index(0, 2)].is_off());
        assert!(frame[led_index(1, 2)].is_off());

        matrix.clear();
        block_on(matrix.flush());
        assert!(matrix.writer.last.unwrap().iter().all(|p| p.is_off()));
        assert_eq!(matrix.writer.frames, 2);
    }
}

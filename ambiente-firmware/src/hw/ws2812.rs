//! WS2812 output through the PIO0 program

use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812};
use smart_leds::RGB8;

use ambiente_core::traits::matrix::MATRIX_LEDS;
use ambiente_core::traits::Rgb;
use ambiente_drivers::matrix::PixelWriter;

/// State machine 0 of PIO0 driving the 5x5 matrix
pub struct PioMatrixWriter {
    ws2812: PioWs2812<'static, PIO0, 0, MATRIX_LEDS, Grb>,
}

impl PioMatrixWriter {
    pub fn new(ws2812: PioWs2812<'static, PIO0, 0, MATRIX_LEDS, Grb>) -> Self {
        Self { ws2812 }
    }
}

impl PixelWriter for PioMatrixWriter {
    async fn write(&mut self, pixels: &[Rgb; MATRIX_LEDS]) {
        let mut frame = [RGB8::default(); MATRIX_LEDS];
        for (out, pixel) in frame.iter_mut().zip(pixels.iter()) {
            *out = RGB8::new(pixel.r, pixel.g, pixel.b);
        }
        self.ws2812.write(&frame).await;
    }
}

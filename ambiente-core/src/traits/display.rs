//! Display sink trait for the 128x64 monochrome OLED

use core::future::Future;

use crate::assets::FaceBitmap;

/// Display width in pixels
pub const DISPLAY_WIDTH: i32 = 128;
/// Display height in pixels
pub const DISPLAY_HEIGHT: i32 = 64;

/// Errors that can occur with the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed (I2C NACK, arbitration loss)
    Bus,
}

/// Trait for a buffered monochrome display
///
/// Drawing calls only modify the frame buffer and cannot fail; out of
/// range coordinates are clipped. `flush` sends the buffer to the panel.
pub trait DisplaySink {
    /// Blank the frame buffer
    fn clear(&mut self);

    /// Draw text with its top-left corner at (`x`, `y`)
    fn draw_text(&mut self, text: &str, x: i32, y: i32);

    /// Draw a one pixel rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32);

    /// Draw a horizontal line from `x0` to `x1` inclusive
    fn hline(&mut self, x0: i32, x1: i32, y: i32);

    /// Draw a vertical line from `y0` to `y1` inclusive
    fn vline(&mut self, x: i32, y0: i32, y1: i32);

    fn set_pixel(&mut self, x: i32, y: i32, on: bool);

    /// Send the frame buffer to the display
    fn flush(&mut self) -> impl Future<Output = Result<(), DisplayError>>;
}

/// Helper trait for drawing common UI elements
pub trait DisplayExt: DisplaySink {
    /// Blit a face bitmap with its top-left corner at (`x`, `y`)
    fn draw_face(&mut self, face: &FaceBitmap, x: i32, y: i32) {
        for row in 0..FaceBitmap::SIZE {
            for col in 0..FaceBitmap::SIZE {
                self.set_pixel(x + col as i32, y + row as i32, face.pixel(col, row));
            }
        }
    }

    /// Double border with the quadrant dividers of the status layout
    fn draw_frame(&mut self) {
        self.draw_rect(0, 0, DISPLAY_WIDTH as u32, DISPLAY_HEIGHT as u32);
        self.draw_rect(2, 2, DISPLAY_WIDTH as u32 - 4, DISPLAY_HEIGHT as u32 - 4);
        self.vline(63, 3, 30);
        self.vline(64, 3, 30);
        self.hline(3, 124, 31);
        self.hline(3, 124, 32);
    }
}

// Blanket implementation for all DisplaySink types
impl<T: DisplaySink> DisplayExt for T {}

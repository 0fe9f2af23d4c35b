//! LED matrix layout and icons
//!
//! The 25 WS2812 LEDs are chained in a serpentine starting at the top
//! row. Callers address the matrix by (row, column) with row 0 at the
//! bottom and column 0 on the left.

use crate::assets::{
    IconBitmap, ICON_ALERT, ICON_CENTER, ICON_CROSSHAIR, ICON_DOWN, ICON_DROPLET, ICON_LEFT,
    ICON_RIGHT, ICON_THERMOMETER, ICON_UP,
};
use crate::traits::MatrixSink;

/// Rows and columns of the matrix
pub const MATRIX_SIZE: usize = 5;

/// Strip index of the LED at (`row`, `col`)
///
/// Even rows run right to left, odd rows left to right.
pub const fn led_index(row: usize, col: usize) -> usize {
    let col = if row % 2 == 0 {
        MATRIX_SIZE - 1 - col
    } else {
        col
    };
    (MATRIX_SIZE - 1 - row) * MATRIX_SIZE + col
}

/// Icons the panel shows on the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Icon {
    Up,
    Down,
    Left,
    Right,
    Center,
    /// Low-water warning
    Alert,
    Thermometer,
    Droplet,
    Crosshair,
}

impl Icon {
    pub fn bitmap(self) -> &'static IconBitmap {
        match self {
            Icon::Up => &ICON_UP,
            Icon::Down => &ICON_DOWN,
            Icon::Left => &ICON_LEFT,
            Icon::Right => &ICON_RIGHT,
            Icon::Center => &ICON_CENTER,
            Icon::Alert => &ICON_ALERT,
            Icon::Thermometer => &ICON_THERMOMETER,
            Icon::Droplet => &ICON_DROPLET,
            Icon::Crosshair => &ICON_CROSSHAIR,
        }
    }
}

/// Drawing helpers on top of [`MatrixSink`]
pub trait MatrixExt: MatrixSink {
    /// Replace the buffer contents with an icon
    fn draw_icon(&mut self, icon: Icon) {
        let bitmap = icon.bitmap();
        self.clear();
        for row in 0..MATRIX_SIZE {
            for col in 0..MATRIX_SIZE {
                if bitmap.lit(row, col) {
                    self.set_pixel(led_index(row, col), bitmap.color);
                }
            }
        }
    }
}

impl<T: MatrixSink> MatrixExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::matrix::MATRIX_LEDS;
    use crate::traits::Rgb;
    use proptest::prelude::*;

    struct MockMatrix {
        pixels: [Rgb; MATRIX_LEDS],
        flushes: u32,
    }

    impl MockMatrix {
        fn new() -> Self {
            Self {
                pixels: [Rgb::OFF; MATRIX_LEDS],
                flushes: 0,
            }
        }

        fn lit(&self) -> usize {
            self.pixels.iter().filter(|p| !p.is_off()).count()
        }
    }

    impl MatrixSink for MockMatrix {
        fn set_pixel(&mut self, index: usize, color: Rgb) {
            if let Some(p) = self.pixels.get_mut(index) {
                *p = color;
            }
        }

        fn clear(&mut self) {
            self.pixels = [Rgb::OFF; MATRIX_LEDS];
        }

        async fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn test_led_index_corners() {
        // Bottom row runs right to left at the end of the strip
        assert_eq!(led_index(0, 0), 24);
        assert_eq!(led_index(0, 4), 20);
        assert_eq!(led_index(1, 0), 15);
        assert_eq!(led_index(1, 4), 19);
        assert_eq!(led_index(4, 0), 4);
        assert_eq!(led_index(4, 4), 0);
    }

    #[test]
    fn test_draw_icon() {
        let mut matrix = MockMatrix::new();
        matrix.draw_icon(Icon::Up);
        assert_eq!(matrix.lit(), 9);
        // Tip of the arrow, top row center
        assert_eq!(matrix.pixels[led_index(4, 2)], ICON_UP.color);
        assert!(matrix.pixels[led_index(4, 0)].is_off());
    }

    #[test]
    fn test_draw_icon_replaces_previous() {
        let mut matrix = MockMatrix::new();
        matrix.draw_icon(Icon::Droplet);
        matrix.draw_icon(Icon::Alert);
        assert_eq!(matrix.lit(), 4);
        assert_eq!(matrix.flushes, 0);
    }

    proptest! {
        #[test]
        fn led_index_in_range(row in 0usize..5, col in 0usize..5) {
            prop_assert!(led_index(row, col) < MATRIX_LEDS);
        }

        #[test]
        fn led_index_is_unique(a in 0usize..25, b in 0usize..25) {
            let (ra, ca) = (a / 5, a % 5);
            let (rb, cb) = (b / 5, b % 5);
            prop_assert_eq!(led_index(ra, ca) == led_index(rb, cb), a == b);
        }
    }
}

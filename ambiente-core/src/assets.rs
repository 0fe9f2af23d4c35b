//! Static bitmap assets
//!
//! 22x22 mood faces for the OLED and 5x5 icons for the LED matrix.
//! Rows are listed top row first; the most significant used bit is the
//! leftmost pixel.

use crate::classify::Mood;
use crate::traits::Rgb;

/// 22x22 monochrome face
pub struct FaceBitmap {
    rows: [u32; FaceBitmap::SIZE],
}

impl FaceBitmap {
    /// Width and height in pixels
    pub const SIZE: usize = 22;

    /// Whether the pixel at (`col`, `row`) is lit
    pub fn pixel(&self, col: usize, row: usize) -> bool {
        if col >= Self::SIZE || row >= Self::SIZE {
            return false;
        }
        self.rows[row] & (1 << (Self::SIZE - 1 - col)) != 0
    }
}

pub static FACE_HAPPY: FaceBitmap = FaceBitmap {
    rows: [
        0b0000000011111100000000,
        0b0000001111111111000000,
        0b0000111100000011110000,
        0b0001110000000000111000,
        0b0011100000000000011100,
        0b0011000000000000001100,
        0b0110000000000000000110,
        0b0110000110000110000110,
        0b1100000110000110000011,
        0b1100000000000000000011,
        0b1100000000000000000011,
        0b1100000000000000000011,
        0b1100000000000000000011,
        0b1100001100000011000011,
        0b0110000110000110000110,
        0b0110000011111100000110,
        0b0011000000000000001100,
        0b0011100000000000011100,
        0b0001110000000000111000,
        0b0000111100000011110000,
        0b0000001111111111000000,
        0b0000000011111100000000,
    ],
};

pub static FACE_NEUTRAL: FaceBitmap = FaceBitmap {
    rows: [
        0b0000000011111100000000,
        0b0000001111111111000000,
        0b0000111100000011110000,
        0b0001110000000000111000,
        0b0011100000000000011100,
        0b0011000000000000001100,
        0b0110000000000000000110,
        0b0110000110000110000110,
        0b1100000110000110000011,
        0b1100000000000000000011,
        0b1100000000000000000011,
        0b1100000000000000000011,
        0b1100000000000000000011,
        0b1100000000000000000011,
        0b0110000011111100000110,
        0b0110000000000000000110,
        0b0011000000000000001100,
        0b0011100000000000011100,
        0b0001110000000000111000,
        0b0000111100000011110000,
        0b0000001111111111000000,
        0b0000000011111100000000,
    ],
};

pub static FACE_SAD: FaceBitmap = FaceBitmap {
    rows: [
        0b0000000011111100000000,
        0b0000001111111111000000,
        0b0000111100000011110000,
        0b0001110000000000111000,
        0b0011100000000000011100,
        0b0011000000000000001100,
        0b0110000000000000000110,
        0b0110000110000110000110,
        0b1100000110000110000011,
        0b1100000000000000000011,
        0b1100000000000000000011,
        0b1100000000000000000011,
        0b1100000000000000000011,
        0b1100000011111100000011,
        0b0110000110000110000110,
        0b0110001100000011000110,
        0b0011000000000000001100,
        0b0011100000000000011100,
        0b0001110000000000111000,
        0b0000111100000011110000,
        0b0000001111111111000000,
        0b0000000011111100000000,
    ],
};

pub fn face(mood: Mood) -> &'static FaceBitmap {
    match mood {
        Mood::Happy => &FACE_HAPPY,
        Mood::Neutral => &FACE_NEUTRAL,
        Mood::Sad => &FACE_SAD,
    }
}

/// Single-color 5x5 matrix icon
pub struct IconBitmap {
    pub color: Rgb,
    /// Five rows, top first; bit 4 is the leftmost column
    pub rows: [u8; 5],
}

impl IconBitmap {
    /// Whether the LED at (`row`, `col`) is lit, with row 0 at the bottom
    pub fn lit(&self, row: usize, col: usize) -> bool {
        if row >= 5 || col >= 5 {
            return false;
        }
        self.rows[4 - row] & (1 << (4 - col)) != 0
    }
}

const ARROW: Rgb = Rgb::new(0, 24, 0);

pub static ICON_UP: IconBitmap = IconBitmap {
    color: ARROW,
    rows: [0b00100, 0b01110, 0b10101, 0b00100, 0b00100],
};

pub static ICON_DOWN: IconBitmap = IconBitmap {
    color: ARROW,
    rows: [0b00100, 0b00100, 0b10101, 0b01110, 0b00100],
};

pub static ICON_LEFT: IconBitmap = IconBitmap {
    color: ARROW,
    rows: [0b00100, 0b01000, 0b11111, 0b01000, 0b00100],
};

pub static ICON_RIGHT: IconBitmap = IconBitmap {
    color: ARROW,
    rows: [0b00100, 0b00010, 0b11111, 0b00010, 0b00100],
};

pub static ICON_CENTER: IconBitmap = IconBitmap {
    color: Rgb::new(12, 12, 12),
    rows: [0b00000, 0b01110, 0b01010, 0b01110, 0b00000],
};

pub static ICON_ALERT: IconBitmap = IconBitmap {
    color: Rgb::new(40, 0, 0),
    rows: [0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
};

pub static ICON_THERMOMETER: IconBitmap = IconBitmap {
    color: Rgb::new(32, 8, 0),
    rows: [0b00100, 0b00100, 0b00100, 0b01110, 0b01110],
};

pub static ICON_DROPLET: IconBitmap = IconBitmap {
    color: Rgb::new(0, 0, 40),
    rows: [0b00100, 0b01110, 0b11111, 0b11111, 0b01110],
};

pub static ICON_CROSSHAIR: IconBitmap = IconBitmap {
    color: Rgb::new(24, 24, 0),
    rows: [0b00100, 0b00100, 0b11011, 0b00100, 0b00100],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_outline_symmetric() {
        for face in [&FACE_HAPPY, &FACE_NEUTRAL, &FACE_SAD] {
            for row in 0..FaceBitmap::SIZE {
                for col in 0..FaceBitmap::SIZE {
                    assert_eq!(
                        face.pixel(col, row),
                        face.pixel(FaceBitmap::SIZE - 1 - col, row)
                    );
                }
            }
        }
    }

    #[test]
    fn test_faces_differ_only_in_mouth() {
        for row in (0..13).chain(16..FaceBitmap::SIZE) {
            assert_eq!(FACE_HAPPY.rows[row], FACE_NEUTRAL.rows[row]);
            assert_eq!(FACE_HAPPY.rows[row], FACE_SAD.rows[row]);
        }
    }

    #[test]
    fn test_mouth_rows() {
        // Smile: corners up on row 13, curve bottoms out on row 15
        assert_eq!(FACE_HAPPY.rows[13], 0b1100001100000011000011);
        assert_eq!(FACE_HAPPY.rows[15], 0b0110000011111100000110);
        // Flat mouth on row 14
        assert_eq!(FACE_NEUTRAL.rows[13], 0b1100000000000000000011);
        assert_eq!(FACE_NEUTRAL.rows[14], 0b0110000011111100000110);
        // Frown: top of the curve on row 13, corners down on row 15
        assert_eq!(FACE_SAD.rows[13], 0b1100000011111100000011);
        assert_eq!(FACE_SAD.rows[15], 0b0110001100000011000110);
        assert_ne!(FACE_HAPPY.rows[15], FACE_SAD.rows[15]);
    }

    #[test]
    fn test_outline_rows() {
        assert_eq!(FACE_HAPPY.rows[0], 0b0000000011111100000000);
        assert_eq!(FACE_HAPPY.rows[21], 0b0000000011111100000000);
        // Eyes
        assert!(FACE_HAPPY.pixel(7, 7) && FACE_HAPPY.pixel(14, 8));
        assert!(!FACE_HAPPY.pixel(10, 7));
    }

    #[test]
    fn test_face_pixel_clipping() {
        assert!(!FACE_HAPPY.pixel(22, 0));
        assert!(!FACE_HAPPY.pixel(0, 22));
        assert!(FACE_HAPPY.pixel(10, 0));
    }

    #[test]
    fn test_icon_orientation() {
        // Arrow tip at the top row, which is row 4 counted from the bottom
        assert!(ICON_UP.lit(4, 2));
        assert!(!ICON_UP.lit(4, 0));
        assert!(ICON_DOWN.lit(0, 2));
        assert!(ICON_LEFT.lit(2, 0));
        assert!(ICON_LEFT.lit(3, 1));
        assert!(ICON_RIGHT.lit(3, 3));
        assert!(!ICON_ALERT.lit(1, 2));
        assert!(ICON_ALERT.lit(0, 2));
    }
}

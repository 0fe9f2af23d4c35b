//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via async I2C.
//! Drawing goes into a page-organized frame buffer through
//! embedded-graphics; [`DisplaySink::flush`] sends the whole buffer.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal_async::i2c::I2c;

use ambiente_core::traits::{DisplayError, DisplaySink};

/// Default SSD1306 I2C address (0x3D with SA0 high)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C> Ssd1306<I2C> {
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Whether a pixel is set in the frame buffer
    pub fn is_lit(&self, x: i32, y: i32) -> bool {
        match Self::locate(x, y) {
            Some((page, col, bit)) => self.buffer[page][col] & bit != 0,
            None => false,
        }
    }

    /// Page, column and bit mask of a pixel, or `None` if off-screen
    fn locate(x: i32, y: i32) -> Option<(usize, usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y / 8, x, 1 << (y % 8)))
    }

    fn put(&mut self, x: i32, y: i32, on: bool) {
        if let Some((page, col, bit)) = Self::locate(x, y) {
            if on {
                self.buffer[page][col] |= bit;
            } else {
                self.buffer[page][col] &= !bit;
            }
        }
    }

    fn stroke() -> PrimitiveStyle<BinaryColor> {
        PrimitiveStyle::with_stroke(BinaryColor::On, 1)
    }
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEMORY_MODE,
            0x02,                  // Page addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::RESUME_FROM_RAM,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .await
            .map_err(|_| DisplayError::Bus)
    }
}

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.put(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

impl<I2C: I2c> DisplaySink for Ssd1306<I2C> {
    fn clear(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let _ = Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self);
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let _ = Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(Self::stroke())
            .draw(self);
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32) {
        let _ = Line::new(Point::new(x0, y), Point::new(x1, y))
            .into_styled(Self::stroke())
            .draw(self);
    }

    fn vline(&mut self, x: i32, y0: i32, y1: i32) {
        let _ = Line::new(Point::new(x, y0), Point::new(x, y1))
            .into_styled(Self::stroke())
            .draw(self);
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.put(x, y, on);
    }

    async fn flush(&mut self) -> Result<(), DisplayError> {
        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;

        for page in 0..PAGES {
            self.i2c
                .write(
                    self.address,
                    &[
                        CONTROL_COMMAND,
                        cmd::SET_PAGE_ADDR | page as u8,
                        cmd::SET_LOW_COLUMN,
                        cmd::SET_HIGH_COLUMN,
                    ],
                )
                .await
                .map_err(|_| DisplayError::Bus)?;

            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c
                .write(self.address, &data)
                .await
                .map_err(|_| DisplayError::Bus)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal_async::i2c::{ErrorKind, ErrorType, Operation};

    #[derive(Default)]
    struct MockI2c {
        writes: u32,
        data_bytes: usize,
        lit_bits: u32,
        last_address: Option<u8>,
        fail: bool,
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), ErrorKind> {
            if self.fail {
                return Err(ErrorKind::Bus);
            }
            self.last_address = Some(address);
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    self.writes += 1;
                    if bytes.first() == Some(&CONTROL_DATA) {
                        self.data_bytes += bytes.len() - 1;
                        self.lit_bits += bytes[1..].iter().map(|b| b.count_ones()).sum::<u32>();
                    }
                }
            }
            Ok(())
        }
    }

    fn display() -> Ssd1306<MockI2c> {
        Ssd1306::new(MockI2c::default(), SSD1306_ADDR)
    }

    #[test]
    fn test_init_sends_commands() {
        let mut oled = display();
        block_on(oled.init()).unwrap();
        assert_eq!(oled.i2c.writes, 25);
        assert_eq!(oled.i2c.last_address, Some(SSD1306_ADDR));
    }

    #[test]
    fn test_set_pixel() {
        let mut oled = display();
        oled.set_pixel(10, 9, true);
        assert!(oled.is_lit(10, 9));
        assert_eq!(oled.buffer[1][10], 0b0000_0010);
        oled.set_pixel(10, 9, false);
        assert!(!oled.is_lit(10, 9));
    }

    #[test]
    fn test_out_of_bounds_clipped() {
        let mut oled = display();
        oled.set_pixel(-1, 0, true);
        oled.set_pixel(128, 0, true);
        oled.set_pixel(0, 64, true);
        assert!(oled.buffer.iter().all(|page| page.iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_primitives() {
        let mut oled = display();
        oled.draw_rect(0, 0, 128, 64);
        assert!(oled.is_lit(0, 0));
        assert!(oled.is_lit(127, 63));
        assert!(!oled.is_lit(1, 1));

        oled.vline(63, 3, 30);
        assert!(oled.is_lit(63, 3));
        assert!(oled.is_lit(63, 30));
        assert!(!oled.is_lit(63, 31));

        oled.hline(3, 124, 31);
        assert!(oled.is_lit(3, 31));
        assert!(oled.is_lit(124, 31));
        assert!(!oled.is_lit(125, 31));
    }

    #[test]
    fn test_text_and_clear() {
        let mut oled = display();
        oled.draw_text("T: 17C*", 6, 7);
        let lit = (6..48).any(|x| (7..17).any(|y| oled.is_lit(x, y)));
        assert!(lit);
        assert!(!oled.is_lit(5, 7));

        DisplaySink::clear(&mut oled);
        assert!(oled.buffer.iter().all(|page| page.iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_flush_sends_all_pages() {
        let mut oled = display();
        oled.set_pixel(0, 0, true);
        oled.set_pixel(127, 63, true);
        block_on(oled.flush()).unwrap();
        // One command write and one data write per page
        assert_eq!(oled.i2c.writes, 16);
        assert_eq!(oled.i2c.data_bytes, 1024);
        assert_eq!(oled.i2c.lit_bits, 2);
    }

    #[test]
    fn test_flush_bus_error() {
        let mut oled = display();
        oled.i2c.fail = true;
        assert_eq!(block_on(oled.flush()), Err(DisplayError::Bus));
        assert_eq!(block_on(oled.init()), Err(DisplayError::Bus));
    }
}

//! Addressable LED matrix drivers

pub mod ws2812;

pub use ws2812::{LedMatrix, PixelWriter};

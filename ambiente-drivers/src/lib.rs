//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in ambiente-core for the front panel hardware:
//!
//! - SSD1306 OLED over async I2C (embedded-graphics rendering)
//! - WS2812 5x5 LED matrix buffer
//! - PWM intensity outputs (RGB LED channels)
//! - Dual passive buzzer tone player

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod matrix;
pub mod output;

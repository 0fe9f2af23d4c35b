//! Board-agnostic core logic for the environmental control panel
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (joystick, display, LED matrix, outputs)
//! - Range mapping and comfort classification
//! - Joystick calibration engine
//! - Debounced input routing shared with interrupt context
//! - Screen state machine and the panel controller
//! - Configuration types and the `panel.toml` parser

#![no_std]
#![deny(unsafe_code)]

pub mod assets;
pub mod calibration;
pub mod classify;
pub mod config;
pub mod input;
pub mod matrix;
pub mod panel;
pub mod scale;
pub mod state;
pub mod traits;

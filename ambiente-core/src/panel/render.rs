//! Screen layouts
//!
//! Status screens share one layout: a double border, a divider splitting
//! the top half into two quadrants, readings on the left and the mood face
//! on the right, then the fan and humidifier lines across the bottom.

use core::fmt::Write;

use heapless::String;

use crate::assets::face;
use crate::calibration::CalibrationStep;
use crate::classify::Mood;
use crate::traits::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::traits::{Axis, DisplayExt, DisplaySink};

/// Left margin of every text row
pub const TEXT_X: i32 = 6;
/// Text row baselines (top edge), top to bottom
pub const ROW_Y: [i32; 4] = [7, 20, 37, 50];
/// Top-left corner of the mood face
pub const FACE_ORIGIN: (i32, i32) = (84, 6);

const LINE_LEN: usize = 21;

/// Fields of a status screen; `None` leaves the value blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub temperature: Option<i32>,
    pub humidity: Option<i32>,
    pub fan: Option<&'static str>,
    pub humidifier: Option<&'static str>,
    pub mood: Mood,
}

/// Draw a status screen into the frame buffer
pub fn status<D: DisplaySink>(display: &mut D, view: &StatusView) {
    display.clear();
    display.draw_frame();

    let mut line: String<LINE_LEN> = String::new();

    let _ = line.push_str("T:");
    if let Some(t) = view.temperature {
        let _ = write!(line, "{:3}C*", t);
    }
    display.draw_text(&line, TEXT_X, ROW_Y[0]);

    line.clear();
    let _ = line.push_str("U:");
    if let Some(h) = view.humidity {
        let _ = write!(line, "{:3}%", h);
    }
    display.draw_text(&line, TEXT_X, ROW_Y[1]);

    line.clear();
    let _ = write!(line, "fan:{}", view.fan.unwrap_or(""));
    display.draw_text(&line, TEXT_X, ROW_Y[2]);

    line.clear();
    let _ = write!(line, "humidifier:{}", view.humidifier.unwrap_or(""));
    display.draw_text(&line, TEXT_X, ROW_Y[3]);

    let (x, y) = FACE_ORIGIN;
    display.draw_face(face(view.mood), x, y);
}

fn border<D: DisplaySink>(display: &mut D) {
    display.clear();
    display.draw_rect(0, 0, DISPLAY_WIDTH as u32, DISPLAY_HEIGHT as u32);
    display.draw_rect(2, 2, DISPLAY_WIDTH as u32 - 4, DISPLAY_HEIGHT as u32 - 4);
}

/// Instructions shown while waiting for the user to start calibration
pub fn calibration_idle<D: DisplaySink>(display: &mut D) {
    border(display);
    display.draw_text("Joystick", TEXT_X, ROW_Y[0]);
    display.draw_text("calibration", TEXT_X, ROW_Y[1]);
    display.draw_text("follow the matrix", TEXT_X, ROW_Y[2]);
    display.draw_text("press A to start", TEXT_X, ROW_Y[3]);
}

/// Current step while calibration runs
pub fn calibration_step<D: DisplaySink>(display: &mut D, axis: Axis, step: &CalibrationStep) {
    border(display);
    display.draw_text("Calibrating", TEXT_X, ROW_Y[0]);

    let mut line: String<LINE_LEN> = String::new();
    let axis_name = match axis {
        Axis::X => "X",
        Axis::Y => "Y",
    };
    let _ = write!(line, "axis {}", axis_name);
    display.draw_text(&line, TEXT_X, ROW_Y[1]);

    line.clear();
    let _ = write!(line, "hold: {}", step.prompt);
    display.draw_text(&line, TEXT_X, ROW_Y[2]);
}

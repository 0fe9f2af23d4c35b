//! Polled button press detection

/// Turns a polled active level into debounced press events
///
/// A press is reported on the released-to-pressed transition, and only if
/// more than the debounce window has passed since the last reported press.
/// Holding the button reports nothing further.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressDetector {
    was_pressed: bool,
    last_press_ms: Option<u32>,
}

impl PressDetector {
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_press_ms: None,
        }
    }

    /// Take `pressed` as the current level without reporting a press
    ///
    /// A button already held when polling starts then has to be released
    /// before it counts.
    pub fn reseed(&mut self, pressed: bool) {
        self.was_pressed = pressed;
    }

    /// Feed the current level; returns `true` on a confirmed press
    pub fn poll(&mut self, pressed: bool, now_ms: u32, debounce_ms: u32) -> bool {
        let rising = pressed && !self.was_pressed;
        self.was_pressed = pressed;

        if !rising {
            return false;
        }

        if let Some(last) = self.last_press_ms {
            if now_ms.wrapping_sub(last) <= debounce_ms {
                return false;
            }
        }

        self.last_press_ms = Some(now_ms);
        true
    }
}

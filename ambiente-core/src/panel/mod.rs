//! Panel controller
//!
//! [`Panel`] is the single owned device context: it holds the hardware
//! handles, the active screen, thresholds, calibrations and the low-water
//! latch. Only the poll loop touches it. The edge task talks to it
//! exclusively through the shared [`InputRouter`].
//!
//! One call to [`Panel::tick`] runs the active screen's update, then
//! drains the secondary flag, then the advance flag.

pub mod render;

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

use crate::calibration::{CalibrationStep, Calibrator, StepPrompt};
use crate::classify::{FanSpeed, FanStep, Humidifier, Mood};
use crate::config::{AxisCalibration, PanelConfig, Thresholds};
use crate::input::{EdgeSource, InputRouter, PressDetector};
use crate::matrix::MatrixExt;
use crate::state::{PanelEvent, Screen};
use crate::traits::{
    AnalogInput, Axis, DisplayError, DisplaySink, IntensityOutput, MatrixSink, Tone,
    INTENSITY_MAX,
};

use render::StatusView;

/// Events produced by one tick
pub type Events = Vec<PanelEvent, 8>;

/// Hardware handles the panel drives
pub struct Devices<J, C, D, M, F, H, T, W> {
    /// Two-axis joystick
    pub joystick: J,
    /// Confirm button A, active low
    pub confirm: C,
    pub display: D,
    pub matrix: M,
    /// Fan indicator (red LED)
    pub fan: F,
    /// Humidifier indicator (blue LED)
    pub humidifier: H,
    pub tone: T,
    /// Delay source for calibration windows
    pub delay: W,
}

/// Shows each calibration step on the display and keeps the first fault
struct DisplayPrompt<'a, D> {
    display: &'a mut D,
    fault: Option<DisplayError>,
}

impl<D: DisplaySink> StepPrompt for DisplayPrompt<'_, D> {
    async fn show(&mut self, axis: Axis, step: &CalibrationStep) {
        render::calibration_step(self.display, axis, step);
        if let Err(e) = self.display.flush().await {
            self.fault.get_or_insert(e);
        }
    }
}

/// Panel device context
pub struct Panel<J, C, D, M, F, H, T, W> {
    dev: Devices<J, C, D, M, F, H, T, W>,
    config: PanelConfig,
    screen: Screen,
    thresholds: Thresholds,
    x_axis: AxisCalibration,
    y_axis: AxisCalibration,
    /// Low-water latch
    latched: bool,
    /// Fan threshold edited next on the temperature screen
    fan_step: u8,
    temperature_press: PressDetector,
    humidity_press: PressDetector,
    calibrate_press: PressDetector,
}

impl<J, C, D, M, F, H, T, W> Panel<J, C, D, M, F, H, T, W>
where
    J: AnalogInput,
    C: InputPin,
    D: DisplaySink,
    M: MatrixSink,
    F: IntensityOutput,
    H: IntensityOutput,
    T: Tone,
    W: DelayNs,
{
    pub fn new(dev: Devices<J, C, D, M, F, H, T, W>, config: PanelConfig) -> Self {
        Self {
            dev,
            config,
            screen: Screen::Home,
            thresholds: config.thresholds,
            x_axis: config.x_axis,
            y_axis: config.y_axis,
            latched: false,
            fan_step: 0,
            temperature_press: PressDetector::new(),
            humidity_press: PressDetector::new(),
            calibrate_press: PressDetector::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn calibration(&self, axis: Axis) -> &AxisCalibration {
        match axis {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
        }
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    pub fn fan_step(&self) -> u8 {
        self.fan_step
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn devices(&self) -> &Devices<J, C, D, M, F, H, T, W> {
        &self.dev
    }

    pub fn devices_mut(&mut self) -> &mut Devices<J, C, D, M, F, H, T, W> {
        &mut self.dev
    }

    /// Apply the configured debounce window and run Home's entry actions
    pub async fn start(&mut self, router: &InputRouter) -> Events {
        router.set_debounce_ms(self.config.timing.debounce_ms);
        let mut events = Events::new();
        self.enter(Screen::Home, router, &mut events).await;
        events
    }

    /// Run one poll loop iteration
    pub async fn tick(&mut self, router: &InputRouter, now_ms: u32) -> Events {
        let mut events = Events::new();

        match self.screen {
            Screen::Home => self.update_home(&mut events).await,
            Screen::SelectTemperature => self.update_temperature(now_ms, &mut events).await,
            Screen::SelectHumidity => self.update_humidity(now_ms, &mut events).await,
            Screen::CalibrateJoystick => self.update_calibrate(router, now_ms, &mut events).await,
        }

        if router.take_secondary() {
            self.toggle_latch(&mut events).await;
        }

        if router.take_advance() {
            let next = self.screen.next();
            self.enter(next, router, &mut events).await;
        }

        events
    }

    /// Entry actions for a new screen
    async fn enter(&mut self, screen: Screen, router: &InputRouter, events: &mut Events) {
        self.screen = screen;

        router.set_enabled(EdgeSource::Secondary, screen.accepts_secondary());

        if screen.zeroes_outputs() {
            self.dev.fan.set_level(0);
            self.dev.humidifier.set_level(0);
        }

        if screen == Screen::SelectTemperature {
            self.fan_step = 0;
        }

        // A held button A carries over as held, not as a fresh press
        let pressed = self.confirm_pressed();
        match screen {
            Screen::Home => {}
            Screen::SelectTemperature => self.temperature_press.reseed(pressed),
            Screen::SelectHumidity => self.humidity_press.reseed(pressed),
            Screen::CalibrateJoystick => self.calibrate_press.reseed(pressed),
        }

        self.show_screen_icon().await;

        let _ = events.push(PanelEvent::ScreenEntered(screen));
    }

    async fn show_screen_icon(&mut self) {
        match self.screen.icon(self.latched) {
            Some(icon) => self.dev.matrix.draw_icon(icon),
            None => self.dev.matrix.clear(),
        }
        self.dev.matrix.flush().await;
    }

    async fn toggle_latch(&mut self, events: &mut Events) {
        self.latched = !self.latched;

        if self.latched {
            self.show_screen_icon().await;
            self.dev.tone.beep(self.config.tones.alert_ms).await;
        } else {
            self.dev.matrix.clear();
            self.dev.matrix.flush().await;
        }

        let _ = events.push(PanelEvent::LatchToggled(self.latched));
    }

    fn confirm_pressed(&mut self) -> bool {
        matches!(self.dev.confirm.is_low(), Ok(true))
    }

    async fn read(&mut self, axis: Axis) -> i32 {
        let raw = self.dev.joystick.read_raw(axis).await;
        match axis {
            Axis::X => self.config.humidity.map(&self.x_axis, raw),
            Axis::Y => self.config.temperature.map(&self.y_axis, raw),
        }
    }

    async fn flush_display(&mut self, events: &mut Events) {
        if let Err(e) = self.dev.display.flush().await {
            let _ = events.push(PanelEvent::DisplayFault(e));
        }
    }

    async fn update_home(&mut self, events: &mut Events) {
        let temperature = self.read(Axis::Y).await;
        let humidity = self.read(Axis::X).await;

        let fan = FanSpeed::classify(temperature, &self.thresholds);
        let humidifier = Humidifier::classify(humidity, &self.thresholds);

        self.dev.fan.set_level(fan.level());
        self.dev.humidifier.set_level(humidifier.level());

        render::status(
            &mut self.dev.display,
            &StatusView {
                temperature: Some(temperature),
                humidity: Some(humidity),
                fan: Some(fan.label()),
                humidifier: Some(humidifier.label()),
                mood: Mood::from_comfort(fan, humidifier),
            },
        );
        self.flush_display(events).await;
    }

    async fn update_temperature(&mut self, now_ms: u32, events: &mut Events) {
        let step = match FanStep::from_counter(self.fan_step) {
            Some(step) => step,
            None => {
                self.fan_step = 0;
                FanStep::Low
            }
        };

        let temperature = self.read(Axis::Y).await;
        let preview = step.preview();

        self.dev.fan.set_level(preview.level());
        self.dev.humidifier.set_level(0);

        render::status(
            &mut self.dev.display,
            &StatusView {
                temperature: Some(temperature),
                humidity: None,
                fan: Some(preview.label()),
                humidifier: None,
                mood: step.mood(),
            },
        );
        self.flush_display(events).await;

        let pressed = self.confirm_pressed();
        let debounce_ms = self.config.timing.debounce_ms;
        if self.temperature_press.poll(pressed, now_ms, debounce_ms) {
            self.thresholds.set_fan(step, temperature);
            self.fan_step += 1;
            let _ = events.push(PanelEvent::FanThresholdCommitted {
                step,
                value: temperature,
            });
            self.dev.tone.beep(self.config.tones.confirm_ms).await;
        }
    }

    async fn update_humidity(&mut self, now_ms: u32, events: &mut Events) {
        let humidity = self.read(Axis::X).await;

        self.dev.fan.set_level(0);
        self.dev.humidifier.set_level(INTENSITY_MAX);

        render::status(
            &mut self.dev.display,
            &StatusView {
                temperature: None,
                humidity: Some(humidity),
                fan: None,
                humidifier: Some(Humidifier::On.label()),
                mood: Mood::Sad,
            },
        );
        self.flush_display(events).await;

        let pressed = self.confirm_pressed();
        let debounce_ms = self.config.timing.debounce_ms;
        if self.humidity_press.poll(pressed, now_ms, debounce_ms) {
            self.thresholds.humidifier_on = humidity;
            let _ = events.push(PanelEvent::HumidifierThresholdCommitted(humidity));
            self.dev.tone.beep(self.config.tones.confirm_ms).await;
        }
    }

    async fn update_calibrate(&mut self, router: &InputRouter, now_ms: u32, events: &mut Events) {
        render::calibration_idle(&mut self.dev.display);
        self.flush_display(events).await;

        let pressed = self.confirm_pressed();
        let debounce_ms = self.config.timing.debounce_ms;
        if !self.calibrate_press.poll(pressed, now_ms, debounce_ms) {
            return;
        }

        router.set_enabled(EdgeSource::Menu, false);
        self.calibrate(events).await;
        router.set_enabled(EdgeSource::Menu, true);

        self.show_screen_icon().await;
    }

    /// Full calibration, vertical axis first
    async fn calibrate(&mut self, events: &mut Events) {
        let calibrator = Calibrator::new(&self.config.timing);
        let mut prompt = DisplayPrompt {
            display: &mut self.dev.display,
            fault: None,
        };

        for axis in [Axis::Y, Axis::X] {
            let result = calibrator
                .calibrate_axis(
                    axis,
                    &mut self.dev.joystick,
                    &mut self.dev.matrix,
                    &mut self.dev.delay,
                    &mut prompt,
                )
                .await;

            if result.is_usable() {
                match axis {
                    Axis::X => self.x_axis = result,
                    Axis::Y => self.y_axis = result,
                }
                let _ = events.push(PanelEvent::Calibrated {
                    axis,
                    calibration: result,
                });
            } else {
                let _ = events.push(PanelEvent::CalibrationRejected(axis));
            }
        }

        if let Some(e) = prompt.fault {
            let _ = events.push(PanelEvent::DisplayFault(e));
        }
    }
}

//! Joystick calibration engine
//!
//! Guides the user through four positions per axis (extreme, center,
//! opposite extreme, center) and samples the axis over a fixed window at
//! each one. A window keeps either the running minimum or the running
//! maximum, which becomes one bound of the new [`AxisCalibration`].
//!
//! The procedure is strictly sequential: every settle period and sample
//! interval is awaited in place, so nothing else runs on the poll loop
//! until it returns.

use core::future::Future;

use embedded_hal_async::delay::DelayNs;

use crate::config::{AxisCalibration, Bound, Timing};
use crate::matrix::{Icon, MatrixExt};
use crate::traits::{AnalogInput, Axis, MatrixSink};

/// Which running extreme a window keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Extremum {
    Min,
    Max,
}

impl Extremum {
    fn seed(self) -> u16 {
        match self {
            Extremum::Min => u16::MAX,
            Extremum::Max => u16::MIN,
        }
    }

    fn fold(self, acc: u16, sample: u16) -> u16 {
        match self {
            Extremum::Min => acc.min(sample),
            Extremum::Max => acc.max(sample),
        }
    }
}

/// One sampling window of the procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationStep {
    /// Direction shown on the matrix
    pub icon: Icon,
    /// Short instruction for the display
    pub prompt: &'static str,
    pub extremum: Extremum,
    /// Bound the window result is stored in
    pub bound: Bound,
}

const fn step(
    icon: Icon,
    prompt: &'static str,
    extremum: Extremum,
    bound: Bound,
) -> CalibrationStep {
    CalibrationStep {
        icon,
        prompt,
        extremum,
        bound,
    }
}

/// Vertical axis: pushing up lowers the reading
pub const Y_PLAN: [CalibrationStep; 4] = [
    step(Icon::Up, "up", Extremum::Min, Bound::Low),
    step(Icon::Center, "center", Extremum::Min, Bound::MiddleLow),
    step(Icon::Down, "down", Extremum::Max, Bound::High),
    step(Icon::Center, "center", Extremum::Max, Bound::MiddleHigh),
];

/// Horizontal axis, mirrored: pushing right lowers the reading
pub const X_PLAN: [CalibrationStep; 4] = [
    step(Icon::Right, "right", Extremum::Min, Bound::Low),
    step(Icon::Center, "center", Extremum::Min, Bound::MiddleLow),
    step(Icon::Left, "left", Extremum::Max, Bound::High),
    step(Icon::Center, "center", Extremum::Max, Bound::MiddleHigh),
];

/// Calibration steps for an axis, in order
pub fn plan(axis: Axis) -> &'static [CalibrationStep; 4] {
    match axis {
        Axis::X => &X_PLAN,
        Axis::Y => &Y_PLAN,
    }
}

/// Hook for announcing each step to the user beyond the matrix icon
pub trait StepPrompt {
    fn show(&mut self, axis: Axis, step: &CalibrationStep) -> impl Future<Output = ()>;
}

/// No extra prompt
impl StepPrompt for () {
    async fn show(&mut self, _axis: Axis, _step: &CalibrationStep) {}
}

/// Runs the sampling windows with fixed timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibrator {
    settle_ms: u32,
    samples: u16,
    sample_interval_ms: u32,
}

impl Calibrator {
    pub fn new(timing: &Timing) -> Self {
        Self {
            settle_ms: timing.settle_ms,
            samples: timing.samples.max(1),
            sample_interval_ms: timing.sample_interval_ms,
        }
    }

    /// Take one window of samples and return its running extreme
    pub async fn sample_window<A, D>(
        &self,
        input: &mut A,
        delay: &mut D,
        axis: Axis,
        extremum: Extremum,
    ) -> u16
    where
        A: AnalogInput,
        D: DelayNs,
    {
        let mut acc = extremum.seed();
        for _ in 0..self.samples {
            let sample = input.read_raw(axis).await;
            acc = extremum.fold(acc, sample);
            delay.delay_ms(self.sample_interval_ms).await;
        }
        acc
    }

    /// Run all four windows for one axis
    ///
    /// The result is returned as-is; check [`AxisCalibration::is_usable`]
    /// before storing it. The matrix is left blank afterwards.
    pub async fn calibrate_axis<A, M, D, P>(
        &self,
        axis: Axis,
        input: &mut A,
        matrix: &mut M,
        delay: &mut D,
        prompt: &mut P,
    ) -> AxisCalibration
    where
        A: AnalogInput,
        M: MatrixSink,
        D: DelayNs,
        P: StepPrompt,
    {
        let mut calibration = AxisCalibration::FULL_SCALE;

        for step in plan(axis) {
            matrix.draw_icon(step.icon);
            matrix.flush().await;
            prompt.show(axis, step).await;

            delay.delay_ms(self.settle_ms).await;

            let value = self.sample_window(input, delay, axis, step.extremum).await;
            calibration.set(step.bound, value);
        }

        matrix.clear();
        matrix.flush().await;

        calibration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Rgb;
    use embassy_futures::block_on;

    /// Returns `windows[n / samples][n % samples]` for the n-th read
    struct ScriptedJoystick {
        windows: [[u16; 3]; 4],
        reads: usize,
        axis_seen: Option<Axis>,
    }

    impl AnalogInput for ScriptedJoystick {
        async fn read_raw(&mut self, axis: Axis) -> u16 {
            self.axis_seen = Some(axis);
            let window = (self.reads / 3) % 4;
            let value = self.windows[window][self.reads % 3];
            self.reads += 1;
            value
        }
    }

    struct ConstantJoystick(u16);

    impl AnalogInput for ConstantJoystick {
        async fn read_raw(&mut self, _axis: Axis) -> u16 {
            self.0
        }
    }

    #[derive(Default)]
    struct MockMatrix {
        lit: usize,
        flushes: u32,
    }

    impl MatrixSink for MockMatrix {
        fn set_pixel(&mut self, _index: usize, color: Rgb) {
            if !color.is_off() {
                self.lit += 1;
            }
        }

        fn clear(&mut self) {
            self.lit = 0;
        }

        async fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[derive(Default)]
    struct MockDelay {
        total_ms: u64,
    }

    impl DelayNs for MockDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.total_ms += ns as u64 / 1_000_000;
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms as u64;
        }
    }

    #[derive(Default)]
    struct RecordingPrompt {
        shown: usize,
        last: Option<&'static str>,
    }

    impl StepPrompt for RecordingPrompt {
        async fn show(&mut self, _axis: Axis, step: &CalibrationStep) {
            self.shown += 1;
            self.last = Some(step.prompt);
        }
    }

    fn fast_timing() -> Timing {
        Timing {
            samples: 3,
            ..Timing::default()
        }
    }

    #[test]
    fn test_y_windows_map_to_bounds() {
        let calibrator = Calibrator::new(&fast_timing());
        let mut joystick = ScriptedJoystick {
            windows: [
                [100, 90, 95],
                [2000, 1990, 2010],
                [4000, 4050, 4020],
                [2000, 2030, 1995],
            ],
            reads: 0,
            axis_seen: None,
        };
        let mut matrix = MockMatrix::default();
        let mut delay = MockDelay::default();
        let mut prompt = RecordingPrompt::default();

        let cal = block_on(calibrator.calibrate_axis(
            Axis::Y,
            &mut joystick,
            &mut matrix,
            &mut delay,
            &mut prompt,
        ));

        assert_eq!(cal.low, 90);
        assert_eq!(cal.middle_low, 1990);
        assert_eq!(cal.high, 4050);
        assert_eq!(cal.middle_high, 2030);
        assert_eq!(joystick.reads, 12);
        assert_eq!(joystick.axis_seen, Some(Axis::Y));
        assert_eq!(prompt.shown, 4);
        assert_eq!(prompt.last, Some("center"));
    }

    #[test]
    fn test_window_timing() {
        let calibrator = Calibrator::new(&fast_timing());
        let mut delay = MockDelay::default();
        block_on(calibrator.calibrate_axis(
            Axis::X,
            &mut ConstantJoystick(2048),
            &mut MockMatrix::default(),
            &mut delay,
            &mut (),
        ));
        // Four windows of 2 s settle plus three 10 ms samples
        assert_eq!(delay.total_ms, 4 * (2000 + 3 * 10));
    }

    #[test]
    fn test_matrix_prompts_then_blank() {
        let calibrator = Calibrator::new(&fast_timing());
        let mut matrix = MockMatrix::default();
        block_on(calibrator.calibrate_axis(
            Axis::X,
            &mut ConstantJoystick(2048),
            &mut matrix,
            &mut MockDelay::default(),
            &mut (),
        ));
        assert_eq!(matrix.flushes, 5);
        assert_eq!(matrix.lit, 0);
    }

    #[test]
    fn test_deterministic_on_constant_input() {
        let calibrator = Calibrator::new(&fast_timing());
        let run = || {
            block_on(calibrator.calibrate_axis(
                Axis::Y,
                &mut ConstantJoystick(1500),
                &mut MockMatrix::default(),
                &mut MockDelay::default(),
                &mut (),
            ))
        };
        let first = run();
        let second = run();
        assert_eq!(first, second);
        // Constant input collapses the range
        assert!(!first.is_usable());
    }

    #[test]
    fn test_x_plan_is_mirrored() {
        assert_eq!(X_PLAN[0].icon, Icon::Right);
        assert_eq!(X_PLAN[2].icon, Icon::Left);
        assert_eq!(Y_PLAN[0].icon, Icon::Up);
        for (x, y) in X_PLAN.iter().zip(Y_PLAN.iter()) {
            assert_eq!(x.bound, y.bound);
            assert_eq!(x.extremum, y.extremum);
        }
    }

    #[test]
    fn test_sample_window_extremes() {
        let calibrator = Calibrator::new(&fast_timing());
        let mut joystick = ScriptedJoystick {
            windows: [[7, 3, 5], [0; 3], [0; 3], [0; 3]],
            reads: 0,
            axis_seen: None,
        };
        let mut delay = MockDelay::default();
        let min = block_on(calibrator.sample_window(
            &mut joystick,
            &mut delay,
            Axis::X,
            Extremum::Min,
        ));
        assert_eq!(min, 3);
        joystick.reads = 0;
        let max = block_on(calibrator.sample_window(
            &mut joystick,
            &mut delay,
            Axis::X,
            Extremum::Max,
        ));
        assert_eq!(max, 7);
    }
}

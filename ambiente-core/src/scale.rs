//! Linear range remapping
//!
//! Raw joystick samples are converted into physical units with a plain
//! integer remap. The remap itself never clamps; callers clamp afterwards
//! so that a joystick pushed past its calibrated bounds still reads as the
//! range limit.

use crate::config::{AxisCalibration, MeasureRange};

/// Remap `x` from `[src_min, src_max]` onto `[dst_min, dst_max]`
///
/// Uses truncating integer division. Values outside the source range map
/// outside the destination range, saturating at the `i32` limits.
///
/// `src_min` must differ from `src_max`.
pub fn scale(src_min: i32, src_max: i32, dst_min: i32, dst_max: i32, x: i32) -> i32 {
    debug_assert_ne!(src_min, src_max, "zero-width source range");
    let (src_min, src_max) = (src_min as i64, src_max as i64);
    let (dst_min, dst_max) = (dst_min as i64, dst_max as i64);
    // Span product fits in i64 for any i32 inputs
    let value = ((x as i64 - src_min) * (dst_max - dst_min)) / (src_max - src_min) + dst_min;
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Clamp into an inclusive range without panicking on inverted bounds
pub fn clamp(value: i32, min: i32, max: i32) -> i32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

impl MeasureRange {
    /// Map a raw sample through an axis calibration and clamp to this range
    ///
    /// The source interval is the calibrated `low..high` pair. A
    /// calibration with `low == high` yields `min` instead of dividing by
    /// zero; the calibration engine never stores one.
    pub fn map(&self, calibration: &AxisCalibration, raw: u16) -> i32 {
        if calibration.low == calibration.high {
            return self.min;
        }
        let value = scale(
            calibration.low as i32,
            calibration.high as i32,
            self.min,
            self.max,
            raw as i32,
        );
        clamp(value, self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_midpoint_temperature() {
        assert_eq!(scale(0, 4095, -15, 50, 2047), 17);
    }

    #[test]
    fn test_extreme_ranges_do_not_overflow() {
        assert_eq!(scale(0, 4095, -2_000_000_000, 2_000_000_000, 0), -2_000_000_000);
        assert_eq!(scale(0, 4095, -2_000_000_000, 2_000_000_000, 4095), 2_000_000_000);
        assert_eq!(scale(0, 1, 0, i32::MAX, 3), i32::MAX);

        let range = MeasureRange {
            min: i32::MIN,
            max: i32::MAX,
        };
        assert_eq!(range.map(&AxisCalibration::FULL_SCALE, 4095), i32::MAX);
        assert_eq!(range.map(&AxisCalibration::FULL_SCALE, 0), i32::MIN);
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(scale(0, 4095, -15, 50, 0), -15);
        assert_eq!(scale(0, 4095, -15, 50, 4095), 50);
        assert_eq!(scale(0, 4095, 0, 100, 4095), 100);
    }

    #[test]
    fn test_no_clamp_inside_scale() {
        // Past the calibrated bound the raw result overshoots
        assert!(scale(100, 4000, 0, 100, 4095) > 100);
        assert!(scale(100, 4000, 0, 100, 0) < 0);
    }

    #[test]
    fn test_inverted_source_range() {
        // Calibration order is not enforced, so a reversed axis still maps
        assert_eq!(scale(4095, 0, 0, 100, 4095), 0);
        assert_eq!(scale(4095, 0, 0, 100, 0), 100);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-20, -15, 50), -15);
        assert_eq!(clamp(51, -15, 50), 50);
        assert_eq!(clamp(20, -15, 50), 20);
    }

    #[test]
    fn test_range_map_clamps() {
        let cal = AxisCalibration {
            low: 200,
            middle_low: 2000,
            middle_high: 2100,
            high: 3900,
        };
        let range = MeasureRange::TEMPERATURE;
        assert_eq!(range.map(&cal, 0), -15);
        assert_eq!(range.map(&cal, 4095), 50);
        assert_eq!(range.map(&cal, 200), -15);
        assert_eq!(range.map(&cal, 3900), 50);
    }

    #[test]
    fn test_range_map_degenerate_calibration() {
        let cal = AxisCalibration {
            low: 1000,
            middle_low: 1000,
            middle_high: 1000,
            high: 1000,
        };
        assert_eq!(MeasureRange::HUMIDITY.map(&cal, 1234), 0);
    }

    proptest! {
        #[test]
        fn scale_stays_in_destination(x in 0i32..=4095, dst_min in -100i32..100, span in 1i32..200) {
            let dst_max = dst_min + span;
            let value = scale(0, 4095, dst_min, dst_max, x);
            prop_assert!(value >= dst_min - 1 && value <= dst_max + 1);
        }

        #[test]
        fn scale_source_min_maps_to_destination_min(src_min in 0i32..2000, width in 1i32..2000, dst_min in -100i32..100) {
            prop_assert_eq!(scale(src_min, src_min + width, dst_min, dst_min + 65, src_min), dst_min);
        }

        #[test]
        fn map_is_always_clamped(raw in any::<u16>(), low in 0u16..2000, high in 2001u16..4096) {
            let cal = AxisCalibration { low, middle_low: low, middle_high: high, high };
            let value = MeasureRange::HUMIDITY.map(&cal, raw);
            prop_assert!((0..=100).contains(&value));
        }
    }
}

//! Joystick sample mapping
//!
//! Two pure, integer-only conversions from raw ADC samples:
//!
//! - [`map_axis`] turns a sample into a marker coordinate, or `None` while
//!   the stick rests inside the deadzone
//! - [`intensity`] turns a deviation from center into an LED duty value
//!
//! Both use wide intermediates so `sample * span` and
//! `deviation * pwm_max` cannot overflow.

/// Direction of an axis relative to screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Higher sample moves the marker right/down
    Normal,
    /// Higher sample moves the marker left/up
    Inverted,
}

/// Signed distance of a sample from the rest position
pub const fn deviation(sample: u16, center: u16) -> i32 {
    sample as i32 - center as i32
}

/// Check whether a deviation falls inside the deadzone
pub const fn in_deadzone(deviation: i32, deadzone: u16) -> bool {
    deviation.unsigned_abs() < deadzone as u32
}

/// Map a raw axis sample onto a marker coordinate in `[0, span)`
///
/// Returns `None` when the sample is within `deadzone` of `center`; the
/// caller keeps its previous coordinate in that case. Samples above
/// `max_sample` are clamped.
///
/// `span` is the drawable extent minus the marker size, so any returned
/// coordinate keeps the whole marker on screen.
pub fn map_axis(
    sample: u16,
    deadzone: u16,
    center: u16,
    max_sample: u16,
    span: u16,
    orientation: Orientation,
) -> Option<u16> {
    let sample = sample.min(max_sample);

    if in_deadzone(deviation(sample, center), deadzone) {
        return None;
    }

    if span == 0 {
        return Some(0);
    }

    // max_sample + 1 codes spread evenly over span pixels
    let mapped = (sample as u32 * span as u32 / (max_sample as u32 + 1)) as u16;

    Some(match orientation {
        Orientation::Normal => mapped,
        Orientation::Inverted => span - 1 - mapped,
    })
}

/// Convert a deviation from center into a PWM duty value
///
/// Zero inside the deadzone, then linear up to `pwm_max` at
/// `half_range`. Floor division; the result never exceeds `pwm_max`.
pub fn intensity(deviation: i32, deadzone: u16, half_range: u16, pwm_max: u16) -> u16 {
    if in_deadzone(deviation, deadzone) {
        return 0;
    }

    let travel = half_range.saturating_sub(deadzone) as u64;
    if travel == 0 {
        return pwm_max;
    }

    let effective = (deviation.unsigned_abs() - deadzone as u32) as u64;
    let duty = effective * pwm_max as u64 / travel;

    duty.min(pwm_max as u64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ADC_MAX: u16 = 4095;
    const CENTER: u16 = 2048;
    const DEADZONE: u16 = 200;
    const HALF_RANGE: u16 = ADC_MAX / 2;
    const PWM_MAX: u16 = 1250;
    const X_SPAN: u16 = 128 - 8;
    const Y_SPAN: u16 = 64 - 8;

    fn duty(sample: u16) -> u16 {
        intensity(deviation(sample, CENTER), DEADZONE, HALF_RANGE, PWM_MAX)
    }

    #[test]
    fn test_intensity_bounded_for_every_sample() {
        for sample in 0..=ADC_MAX {
            assert!(duty(sample) <= PWM_MAX, "sample {} out of range", sample);
        }
    }

    #[test]
    fn test_intensity_zero_inside_deadzone() {
        for dev in -199..=199 {
            assert_eq!(intensity(dev, DEADZONE, HALF_RANGE, PWM_MAX), 0);
        }
        // Edge of the deadzone is the first live value
        assert_eq!(intensity(200, DEADZONE, HALF_RANGE, PWM_MAX), 0);
        assert_eq!(intensity(-201, DEADZONE, HALF_RANGE, PWM_MAX), 0);
        assert_eq!(intensity(202, DEADZONE, HALF_RANGE, PWM_MAX), 1);
    }

    #[test]
    fn test_intensity_full_deflection() {
        assert_eq!(duty(ADC_MAX), PWM_MAX);
        assert_eq!(duty(0), PWM_MAX);
        assert_eq!(intensity(2047, DEADZONE, HALF_RANGE, PWM_MAX), PWM_MAX);
        assert_eq!(intensity(-2048, DEADZONE, HALF_RANGE, PWM_MAX), PWM_MAX);
    }

    #[test]
    fn test_intensity_midpoint() {
        // (1123 - 200) * 1250 / 1847
        assert_eq!(intensity(1123, DEADZONE, HALF_RANGE, PWM_MAX), 624);
        assert_eq!(intensity(-1123, DEADZONE, HALF_RANGE, PWM_MAX), 624);
    }

    #[test]
    fn test_intensity_degenerate_travel() {
        assert_eq!(intensity(10, 0, 0, PWM_MAX), PWM_MAX);
        assert_eq!(intensity(i32::MIN, DEADZONE, HALF_RANGE, PWM_MAX), PWM_MAX);
    }

    #[test]
    fn test_map_axis_centered_is_none() {
        assert_eq!(map_axis(CENTER, DEADZONE, CENTER, ADC_MAX, X_SPAN, Orientation::Normal), None);
        assert_eq!(map_axis(1849, DEADZONE, CENTER, ADC_MAX, Y_SPAN, Orientation::Inverted), None);
        assert_eq!(map_axis(2247, DEADZONE, CENTER, ADC_MAX, X_SPAN, Orientation::Normal), None);
        assert!(map_axis(2248, DEADZONE, CENTER, ADC_MAX, X_SPAN, Orientation::Normal).is_some());
        assert!(map_axis(1848, DEADZONE, CENTER, ADC_MAX, X_SPAN, Orientation::Normal).is_some());
    }

    #[test]
    fn test_map_axis_extremes() {
        let right = map_axis(ADC_MAX, DEADZONE, CENTER, ADC_MAX, X_SPAN, Orientation::Normal);
        let left = map_axis(0, DEADZONE, CENTER, ADC_MAX, X_SPAN, Orientation::Normal);
        assert_eq!(right, Some(X_SPAN - 1));
        assert_eq!(left, Some(0));

        // Vertical axis is mirrored: pushing up moves toward row 0
        let up = map_axis(ADC_MAX, DEADZONE, CENTER, ADC_MAX, Y_SPAN, Orientation::Inverted);
        let down = map_axis(0, DEADZONE, CENTER, ADC_MAX, Y_SPAN, Orientation::Inverted);
        assert_eq!(up, Some(0));
        assert_eq!(down, Some(Y_SPAN - 1));
    }

    #[test]
    fn test_vertical_rows_stay_inside_span() {
        let row =
            |sample| map_axis(sample, DEADZONE, CENTER, ADC_MAX, Y_SPAN, Orientation::Inverted);

        // Top row: 4023 * 56 / 4096 = 55, mirrored to 56 - 1 - 55
        assert_eq!(row(4095), Some(0));
        assert_eq!(row(4023), Some(0));
        assert_eq!(row(4022), Some(1));

        // Bottom row is span - 1, never span
        assert_eq!(row(0), Some(Y_SPAN - 1));
        assert_eq!(row(73), Some(Y_SPAN - 1));
        assert_eq!(row(74), Some(Y_SPAN - 2));

        for sample in 0..=ADC_MAX {
            let normal = map_axis(sample, DEADZONE, CENTER, ADC_MAX, Y_SPAN, Orientation::Normal);
            assert_eq!(row(sample), normal.map(|y| Y_SPAN - 1 - y));
            assert_ne!(row(sample), Some(Y_SPAN));
        }
    }

    #[test]
    fn test_map_axis_clamps_out_of_range_samples() {
        assert_eq!(
            map_axis(u16::MAX, DEADZONE, CENTER, ADC_MAX, X_SPAN, Orientation::Normal),
            Some(X_SPAN - 1)
        );
    }

    #[test]
    fn test_map_axis_zero_span() {
        assert_eq!(map_axis(0, DEADZONE, CENTER, ADC_MAX, 0, Orientation::Inverted), Some(0));
    }

    proptest! {
        #[test]
        fn prop_intensity_monotonic(a in 0i32..=2048, b in 0i32..=2048) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let duty_lo = intensity(lo, DEADZONE, HALF_RANGE, PWM_MAX);
            let duty_hi = intensity(hi, DEADZONE, HALF_RANGE, PWM_MAX);
            prop_assert!(duty_lo <= duty_hi);
            // Sign does not matter
            prop_assert_eq!(intensity(-lo, DEADZONE, HALF_RANGE, PWM_MAX), duty_lo);
        }

        #[test]
        fn prop_map_axis_within_span(sample in 0u16..=ADC_MAX, inverted in any::<bool>()) {
            let orientation = if inverted { Orientation::Inverted } else { Orientation::Normal };
            for span in [X_SPAN, Y_SPAN] {
                if let Some(pos) = map_axis(sample, DEADZONE, CENTER, ADC_MAX, span, orientation) {
                    prop_assert!(pos < span);
                }
            }
        }

        #[test]
        fn prop_map_axis_none_only_in_deadzone(sample in 0u16..=ADC_MAX) {
            let result = map_axis(sample, DEADZONE, CENTER, ADC_MAX, X_SPAN, Orientation::Normal);
            let inside = (sample as i32 - CENTER as i32).abs() < DEADZONE as i32;
            prop_assert_eq!(result.is_none(), inside);
        }
    }
}

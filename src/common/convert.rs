// src/common/convert.rs

//! Physical units to the sensor's 16-bit compensation ticks.
//!
//! Inputs are not clamped. Values outside the nominal range saturate at the ends of
//! `u16` through the float-to-int cast, and NaN becomes 0.

/// Full scale of a compensation word.
pub const TICKS_FULL_SCALE: f32 = 65535.0;
/// Temperature at tick 0, in degrees Celsius.
pub const TEMPERATURE_OFFSET_C: f32 = -45.0;
/// Temperature span covered by the full tick range, in degrees Celsius.
pub const TEMPERATURE_SPAN_C: f32 = 175.0;

/// Relative humidity in percent to ticks: `rh / 100 * 65535`, truncated.
#[inline]
pub fn humidity_to_ticks(rh: f32) -> u16 {
    (rh / 100.0 * TICKS_FULL_SCALE) as u16
}

/// Temperature in degrees Celsius to ticks: `(t + 45) / 175 * 65535`, truncated.
#[inline]
pub fn temperature_to_ticks(temperature_c: f32) -> u16 {
    ((temperature_c - TEMPERATURE_OFFSET_C) / TEMPERATURE_SPAN_C * TICKS_FULL_SCALE) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humidity_endpoints() {
        assert_eq!(humidity_to_ticks(0.0), 0);
        assert_eq!(humidity_to_ticks(100.0), 65535);
        assert_eq!(humidity_to_ticks(50.0), 32767);
    }

    #[test]
    fn test_temperature_endpoints() {
        assert_eq!(temperature_to_ticks(-45.0), 0);
        assert_eq!(temperature_to_ticks(130.0), 65535);
        assert_eq!(temperature_to_ticks(25.0), 26214);
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(humidity_to_ticks(-10.0), 0);
        assert_eq!(humidity_to_ticks(150.0), 65535);
        assert_eq!(temperature_to_ticks(-60.0), 0);
        assert_eq!(temperature_to_ticks(200.0), 65535);
        assert_eq!(humidity_to_ticks(f32::NAN), 0);
    }

    #[test]
    fn test_monotonic_over_nominal_range() {
        let mut last = 0u16;
        for step in 0..=100 {
            let ticks = humidity_to_ticks(step as f32);
            assert!(ticks >= last);
            last = ticks;
        }
    }
}

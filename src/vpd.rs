//! Half-hourly vapour pressure deficit by piecewise-linear interpolation.
//!
//! Readings are taken at 09:00 and 15:00. Between the two the deficit moves
//! linearly over six hours; the overnight stretches (15:00 to 09:00, 18 hours)
//! are bridged with the previous afternoon's and the next morning's readings.

use crate::Result;
use crate::math::mul_add;
use crate::types::{HalfHourSeries, VpdReadings};

/// Hour of the morning reading.
pub const MORNING_READING_HOUR: f64 = 9.0;

/// Hour of the afternoon reading.
pub const AFTERNOON_READING_HOUR: f64 = 15.0;

/// Hours from the afternoon reading to the next morning reading.
const OVERNIGHT_HOURS: f64 = 24.0 - AFTERNOON_READING_HOUR + MORNING_READING_HOUR;

const DAYTIME_HOURS: f64 = AFTERNOON_READING_HOUR - MORNING_READING_HOUR;

/// Linear interpolation from `from` towards `to` at fraction `t`.
///
/// Returns `from` at `t == 0` and `to` at `t == 1` bit for bit.
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    mul_add(to, t, from * (1.0 - t))
}

/// VPD (kPa) at a given hour of day.
///
/// Hours up to 09:00 belong to the night that started at the previous day's
/// 15:00 reading; hours after 15:00 belong to the night ending at the next
/// day's 09:00 reading.
#[must_use]
pub fn vpd_at_hour(readings: &VpdReadings, hour: f64) -> f64 {
    if hour <= MORNING_READING_HOUR {
        let elapsed = 24.0 - AFTERNOON_READING_HOUR + hour;
        lerp(readings.vpd15_prev, readings.vpd09, elapsed / OVERNIGHT_HOURS)
    } else if hour <= AFTERNOON_READING_HOUR {
        let elapsed = hour - MORNING_READING_HOUR;
        lerp(readings.vpd09, readings.vpd15, elapsed / DAYTIME_HOURS)
    } else {
        let elapsed = hour - AFTERNOON_READING_HOUR;
        lerp(readings.vpd15, readings.vpd09_next, elapsed / OVERNIGHT_HOURS)
    }
}

/// Interpolates four daily VPD readings to 48 half-hourly values.
///
/// The 09:00 slot (17) equals `vpd09` and the 15:00 slot (29) equals `vpd15`.
///
/// # Errors
/// Returns `InvalidVaporPressureDeficit` for negative or non-finite readings.
///
/// # Example
/// ```
/// # use diurnal_weather::{VpdReadings, vpd};
/// let readings = VpdReadings::new(1.4, 2.3, 3.4, 1.8).unwrap();
/// let series = vpd::interpolate_vpd(&readings).unwrap();
/// assert_eq!(series[17], 1.4);
/// assert_eq!(series[29], 2.3);
/// ```
pub fn interpolate_vpd(readings: &VpdReadings) -> Result<HalfHourSeries> {
    readings.validate()?;
    Ok(HalfHourSeries::from_hours(|hour| vpd_at_hour(readings, hour)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn readings() -> VpdReadings {
        VpdReadings::new(1.4, 2.3, 3.4, 1.8).unwrap()
    }

    #[test]
    fn test_readings_are_hit_exactly() {
        let series = interpolate_vpd(&readings()).unwrap();
        assert_eq!(series[17], 1.4);
        assert_eq!(series[29], 2.3);
    }

    #[test]
    fn test_readings_are_hit_exactly_for_any_pair() {
        // Two-decimal readings from 0.01 to 4.99 kPa
        let values = (1..500).step_by(7).map(|n| f64::from(n) / 100.0);
        for morning in values.clone() {
            for afternoon in values.clone() {
                let readings = VpdReadings::new(morning, afternoon, 3.0 - morning / 2.0, 1.0).unwrap();
                let series = interpolate_vpd(&readings).unwrap();
                assert_eq!(series[17], morning, "09:00 for ({morning}, {afternoon})");
                assert_eq!(series[29], afternoon, "15:00 for ({morning}, {afternoon})");
            }
        }

        let far_apart = interpolate_vpd(&VpdReadings::new(0.1, 3.0, 3.0, 1.0).unwrap()).unwrap();
        assert_eq!(far_apart[17], 0.1);
        let falling = interpolate_vpd(&VpdReadings::new(3.0, 0.1, 1.0, 1.0).unwrap()).unwrap();
        assert_eq!(falling[29], 0.1);
    }

    #[test]
    fn test_overnight_segments() {
        let series = interpolate_vpd(&readings()).unwrap();
        // 00:30 is 9.5 h into the 18 h night from the previous 15:00
        assert!((series[0] - (3.4 - 2.0 * 9.5 / 18.0)).abs() < EPSILON);
        // 24:00 is halfway to the next morning
        assert!((series[47] - 2.05).abs() < EPSILON);
    }

    #[test]
    fn test_monotone_between_readings() {
        let series = interpolate_vpd(&readings()).unwrap();
        for slot in 0..17 {
            assert!(series[slot] > series[slot + 1], "slot {slot}");
        }
        for slot in 17..29 {
            assert!(series[slot] < series[slot + 1], "slot {slot}");
        }
        for slot in 29..47 {
            assert!(series[slot] > series[slot + 1], "slot {slot}");
        }
    }

    #[test]
    fn test_constant_readings_give_constant_series() {
        let flat = VpdReadings::new(0.8, 0.8, 0.8, 0.8).unwrap();
        let series = interpolate_vpd(&flat).unwrap();
        assert!(series.iter().all(|&v| (v - 0.8).abs() < EPSILON));
    }

    #[test]
    fn test_rejects_invalid_readings() {
        let bad = VpdReadings {
            vpd09_next: f64::NAN,
            ..readings()
        };
        assert!(interpolate_vpd(&bad).is_err());
    }
}

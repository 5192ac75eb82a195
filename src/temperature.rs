//! Diurnal air temperature from daily extremes and day length.
//!
//! Two independent models are provided:
//!
//! - [`parton_logan`]: truncated sine during daylight and exponential decay at
//!   night (Parton & Logan 1981), with the displacement term of Kimball &
//!   Bellamy (1986) that lets the night curve approach `tmin` without a jump.
//! - [`maestra`]: symmetric sine during daylight and linear decline at night,
//!   as used by the MAESTRA/MAESPA canopy models.
//!
//! Both take day length in hours, typically from [`crate::par::day_length`].
//!
//! ## References
//!
//! - Parton, W. J.; Logan, J. A. (1981). A model for diurnal variation in soil
//!   and air temperature. Agricultural Meteorology, 23, 205-216.
//! - Kimball, B. A.; Bellamy, L. A. (1986). Generation of diurnal solar
//!   radiation, temperature, and humidity patterns. Energy in Agriculture, 5,
//!   185-197.

use crate::error::{check_day_length, check_temperature_range};
use crate::math::{PI, cos, exp, sin};
use crate::time::{HOURS_PER_DAY, HOURS_PER_STEP, STEPS_PER_DAY, slot_hour};
use crate::types::HalfHourSeries;
use crate::{Error, Result};

/// Floor on the night-time decay scale (hours) for days of nearly 24 h.
const MIN_NIGHT_SCALE: f64 = 1.0e-6;

/// Coefficients of the Parton & Logan model.
///
/// # Example
/// ```
/// # use diurnal_weather::temperature::PartonLoganCoefficients;
/// let air = PartonLoganCoefficients::default();
/// assert_eq!(air.a, 1.86);
/// assert!(PartonLoganCoefficients::new(1.86, 0.0, -0.17).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartonLoganCoefficients {
    /// Lag of the maximum temperature after noon (hours)
    pub a: f64,
    /// Night-time decay coefficient
    pub b: f64,
    /// Lag of the minimum temperature after sunrise (hours)
    pub c: f64,
}

impl PartonLoganCoefficients {
    /// Creates validated coefficients.
    ///
    /// # Errors
    /// Returns `InvalidCoefficient` unless `a > 0`, `b > 0` and `c` is finite.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        let coefficients = Self { a, b, c };
        coefficients.validate()?;
        Ok(coefficients)
    }

    /// 1.5 m air temperature values from Parton & Logan (1981), table 1.
    #[must_use]
    pub const fn air_1_5m() -> Self {
        Self {
            a: 1.86,
            b: 2.2,
            c: -0.17,
        }
    }

    /// Checks the coefficients.
    ///
    /// # Errors
    /// Returns `InvalidCoefficient` for the first invalid coefficient.
    pub fn validate(&self) -> Result<()> {
        if !(self.a.is_finite() && self.a > 0.0) {
            return Err(Error::invalid_coefficient("a", self.a));
        }
        if !(self.b.is_finite() && self.b > 0.0) {
            return Err(Error::invalid_coefficient("b", self.b));
        }
        if !self.c.is_finite() {
            return Err(Error::invalid_coefficient("c", self.c));
        }
        Ok(())
    }
}

impl Default for PartonLoganCoefficients {
    fn default() -> Self {
        Self::air_1_5m()
    }
}

/// Choice of diurnal temperature model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureModel {
    /// Sine + exponential night decay
    PartonLogan(PartonLoganCoefficients),
    /// Symmetric sine + linear night decline
    Maestra,
}

impl Default for TemperatureModel {
    fn default() -> Self {
        Self::PartonLogan(PartonLoganCoefficients::default())
    }
}

impl TemperatureModel {
    /// Runs the selected model.
    ///
    /// # Errors
    /// Same as [`parton_logan`] and [`maestra`].
    pub fn disaggregate(&self, tmin: f64, tmax: f64, day_length: f64) -> Result<HalfHourSeries> {
        match self {
            Self::PartonLogan(coefficients) => parton_logan(tmin, tmax, day_length, coefficients),
            Self::Maestra => maestra(tmin, tmax, day_length),
        }
    }
}

/// Parton & Logan diurnal temperature.
///
/// Daylight runs from `12 - day_length / 2 + c` to `12 + day_length / 2`.
/// Outside it temperature decays exponentially from the sunset value, with
/// hours before sunrise counted from the previous sunset.
///
/// # Errors
/// Returns `InvalidTemperatureRange`, `InvalidDayLength` or `InvalidCoefficient`.
///
/// # Example
/// ```
/// # use diurnal_weather::temperature::{parton_logan, PartonLoganCoefficients};
/// let t = parton_logan(2.0, 24.0, 16.0, &PartonLoganCoefficients::default()).unwrap();
/// assert!((t[7] - 2.0).abs() < 1e-9); // 04:00, just after sunrise
/// assert!((t.max() - 24.0).abs() < 0.01);
/// ```
pub fn parton_logan(
    tmin: f64,
    tmax: f64,
    day_length: f64,
    coefficients: &PartonLoganCoefficients,
) -> Result<HalfHourSeries> {
    check_temperature_range(tmin, tmax)?;
    check_day_length(day_length)?;
    coefficients.validate()?;

    let PartonLoganCoefficients { a, b, c } = *coefficients;
    let night_length = HOURS_PER_DAY - day_length;
    let sunrise = 12.0 - day_length / 2.0 + c;
    let sunset = 12.0 + day_length / 2.0;
    let day_arc = |m: f64| sin(PI * m / (day_length + 2.0 * a));

    let tset = (tmax - tmin) * day_arc(sunset - sunrise + c) + tmin;
    // Displacement so the night curve reaches tmin (Kimball & Bellamy)
    let d = (tset - tmin) / (exp(b) - 1.0);
    let night_scale = (night_length + c).max(MIN_NIGHT_SCALE);

    Ok(HalfHourSeries::from_hours(|hour| {
        if (sunrise..=sunset).contains(&hour) {
            tmin + (tmax - tmin) * day_arc(hour - sunrise + c)
        } else {
            let since_sunset = if hour > sunset {
                hour - sunset
            } else {
                HOURS_PER_DAY + hour - sunset
            };
            (tmin - d) + (tset - tmin - d) * exp(-b * since_sunset / night_scale)
        }
    }))
}

/// MAESTRA diurnal temperature.
///
/// Works in slot units: a sine over the daylight slots centred on noon, and a
/// linear decline over the remaining `48 - 2 * day_length` slots that wraps
/// past midnight. A night shorter than one slot is treated as polar day.
///
/// # Errors
/// Returns `InvalidTemperatureRange` or `InvalidDayLength`.
///
/// # Example
/// ```
/// # use diurnal_weather::temperature::maestra;
/// let t = maestra(2.0, 24.0, 16.0).unwrap();
/// assert!((t[7] - 2.0).abs() < 1e-9);
/// assert!(t.max() <= 24.0);
/// ```
pub fn maestra(tmin: f64, tmax: f64, day_length: f64) -> Result<HalfHourSeries> {
    check_temperature_range(tmin, tmax)?;
    check_day_length(day_length)?;

    let tav = (tmax + tmin) / 2.0;
    let tampl = (tmax - tmin) / 2.0;
    let steps = STEPS_PER_DAY as f64;
    let day_steps = day_length / HOURS_PER_STEP;
    let night_steps = steps - day_steps;
    // Below one slot the linear night slope overshoots tmax
    let all_day = night_steps < 1.0;

    Ok(HalfHourSeries::from_fn(|slot| {
        let step = slot_hour(slot) / HOURS_PER_STEP;
        // Steps since the start of the daylight window
        let time = step + day_steps * 0.5 - steps / 2.0;

        if !all_day && (day_steps <= 0.0 || time < 0.0 || time > day_steps) {
            let mut step_mid = step - 0.5;
            if time < 0.0 {
                step_mid += steps;
            }
            tav - (tav - tmin) * (step_mid - day_steps * 0.5 - steps / 2.0) / night_steps
        } else {
            tav - tampl * cos(1.5 * PI * time / day_steps)
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn default_parton_logan(tmin: f64, tmax: f64, day_length: f64) -> HalfHourSeries {
        parton_logan(tmin, tmax, day_length, &PartonLoganCoefficients::default()).unwrap()
    }

    #[test]
    fn test_parton_logan_reference_day() {
        let t = default_parton_logan(2.0, 24.0, 16.0);

        // Sunrise at 03:50; the 04:00 slot is the first daylight slot
        assert!((t[7] - 2.0).abs() < EPSILON);
        // Peak lags solar noon by about two hours
        assert_eq!(t.argmax(), 27);
        assert!((t.max() - 23.994_528_370_559_852).abs() < EPSILON);
        // Pre-dawn minimum undershoots tmin slightly
        assert_eq!(t.argmin(), 6);
        assert!((t.min() - 1.776_470_510_997_961_7).abs() < EPSILON);
    }

    #[test]
    fn test_parton_logan_noon_exceeds_morning() {
        let t = default_parton_logan(2.0, 24.0, 16.0);
        for slot in 7..23 {
            assert!(t[slot] < t[slot + 1], "slot {slot}");
        }
    }

    #[test]
    fn test_parton_logan_constant_when_range_is_zero() {
        let t = default_parton_logan(15.0, 15.0, 10.0);
        for value in &t {
            assert!((value - 15.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_parton_logan_polar_extremes_are_finite() {
        for day_length in [0.0, 23.9, 24.0] {
            let t = default_parton_logan(-10.0, 5.0, day_length);
            assert!(t.iter().all(|v| v.is_finite()), "day length {day_length}");
            assert!(t.max() <= 5.0 + EPSILON);
        }
        let night = default_parton_logan(2.0, 24.0, 0.0);
        assert!((night.max() - 2.0).abs() < EPSILON);
        assert!((night.min() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_maestra_reference_day() {
        let t = maestra(2.0, 24.0, 16.0).unwrap();

        assert!((t[7] - 2.0).abs() < EPSILON);
        assert_eq!(t.argmin(), 7);
        assert_eq!(t.argmax(), 28);
        assert!((t.max() - 23.986_750_018_256_9).abs() < EPSILON);
        // Night decline is linear: constant step between consecutive night slots
        let step = t[41] - t[40];
        for slot in 40..47 {
            assert!((t[slot + 1] - t[slot] - step).abs() < EPSILON);
        }
    }

    #[test]
    fn test_maestra_polar_night_has_no_division_by_zero() {
        let t = maestra(2.0, 24.0, 0.0).unwrap();
        assert!(t.iter().all(|v| v.is_finite()));
        assert!(t.max() < 24.0);
        assert!(t.min() >= 2.0);
    }

    #[test]
    fn test_maestra_polar_day() {
        let t = maestra(2.0, 24.0, 24.0).unwrap();
        assert!(t.iter().all(|v| v.is_finite()));
        assert!((t.max() - 24.0).abs() < EPSILON);
    }

    #[test]
    fn test_maestra_stays_in_range_near_polar_day() {
        for step in 0..=3000 {
            let day_length = 23.5 + f64::from(step) / 6000.0;
            let t = maestra(2.0, 24.0, day_length).unwrap();
            assert!(t.min() >= 2.0 - EPSILON, "min {} at {day_length} h", t.min());
            assert!(t.max() <= 24.0 + EPSILON, "max {} at {day_length} h", t.max());
        }
    }

    #[test]
    fn test_maestra_stays_in_range_for_all_day_lengths() {
        for step in 0..=2400 {
            let day_length = f64::from(step) / 100.0;
            let t = maestra(-5.0, 15.0, day_length).unwrap();
            assert!(t.min() >= -5.0 - EPSILON, "min {} at {day_length} h", t.min());
            assert!(t.max() <= 15.0 + EPSILON, "max {} at {day_length} h", t.max());
        }
    }

    #[test]
    fn test_model_dispatch() {
        let a = TemperatureModel::default().disaggregate(2.0, 24.0, 16.0).unwrap();
        assert_eq!(a, default_parton_logan(2.0, 24.0, 16.0));

        let b = TemperatureModel::Maestra.disaggregate(2.0, 24.0, 16.0).unwrap();
        assert_eq!(b, maestra(2.0, 24.0, 16.0).unwrap());
    }

    #[test]
    fn test_invalid_inputs() {
        let coefficients = PartonLoganCoefficients::default();
        assert!(parton_logan(24.0, 2.0, 16.0, &coefficients).is_err());
        assert!(parton_logan(2.0, 24.0, 25.0, &coefficients).is_err());
        assert!(parton_logan(2.0, 24.0, -1.0, &coefficients).is_err());
        assert!(maestra(2.0, 24.0, f64::NAN).is_err());

        let bad = PartonLoganCoefficients {
            a: -1.0,
            ..coefficients
        };
        assert_eq!(
            parton_logan(2.0, 24.0, 16.0, &bad),
            Err(Error::invalid_coefficient("a", -1.0))
        );
    }
}

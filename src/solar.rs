//! Half-hourly solar geometry after De Pury & Farquhar (1997), appendix A.
//!
//! This is a deliberately simple model: a single-harmonic declination, a
//! Spencer-style equation of time and the clock-time hour angle. It feeds the
//! [`crate::spitters`] diffuse/direct partitioning, which was calibrated
//! against it. The PAR disaggregation in [`crate::par`] uses its own seven-term
//! declination and does not share these values.
//!
//! ## References
//!
//! - De Pury, D. G. G.; Farquhar, G. D. (1997). Simple scaling of photosynthesis
//!   from leaves to canopies without the errors of big-leaf models. Plant, Cell
//!   and Environment, 20, 537-557.
//! - Spencer, J. W. (1971). Fourier series representation of the position of the sun.

#![allow(clippy::unreadable_literal)]

use crate::math::{
    PI, acos, clamp, cos, degrees_to_radians, radians_to_degrees, round_to_multiple, sin,
};
use crate::time::{DayOfYear, slot_hour};
use crate::types::{DayContext, HalfHourSeries};

/// Days in the year used by the fractional-year formulas.
pub(crate) const DAYS_PER_YEAR: f64 = 365.0;

/// Spacing of standard time-zone meridians (degrees).
const STANDARD_MERIDIAN_SPACING: f64 = 15.0;

/// Maximum solar declination used by the single-harmonic model (degrees).
const MAX_DECLINATION_DEGREES: f64 = 23.4;

/// Elevation and zenith cosine of the sun for every slot of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolarGeometry {
    /// Solar elevation in degrees, 0 while the sun is below the horizon
    pub elevation: HalfHourSeries,
    /// Cosine of the solar zenith angle, clamped to [0, 1]
    pub cos_zenith: HalfHourSeries,
}

/// Day angle (fractional year) in radians, De Pury & Farquhar eq. A18.
#[must_use]
pub fn day_angle(day_of_year: DayOfYear) -> f64 {
    2.0 * PI * (day_of_year.as_f64() - 1.0) / DAYS_PER_YEAR
}

/// Solar declination in radians, De Pury & Farquhar eq. A14.
#[must_use]
pub fn declination(day_of_year: DayOfYear) -> f64 {
    -degrees_to_radians(MAX_DECLINATION_DEGREES)
        * cos(2.0 * PI * (day_of_year.as_f64() + 10.0) / DAYS_PER_YEAR)
}

/// Equation of time in minutes, De Pury & Farquhar eq. A17.
///
/// The last term is `sin γ`, not the `sin 2γ` of the reference series; the
/// calibrated model uses it as written.
#[must_use]
pub fn equation_of_time(gamma: f64) -> f64 {
    0.017 + 0.4281 * cos(gamma) - 7.351 * sin(gamma) - 3.349 * cos(2.0 * gamma)
        - 9.731 * sin(gamma)
}

/// Solar noon in local standard time (hours), De Pury & Farquhar eq. A16.
///
/// The standard meridian is the longitude rounded to the nearest 15°.
#[must_use]
pub fn solar_noon(equation_of_time: f64, longitude: f64) -> f64 {
    let standard_meridian = round_to_multiple(longitude, STANDARD_MERIDIAN_SPACING);
    12.0 + (4.0 * (standard_meridian - longitude) - equation_of_time) / 60.0
}

/// Hour angle in radians for hour of day `hour`, De Pury & Farquhar eq. A15.
#[must_use]
pub fn hour_angle(hour: f64, solar_noon: f64) -> f64 {
    PI * (hour - solar_noon) / 12.0
}

/// Cosine of the zenith angle, clamped to [0, 1] (eq. A13).
///
/// Equal to the sine of the elevation angle; night-time values clamp to 0.
#[must_use]
pub fn cos_zenith(latitude_rad: f64, declination: f64, hour_angle: f64) -> f64 {
    let sin_beta =
        sin(latitude_rad) * sin(declination) + cos(latitude_rad) * cos(declination) * cos(hour_angle);
    clamp(sin_beta, 0.0, 1.0)
}

/// Elevation angle in degrees for a clamped zenith cosine.
#[must_use]
pub fn elevation_from_cos_zenith(cos_zenith: f64) -> f64 {
    90.0 - radians_to_degrees(acos(cos_zenith))
}

/// Computes elevation and zenith cosine for all 48 slots of a day.
///
/// # Example
/// ```
/// # use diurnal_weather::{DayContext, solar};
/// let ctx = DayContext::new(180, 51.5, -0.13).unwrap();
/// let geometry = solar::solar_geometry(&ctx);
/// assert_eq!(geometry.cos_zenith[0], 0.0); // 00:30, sun below horizon
/// assert!(geometry.elevation[23] > 60.0); // 12:00 in mid-summer London
/// ```
#[must_use]
pub fn solar_geometry(context: &DayContext) -> SolarGeometry {
    let gamma = day_angle(context.day_of_year());
    let dec = declination(context.day_of_year());
    let noon = solar_noon(equation_of_time(gamma), context.longitude());
    let rlat = degrees_to_radians(context.latitude());

    let cos_zen =
        HalfHourSeries::from_fn(|slot| cos_zenith(rlat, dec, hour_angle(slot_hour(slot), noon)));
    let elevation = HalfHourSeries::from_fn(|slot| elevation_from_cos_zenith(cos_zen[slot]));

    SolarGeometry {
        elevation,
        cos_zenith: cos_zen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn day(n: u32) -> DayOfYear {
        DayOfYear::new(n).unwrap()
    }

    #[test]
    fn test_day_angle() {
        assert_eq!(day_angle(day(1)), 0.0);
        assert!((day_angle(day(366)) - 2.0 * PI).abs() < EPSILON);
    }

    #[test]
    fn test_declination_extremes() {
        // Single harmonic: minimum at day 355, maximum half a year later
        assert!((radians_to_degrees(declination(day(355))) + 23.4).abs() < 1e-3);
        assert!((declination(day(180)) - 0.405_008_003_780_539_14).abs() < EPSILON);
        assert!(radians_to_degrees(declination(day(172))).abs() < 23.4 + EPSILON);
    }

    #[test]
    fn test_equation_of_time_keeps_single_harmonic_sine_term() {
        let gamma = day_angle(day(180));
        let expected = -4.763_601_902_780_851;
        assert!((equation_of_time(gamma) - expected).abs() < EPSILON);

        // The double-harmonic reading of the last term gives a different value.
        let double_harmonic = 0.017 + 0.4281 * cos(gamma) - 7.351 * sin(gamma)
            - 3.349 * cos(2.0 * gamma)
            - 9.731 * sin(2.0 * gamma);
        assert!((equation_of_time(gamma) - double_harmonic).abs() > 1.0);
    }

    #[test]
    fn test_solar_noon() {
        let et = equation_of_time(day_angle(day(180)));
        assert!((solar_noon(et, -0.13) - 12.088_060_031_713_015).abs() < EPSILON);
        // On a standard meridian with zero equation of time, noon is 12:00
        assert_eq!(solar_noon(0.0, 150.0), 12.0);
        // East of the meridian the sun culminates earlier
        assert!(solar_noon(0.0, 155.0) < 12.0);
    }

    #[test]
    fn test_hour_angle() {
        assert_eq!(hour_angle(12.0, 12.0), 0.0);
        assert!((hour_angle(18.0, 12.0) - PI / 2.0).abs() < EPSILON);
        assert!((hour_angle(0.0, 12.0) + PI).abs() < EPSILON);
    }

    #[test]
    fn test_cos_zenith_is_clamped() {
        // Midnight at the equator on the equinox
        assert_eq!(cos_zenith(0.0, 0.0, PI), 0.0);
        // Sun overhead
        assert!((cos_zenith(0.0, 0.0, 0.0) - 1.0).abs() < EPSILON);
        assert!((elevation_from_cos_zenith(1.0) - 90.0).abs() < EPSILON);
        assert!(elevation_from_cos_zenith(0.0).abs() < EPSILON);
    }

    #[test]
    fn test_london_midsummer() {
        let ctx = DayContext::new(180, 51.5, -0.13).unwrap();
        let geometry = solar_geometry(&ctx);

        assert!((geometry.cos_zenith[23] - 0.880_368_744_569_769_5).abs() < EPSILON);
        assert!((geometry.elevation[23] - 61.686_876_892_233_88).abs() < EPSILON);
        assert_eq!(geometry.elevation.argmax(), 23);

        for slot in 0..7 {
            assert_eq!(geometry.cos_zenith[slot], 0.0);
            assert_eq!(geometry.elevation[slot], 0.0);
        }
    }
}

//! Diurnal distribution of daily shortwave radiation as PAR.
//!
//! The daily total is spread over the daylight slots following the cosine of
//! the hour angle (Paltridge & Platt 1976, eqs. 3.4, 3.7, 3.21, 3.22), then
//! converted to photosynthetically active radiation.
//!
//! Declination here comes from the seven-term Fourier series of Spencer (1971)
//! and is intentionally different from the single-harmonic form in
//! [`crate::solar`]; the two models were validated against their own
//! geometry.
//!
//! Summing a continuous cosine curve on 48 discrete slots does not reproduce
//! the daily total exactly. The difference is reported in
//! [`ParProfile::residual`] and is not redistributed.
//!
//! ## References
//!
//! - Paltridge, G. W.; Platt, C. M. R. (1976). Radiative Processes in
//!   Meteorology and Climatology. Elsevier.

#![allow(clippy::unreadable_literal)]

use crate::Result;
use crate::error::check_radiation;
use crate::math::{PI, acos, cos, degrees_to_radians, sin, tan};
use crate::solar::DAYS_PER_YEAR;
use crate::time::{DayOfYear, HOURS_PER_DAY, slot_hour};
use crate::types::{DayContext, Daylight, HalfHourSeries};
use log::debug;

/// Shortwave to PAR conversion (µmol J⁻¹, including the PAR fraction).
pub const SW_TO_PAR: f64 = 2.3;

/// Joules per megajoule.
const J_PER_MJ: f64 = 1.0e6;

/// Seconds per day.
const SECONDS_PER_DAY: f64 = 86_400.0;

/// MJ m⁻² d⁻¹ corresponding to a constant flux of 1 W m⁻².
const MJ_PER_DAY_PER_WATT: f64 = 0.0864;

/// Lower bound on the normalised daily solar integral.
const MIN_SOLAR_NORM: f64 = 1.0e-6;

/// Half-hourly PAR for one day plus the geometry that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParProfile {
    /// PAR flux density per slot (µmol m⁻² s⁻¹)
    pub par: HalfHourSeries,
    /// Day length (hours)
    pub day_length: f64,
    /// Daily total minus the discretised sum (MJ m⁻² d⁻¹)
    pub residual: f64,
    /// Whether the sun rises and sets on this day
    pub daylight: Daylight,
}

/// Solar declination in radians from the seven-term Fourier series
/// (Paltridge & Platt eq. 3.7).
#[must_use]
pub fn declination(day_of_year: DayOfYear) -> f64 {
    let ryear = 2.0 * PI * (day_of_year.as_f64() - 1.0) / DAYS_PER_YEAR;

    0.006918 - 0.399912 * cos(ryear) + 0.070257 * sin(ryear) - 0.006758 * cos(2.0 * ryear)
        + 0.000907 * sin(2.0 * ryear)
        - 0.002697 * cos(3.0 * ryear)
        + 0.001480 * sin(3.0 * ryear)
}

/// Half day length in radians (dawn to noon), Paltridge & Platt eq. 3.21.
///
/// Returns π for polar day and 0 for polar night.
#[must_use]
pub fn half_day_length(latitude_rad: f64, declination: f64) -> (f64, Daylight) {
    let cos_hour_angle = -tan(latitude_rad) * tan(declination);

    if cos_hour_angle <= -1.0 {
        (PI, Daylight::PolarDay)
    } else if cos_hour_angle >= 1.0 {
        (0.0, Daylight::PolarNight)
    } else {
        (acos(cos_hour_angle), Daylight::Regular)
    }
}

/// Converts a half day length in radians to a day length in hours.
#[must_use]
pub fn day_length_hours(half_day_length: f64) -> f64 {
    HOURS_PER_DAY * 2.0 * half_day_length / (2.0 * PI)
}

/// Day length in hours and daylight regime for a latitude and day.
#[must_use]
pub fn day_length(latitude: f64, day_of_year: DayOfYear) -> (f64, Daylight) {
    let (half_day, daylight) = half_day_length(degrees_to_radians(latitude), declination(day_of_year));
    (day_length_hours(half_day), daylight)
}

/// Daily top-of-atmosphere irradiance normalised by the solar constant
/// (Paltridge & Platt eq. 3.22).
#[must_use]
pub fn solar_norm(latitude_rad: f64, declination: f64, half_day_length: f64) -> f64 {
    (half_day_length * sin(latitude_rad) * sin(declination)
        + cos(latitude_rad) * cos(declination) * sin(half_day_length))
        / PI
}

/// Mean flux (W m⁻²) of a daily radiation total (MJ m⁻² d⁻¹).
///
/// # Example
/// ```
/// # use diurnal_weather::par::daily_mean_flux;
/// assert!((daily_mean_flux(8.64) - 100.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn daily_mean_flux(sw_rad_day: f64) -> f64 {
    sw_rad_day / MJ_PER_DAY_PER_WATT
}

/// Converts a shortwave rate in MJ m⁻² d⁻¹ to PAR in µmol m⁻² s⁻¹.
#[must_use]
pub fn shortwave_to_par(sw_rad: f64) -> f64 {
    sw_rad * J_PER_MJ / SECONDS_PER_DAY * SW_TO_PAR
}

/// Distributes a daily shortwave total (MJ m⁻² d⁻¹) over the day as PAR.
///
/// Slots outside the daylight window receive zero. During polar day every slot
/// is lit; during polar night none is.
///
/// # Errors
/// Returns `InvalidRadiation` if `sw_rad_day` is negative or not finite.
///
/// # Example
/// ```
/// # use diurnal_weather::{DayContext, par};
/// let ctx = DayContext::new(180, 51.5, -0.13).unwrap();
/// let profile = par::disaggregate_par(&ctx, 50.0).unwrap();
/// assert!(profile.day_length > 16.0);
/// assert_eq!(profile.par[0], 0.0);
/// assert!(profile.par[23] > 1500.0);
/// ```
pub fn disaggregate_par(context: &DayContext, sw_rad_day: f64) -> Result<ParProfile> {
    check_radiation(sw_rad_day)?;

    let rlat = degrees_to_radians(context.latitude());
    let rdec = declination(context.day_of_year());
    let (half_day, daylight) = half_day_length(rlat, rdec);
    let day_length = day_length_hours(half_day);
    let norm = solar_norm(rlat, rdec, half_day).max(MIN_SOLAR_NORM);

    let sw_rad = HalfHourSeries::from_fn(|slot| {
        // Time from noon as a fraction of the day, scaled to [-π, π]
        let rtime = 2.0 * PI * (slot_hour(slot) / HOURS_PER_DAY - 0.5);

        if daylight.is_polar_day() || rtime.abs() < half_day {
            let insolation = sin(rdec) * sin(rlat) + cos(rdec) * cos(rlat) * cos(rtime);
            // 48 half-hour slots sample a rate defined per hour
            (sw_rad_day / norm) * insolation / 2.0
        } else {
            0.0
        }
    });

    let residual = sw_rad_day - sw_rad.sum() / HOURS_PER_DAY;
    debug!(
        "PAR disaggregation: day {} lat {:.2}: day length {:.2} h ({:?}), residual {:.4} MJ m-2",
        context.day_of_year().get(),
        context.latitude(),
        day_length,
        daylight,
        residual
    );

    Ok(ParProfile {
        par: HalfHourSeries::from_fn(|slot| shortwave_to_par(sw_rad[slot])),
        day_length,
        residual,
        daylight,
    })
}

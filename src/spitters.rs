//! Diffuse/direct partitioning of global radiation after Spitters et al. (1986).
//!
//! For each slot the ratio of surface to extraterrestrial irradiance (the
//! clearness index) selects the diffuse fraction from an empirical piecewise
//! relationship. Near the horizon (zenith > ~80°) all radiation is diffuse.
//!
//! ## References
//!
//! - Spitters, C. J. T.; Toussaint, H. A. J. M.; Goudriaan, J. (1986).
//!   Separating the diffuse and direct component of global radiation and its
//!   implications for modeling canopy photosynthesis. Part I. Components of
//!   incoming radiation. Agricultural and Forest Meteorology, 38, 217-229.

use crate::Result;
use crate::error::check_radiation;
use crate::math::{PI, clamp, cos, polynomial, powi};
use crate::solar::DAYS_PER_YEAR;
use crate::time::DayOfYear;
use crate::types::HalfHourSeries;
use log::trace;

/// Solar constant (W m⁻²).
pub const SOLAR_CONSTANT: f64 = 1370.0;

/// Zenith cosine below which the sky is treated as fully diffuse (~80°).
const LOW_SUN_COS_ZENITH: f64 = 0.17;

/// Coefficients of the diffuse ratio R(cos θ), Spitters eq. 20.
const DIFFUSE_RATIO_COEFFS: [f64; 3] = [0.847, -1.61, 1.04];

/// Direct and diffuse fractions of global radiation for every slot.
///
/// The two fractions sum to one in every slot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RadiationPartition {
    /// Direct (beam) fraction
    pub direct: HalfHourSeries,
    /// Diffuse fraction
    pub diffuse: HalfHourSeries,
}

/// Extraterrestrial irradiance on a horizontal plane (W m⁻²), Spitters eq. 1.
#[must_use]
pub fn extraterrestrial_irradiance(day_of_year: DayOfYear, cos_zenith: f64) -> f64 {
    SOLAR_CONSTANT * (1.0 + 0.033 * cos(day_of_year.as_f64() / DAYS_PER_YEAR * 2.0 * PI))
        * cos_zenith
}

/// Clearness index: surface over extraterrestrial irradiance, clamped to [0, 1].
///
/// Zero when the sun is at or below the horizon.
#[must_use]
pub fn clearness_index(sw_rad: f64, extraterrestrial: f64) -> f64 {
    if extraterrestrial <= 0.0 {
        return 0.0;
    }
    clamp(sw_rad / extraterrestrial, 0.0, 1.0)
}

/// Diffuse fraction for a clearness index and zenith cosine, clamped to [0, 1].
#[must_use]
pub fn diffuse_fraction(tau: f64, cos_zenith: f64) -> f64 {
    if cos_zenith <= LOW_SUN_COS_ZENITH {
        return 1.0;
    }

    let r = polynomial(&DIFFUSE_RATIO_COEFFS, cos_zenith);
    let k = (1.47 - r) / 1.66;

    let fraction = if tau <= 0.22 {
        1.0
    } else if tau <= 0.35 {
        1.0 - 6.4 * powi(tau - 0.22, 2)
    } else if tau <= k {
        1.47 - 1.66 * tau
    } else {
        r
    };

    clamp(fraction, 0.0, 1.0)
}

/// Splits global radiation into direct and diffuse fractions for each slot.
///
/// `sw_rad` is the daily mean global radiation flux (W m⁻²), see
/// [`crate::par::daily_mean_flux`]; `cos_zenith` comes from
/// [`crate::solar::solar_geometry`].
///
/// # Errors
/// Returns `InvalidRadiation` if `sw_rad` is negative or not finite.
///
/// # Example
/// ```
/// # use diurnal_weather::{DayContext, solar, spitters};
/// let ctx = DayContext::new(180, 51.5, -0.13).unwrap();
/// let geometry = solar::solar_geometry(&ctx);
/// let split = spitters::partition(ctx.day_of_year(), 578.7, &geometry.cos_zenith).unwrap();
/// assert_eq!(split.diffuse[0], 1.0); // night
/// assert!(split.direct[23] > 0.3);
/// ```
pub fn partition(
    day_of_year: DayOfYear,
    sw_rad: f64,
    cos_zenith: &HalfHourSeries,
) -> Result<RadiationPartition> {
    check_radiation(sw_rad)?;

    let diffuse = HalfHourSeries::from_fn(|slot| {
        let cz = cos_zenith[slot];
        let tau = clearness_index(sw_rad, extraterrestrial_irradiance(day_of_year, cz));
        diffuse_fraction(tau, cz)
    });
    let direct = HalfHourSeries::from_fn(|slot| 1.0 - diffuse[slot]);

    trace!(
        "Spitters partition: {} of 48 slots fully diffuse",
        diffuse.iter().filter(|&&d| d >= 1.0).count()
    );

    Ok(RadiationPartition { direct, diffuse })
}

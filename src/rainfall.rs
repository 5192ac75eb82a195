//! Stochastic disaggregation of a daily rainfall total.
//!
//! The daily total is assigned to half-hour slots by one of three regimes,
//! chosen by intensity:
//!
//! | total (mm)        | regime                                           |
//! |-------------------|--------------------------------------------------|
//! | ≤ 2               | whole total in one random slot                   |
//! | > 46              | spread evenly over all 48 slots                  |
//! | otherwise         | `floor(total / 2)` draws of `total / n` each     |
//!
//! Random slots are drawn from slots 0 to 46; slot 47 (23:30-24:00) only
//! receives rain in the saturated regime. Draws are with replacement and
//! accumulate, so the daily total is conserved even when a slot is drawn twice.
//!
//! The random source is always supplied by the caller. Use
//! [`disaggregate_rainfall_seeded`] for a reproducible series from a seed.

use crate::Result;
use crate::error::check_rainfall;
use crate::math::floor;
use crate::time::STEPS_PER_DAY;
use crate::types::HalfHourSeries;
use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Totals up to this amount (mm) fall in a single slot.
pub const LIGHT_RAIN_THRESHOLD: f64 = 2.0;

/// Totals above this amount (mm) are spread over every slot.
pub const SATURATED_RAIN_THRESHOLD: f64 = 46.0;

/// Rain per drawn slot in the sampled regime, before rescaling (mm).
const SAMPLED_SLOT_AMOUNT: f64 = 2.0;

/// Slots eligible for random draws (0 to 46).
const DRAWABLE_SLOTS: usize = STEPS_PER_DAY - 1;

/// How a daily total is distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RainfallRegime {
    /// Entire total in one slot
    Light,
    /// `draws` slots drawn with replacement, each receiving `total / draws`
    Sampled {
        /// Number of draws
        draws: usize,
    },
    /// Uniform over all slots
    Saturated,
}

impl RainfallRegime {
    /// Selects the regime for a daily total (mm).
    ///
    /// # Errors
    /// Returns `InvalidRainfall` if `total` is negative or not finite.
    ///
    /// # Example
    /// ```
    /// # use diurnal_weather::rainfall::RainfallRegime;
    /// assert_eq!(RainfallRegime::for_total(1.5).unwrap(), RainfallRegime::Light);
    /// assert_eq!(RainfallRegime::for_total(20.0).unwrap(), RainfallRegime::Sampled { draws: 10 });
    /// assert_eq!(RainfallRegime::for_total(50.0).unwrap(), RainfallRegime::Saturated);
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn for_total(total: f64) -> Result<Self> {
        check_rainfall(total)?;

        Ok(if total <= LIGHT_RAIN_THRESHOLD {
            Self::Light
        } else if total > SATURATED_RAIN_THRESHOLD {
            Self::Saturated
        } else {
            // 2 < total <= 46, so draws is in 1..=23
            Self::Sampled {
                draws: floor(total / SAMPLED_SLOT_AMOUNT) as usize,
            }
        })
    }
}

/// Distributes a daily rainfall total (mm) over 48 half-hour slots.
///
/// The slots always sum to `total` up to floating-point rounding. A zero total
/// yields an all-zero series.
///
/// # Errors
/// Returns `InvalidRainfall` if `total` is negative or not finite.
///
/// # Example
/// ```
/// # use diurnal_weather::rainfall::disaggregate_rainfall;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let rain = disaggregate_rainfall(1.5, &mut rng).unwrap();
/// assert_eq!(rain.count_positive(), 1);
/// assert_eq!(rain.sum(), 1.5);
/// ```
pub fn disaggregate_rainfall<R: Rng>(total: f64, rng: &mut R) -> Result<HalfHourSeries> {
    let regime = RainfallRegime::for_total(total)?;
    let mut slots = [0.0; STEPS_PER_DAY];

    match regime {
        RainfallRegime::Light => {
            slots[rng.random_range(0..DRAWABLE_SLOTS)] = total;
        }
        RainfallRegime::Sampled { draws } => {
            let rate = total / draws as f64;
            for _ in 0..draws {
                slots[rng.random_range(0..DRAWABLE_SLOTS)] += rate;
            }
        }
        RainfallRegime::Saturated => {
            slots = [total / STEPS_PER_DAY as f64; STEPS_PER_DAY];
        }
    }

    let rain = HalfHourSeries::from(slots);
    trace!(
        "rainfall {:.2} mm as {:?}: {} wet slots",
        total,
        regime,
        rain.count_positive()
    );

    Ok(rain)
}

/// [`disaggregate_rainfall`] with a `ChaCha8Rng` seeded from `seed`.
///
/// The same `(total, seed)` pair always produces the same series, on every
/// platform.
///
/// # Errors
/// Returns `InvalidRainfall` if `total` is negative or not finite.
pub fn disaggregate_rainfall_seeded(total: f64, seed: u64) -> Result<HalfHourSeries> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    disaggregate_rainfall(total, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime_thresholds() {
        assert_eq!(RainfallRegime::for_total(0.0).unwrap(), RainfallRegime::Light);
        assert_eq!(RainfallRegime::for_total(2.0).unwrap(), RainfallRegime::Light);
        assert_eq!(
            RainfallRegime::for_total(2.01).unwrap(),
            RainfallRegime::Sampled { draws: 1 }
        );
        assert_eq!(
            RainfallRegime::for_total(46.0).unwrap(),
            RainfallRegime::Sampled { draws: 23 }
        );
        assert_eq!(RainfallRegime::for_total(46.01).unwrap(), RainfallRegime::Saturated);
    }

    #[test]
    fn test_light_rain_single_slot() {
        let rain = disaggregate_rainfall_seeded(1.5, 42).unwrap();
        assert_eq!(rain.count_positive(), 1);
        assert_eq!(rain.max(), 1.5);
        assert_eq!(rain.sum(), 1.5);
        assert_eq!(rain[47], 0.0);
    }

    #[test]
    fn test_saturated_rain_is_uniform() {
        let rain = disaggregate_rainfall_seeded(50.0, 42).unwrap();
        for value in &rain {
            assert_eq!(*value, 50.0 / 48.0);
        }
        assert!((rain.sum() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_sampled_rain_conserves_total() {
        let rain = disaggregate_rainfall_seeded(20.0, 42).unwrap();
        assert_eq!(rain.sum(), 20.0);
        assert!(rain.count_positive() <= 10);
        assert_eq!(rain[47], 0.0);
        // Every wet slot holds a whole number of 2 mm draws
        for value in &rain {
            assert_eq!(value % 2.0, 0.0);
        }
    }

    #[test]
    fn test_zero_rain_is_dry() {
        let rain = disaggregate_rainfall_seeded(0.0, 1).unwrap();
        assert_eq!(rain.count_positive(), 0);
    }

    #[test]
    fn test_seed_reproducibility() {
        let a = disaggregate_rainfall_seeded(17.3, 2024).unwrap();
        let b = disaggregate_rainfall_seeded(17.3, 2024).unwrap();
        assert_eq!(a, b);

        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        assert_eq!(disaggregate_rainfall(17.3, &mut rng).unwrap(), a);
    }

    #[test]
    fn test_rejects_invalid_totals() {
        assert!(disaggregate_rainfall_seeded(-0.1, 1).is_err());
        assert!(disaggregate_rainfall_seeded(f64::NAN, 1).is_err());
        assert!(disaggregate_rainfall_seeded(f64::INFINITY, 1).is_err());
    }
}

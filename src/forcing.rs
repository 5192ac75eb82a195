//! Whole-day disaggregation: every component run once for one day and site.
//!
//! Components run in dependency order. The PAR step supplies the day length
//! used by the temperature model, and the daily mean shortwave flux drives the
//! Spitters partition.

use crate::Result;
use crate::par::{self, ParProfile};
use crate::rainfall::disaggregate_rainfall;
use crate::solar::{self, SolarGeometry};
use crate::spitters::{self, RadiationPartition};
use crate::temperature::TemperatureModel;
use crate::types::{DailyObservation, DayContext, HalfHourSeries};
use crate::vpd::interpolate_vpd;
use rand::Rng;

/// Options for [`disaggregate_day`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForcingConfig {
    /// Diurnal temperature model
    pub temperature_model: TemperatureModel,
}

impl ForcingConfig {
    /// Creates a configuration with the given temperature model.
    #[must_use]
    pub const fn new(temperature_model: TemperatureModel) -> Self {
        Self { temperature_model }
    }
}

/// Half-hourly forcing for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiurnalForcing {
    /// PAR (µmol m⁻² s⁻¹) with day length and discretisation residual
    pub par: ParProfile,
    /// Solar elevation and zenith cosine
    pub geometry: SolarGeometry,
    /// Direct and diffuse fractions of global radiation
    pub partition: RadiationPartition,
    /// Air temperature (°C)
    pub temperature: HalfHourSeries,
    /// Vapour pressure deficit (kPa)
    pub vpd: HalfHourSeries,
    /// Rainfall (mm per slot)
    pub rainfall: HalfHourSeries,
}

/// Disaggregates one day of observations to 48 half-hourly values.
///
/// `rng` is only used for rainfall; every other series is deterministic.
///
/// # Errors
/// Returns the first error raised by a component. Inputs built through
/// [`DailyObservation::new`] and [`DayContext::new`] are already validated, so
/// this only fails for invalid temperature model coefficients.
///
/// # Example
/// ```
/// # use diurnal_weather::{DailyObservation, DayContext, VpdReadings};
/// # use diurnal_weather::forcing::{disaggregate_day, ForcingConfig};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let ctx = DayContext::new(180, 51.5, -0.13).unwrap();
/// let vpd = VpdReadings::new(1.4, 2.3, 3.4, 1.8).unwrap();
/// let obs = DailyObservation::new(2.0, 24.0, 50.0, vpd, 20.0).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
///
/// let day = disaggregate_day(&ctx, &obs, &ForcingConfig::default(), &mut rng).unwrap();
/// assert!(day.par.day_length > 16.0);
/// assert_eq!(day.vpd[17], 1.4);
/// assert_eq!(day.rainfall.sum(), 20.0);
/// ```
pub fn disaggregate_day<R: Rng>(
    context: &DayContext,
    observation: &DailyObservation,
    config: &ForcingConfig,
    rng: &mut R,
) -> Result<DiurnalForcing> {
    let par = par::disaggregate_par(context, observation.sw_rad_day())?;
    let geometry = solar::solar_geometry(context);
    let partition = spitters::partition(
        context.day_of_year(),
        par::daily_mean_flux(observation.sw_rad_day()),
        &geometry.cos_zenith,
    )?;
    let temperature = config.temperature_model.disaggregate(
        observation.tmin(),
        observation.tmax(),
        par.day_length,
    )?;
    let vpd = interpolate_vpd(observation.vpd())?;
    let rainfall = disaggregate_rainfall(observation.rainfall(), rng)?;

    Ok(DiurnalForcing {
        par,
        geometry,
        partition,
        temperature,
        vpd,
        rainfall,
    })
}

//! Core data types shared by the disaggregation components.

use crate::Result;
use crate::error::{
    check_coordinates, check_radiation, check_rainfall, check_temperature_range, check_vpd,
};
use crate::time::{DayOfYear, STEPS_PER_DAY, slot_hour};
use core::ops::Index;

/// Exactly [`STEPS_PER_DAY`] half-hourly values for one day.
///
/// Index 0 is the 00:00–00:30 slot and index 47 is 23:30–24:00; see
/// [`crate::time::slot_hour`] for the hour each slot is evaluated at. A series
/// is produced whole by one disaggregation call and exposes no mutation API.
///
/// # Example
/// ```
/// # use diurnal_weather::HalfHourSeries;
/// let series = HalfHourSeries::from_fn(|slot| slot as f64);
/// assert_eq!(series.len(), 48);
/// assert_eq!(series[47], 47.0);
/// assert_eq!(series.argmax(), 47);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfHourSeries([f64; STEPS_PER_DAY]);

impl HalfHourSeries {
    /// A series with every slot set to zero.
    #[must_use]
    pub const fn zeros() -> Self {
        Self([0.0; STEPS_PER_DAY])
    }

    /// Builds a series by evaluating `f` for each slot index.
    pub fn from_fn<F: FnMut(usize) -> f64>(f: F) -> Self {
        Self(core::array::from_fn(f))
    }

    /// Builds a series by evaluating `f` at each slot's hour of day.
    pub fn from_hours<F: FnMut(f64) -> f64>(mut f: F) -> Self {
        Self::from_fn(|slot| f(slot_hour(slot)))
    }

    /// Number of slots (always [`STEPS_PER_DAY`]).
    #[must_use]
    #[allow(clippy::len_without_is_empty, clippy::unused_self)]
    pub const fn len(&self) -> usize {
        STEPS_PER_DAY
    }

    /// Borrows the underlying array.
    #[must_use]
    pub const fn as_array(&self) -> &[f64; STEPS_PER_DAY] {
        &self.0
    }

    /// Borrows the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the series, returning the underlying array.
    #[must_use]
    pub const fn into_inner(self) -> [f64; STEPS_PER_DAY] {
        self.0
    }

    /// Iterates over the values in slot order.
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Sum of all slots.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Mean over all slots.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.sum() / STEPS_PER_DAY as f64
    }

    /// Largest value.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest value.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Index of the first slot holding the largest value.
    #[must_use]
    pub fn argmax(&self) -> usize {
        let max = self.max();
        self.0.iter().position(|&v| v == max).unwrap_or(0)
    }

    /// Index of the first slot holding the smallest value.
    #[must_use]
    pub fn argmin(&self) -> usize {
        let min = self.min();
        self.0.iter().position(|&v| v == min).unwrap_or(0)
    }

    /// Number of slots with a strictly positive value.
    #[must_use]
    pub fn count_positive(&self) -> usize {
        self.0.iter().filter(|&&v| v > 0.0).count()
    }

    /// Indices of the slots with a strictly positive value.
    pub fn positive_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > 0.0)
            .map(|(slot, _)| slot)
    }
}

impl Default for HalfHourSeries {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[f64; STEPS_PER_DAY]> for HalfHourSeries {
    fn from(values: [f64; STEPS_PER_DAY]) -> Self {
        Self(values)
    }
}

impl Index<usize> for HalfHourSeries {
    type Output = f64;

    fn index(&self, slot: usize) -> &f64 {
        &self.0[slot]
    }
}

impl<'a> IntoIterator for &'a HalfHourSeries {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HalfHourSeries {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

/// Where and when a day is being disaggregated.
///
/// # Example
/// ```
/// # use diurnal_weather::DayContext;
/// let london = DayContext::new(180, 51.5, -0.13).unwrap();
/// assert_eq!(london.day_of_year().get(), 180);
/// assert!(DayContext::new(180, 95.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayContext {
    /// Day of year (1-366)
    day_of_year: DayOfYear,
    /// Latitude in degrees (-90 to +90, north positive)
    latitude: f64,
    /// Longitude in degrees (-180 to +180, east positive)
    longitude: f64,
}

impl DayContext {
    /// Creates a validated day context.
    ///
    /// # Errors
    /// Returns `InvalidDayOfYear`, `InvalidLatitude` or `InvalidLongitude`.
    pub fn new(day_of_year: u32, latitude: f64, longitude: f64) -> Result<Self> {
        Self::from_day(DayOfYear::new(day_of_year)?, latitude, longitude)
    }

    /// Creates a day context from an already validated [`DayOfYear`].
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn from_day(day_of_year: DayOfYear, latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            day_of_year,
            latitude,
            longitude,
        })
    }

    /// Gets the day of year.
    #[must_use]
    pub const fn day_of_year(&self) -> DayOfYear {
        self.day_of_year
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Daily vapour pressure deficit readings (kPa) around the current day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VpdReadings {
    /// 9am VPD of the current day
    pub vpd09: f64,
    /// 3pm VPD of the current day
    pub vpd15: f64,
    /// 3pm VPD of the previous day
    pub vpd15_prev: f64,
    /// 9am VPD of the next day
    pub vpd09_next: f64,
}

impl VpdReadings {
    /// Creates validated VPD readings.
    ///
    /// # Errors
    /// Returns `InvalidVaporPressureDeficit` for any negative or non-finite reading.
    pub fn new(vpd09: f64, vpd15: f64, vpd15_prev: f64, vpd09_next: f64) -> Result<Self> {
        let readings = Self {
            vpd09,
            vpd15,
            vpd15_prev,
            vpd09_next,
        };
        readings.validate()?;
        Ok(readings)
    }

    /// Checks every reading.
    ///
    /// # Errors
    /// Returns `InvalidVaporPressureDeficit` for the first invalid reading.
    pub fn validate(&self) -> Result<()> {
        check_vpd(self.vpd15_prev)?;
        check_vpd(self.vpd09)?;
        check_vpd(self.vpd15)?;
        check_vpd(self.vpd09_next)?;
        Ok(())
    }
}

/// Observed daily weather for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailyObservation {
    /// Daily minimum air temperature (°C)
    tmin: f64,
    /// Daily maximum air temperature (°C)
    tmax: f64,
    /// Total daily shortwave radiation (MJ m⁻² d⁻¹)
    sw_rad_day: f64,
    /// VPD readings bracketing the day
    vpd: VpdReadings,
    /// Daily rainfall total (mm)
    rainfall: f64,
}

impl DailyObservation {
    /// Creates a validated daily observation.
    ///
    /// # Errors
    /// Returns `InvalidTemperatureRange`, `InvalidRadiation`,
    /// `InvalidVaporPressureDeficit` or `InvalidRainfall`.
    pub fn new(
        tmin: f64,
        tmax: f64,
        sw_rad_day: f64,
        vpd: VpdReadings,
        rainfall: f64,
    ) -> Result<Self> {
        check_temperature_range(tmin, tmax)?;
        check_radiation(sw_rad_day)?;
        vpd.validate()?;
        check_rainfall(rainfall)?;
        Ok(Self {
            tmin,
            tmax,
            sw_rad_day,
            vpd,
            rainfall,
        })
    }

    /// Daily minimum temperature (°C).
    #[must_use]
    pub const fn tmin(&self) -> f64 {
        self.tmin
    }

    /// Daily maximum temperature (°C).
    #[must_use]
    pub const fn tmax(&self) -> f64 {
        self.tmax
    }

    /// Total daily shortwave radiation (MJ m⁻² d⁻¹).
    #[must_use]
    pub const fn sw_rad_day(&self) -> f64 {
        self.sw_rad_day
    }

    /// VPD readings (kPa).
    #[must_use]
    pub const fn vpd(&self) -> &VpdReadings {
        &self.vpd
    }

    /// Daily rainfall total (mm).
    #[must_use]
    pub const fn rainfall(&self) -> f64 {
        self.rainfall
    }
}

/// Sunlight regime of a day at a given latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Daylight {
    /// Sun rises and sets
    Regular,
    /// Polar day - sun never sets
    PolarDay,
    /// Polar night - sun never rises
    PolarNight,
}

impl Daylight {
    /// Checks if this is a polar day.
    #[must_use]
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::PolarDay)
    }

    /// Checks if this is a polar night.
    #[must_use]
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::PolarNight)
    }
}

//! Calendar and time-of-day handling.
//!
//! Every component works on the same fixed grid of [`STEPS_PER_DAY`] half-hour
//! slots. Slot `i` covers the interval ending at hour `(i + 1) / 2`, so slot 0
//! is 00:00–00:30 (evaluated at 00:30), slot 17 is evaluated at 09:00, slot 29
//! at 15:00 and slot 47 at 24:00. [`slot_hour`] is the single definition of
//! this mapping.

#![allow(clippy::cast_sign_loss)]

use crate::error::check_day_of_year;
use crate::math::ceil;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Number of half-hour slots in a day.
pub const STEPS_PER_DAY: usize = 48;

/// Length of one slot in hours.
pub const HOURS_PER_STEP: f64 = 0.5;

/// Hours in a day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Cumulative day count at the start of each month in a common year.
const MONTH_START: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Hour of day (0.5 to 24.0) at which slot `slot` is evaluated.
///
/// # Example
/// ```
/// # use diurnal_weather::time::slot_hour;
/// assert_eq!(slot_hour(0), 0.5);
/// assert_eq!(slot_hour(17), 9.0);
/// assert_eq!(slot_hour(47), 24.0);
/// ```
#[inline]
#[must_use]
pub const fn slot_hour(slot: usize) -> f64 {
    (slot + 1) as f64 * HOURS_PER_STEP
}

/// Slot whose half-hour interval contains `hour`.
///
/// Intervals are open at the start and closed at the end, so `9.0` maps to the
/// slot evaluated at 09:00 and `9.25` to the one evaluated at 09:30.
///
/// # Errors
/// Returns `InvalidSlot` if `hour` is not within (0, 24].
///
/// # Example
/// ```
/// # use diurnal_weather::time::slot_for_hour;
/// assert_eq!(slot_for_hour(9.0).unwrap(), 17);
/// assert_eq!(slot_for_hour(15.0).unwrap(), 29);
/// assert!(slot_for_hour(0.0).is_err());
/// ```
pub fn slot_for_hour(hour: f64) -> Result<usize> {
    if !(hour > 0.0 && hour <= HOURS_PER_DAY) {
        return Err(Error::invalid_slot("hour must be within (0, 24]"));
    }
    Ok(ceil(hour / HOURS_PER_STEP) as usize - 1)
}

/// Iterates over `(slot, hour)` pairs for one day.
pub fn slot_hours() -> impl Iterator<Item = (usize, f64)> {
    (0..STEPS_PER_DAY).map(|slot| (slot, slot_hour(slot)))
}

/// Validated day of year (1 = 1 January).
///
/// # Example
/// ```
/// # use diurnal_weather::time::DayOfYear;
/// let solstice = DayOfYear::from_ymd(2024, 6, 21).unwrap();
/// assert_eq!(solstice.get(), 173);
/// assert!(DayOfYear::new(367).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct DayOfYear(u32);

impl DayOfYear {
    /// Creates a day of year.
    ///
    /// # Errors
    /// Returns `InvalidDayOfYear` for values outside 1..=366.
    pub fn new(day_of_year: u32) -> Result<Self> {
        check_day_of_year(day_of_year)?;
        Ok(Self(day_of_year))
    }

    /// Day of year for a Gregorian calendar date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month or day is out of range.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }

        let leap_offset = u32::from(month > 2 && is_leap_year(year));
        Self::new(MONTH_START[(month - 1) as usize] + day + leap_offset)
    }

    /// Day of year for any chrono date-like value.
    ///
    /// # Errors
    /// Never fails for a valid chrono date; the `Result` mirrors [`DayOfYear::new`].
    #[cfg(feature = "chrono")]
    pub fn from_date_like<D: Datelike>(date: &D) -> Result<Self> {
        Self::new(date.ordinal())
    }

    /// Gets the raw day-of-year number.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Gets the day of year as a float for use in trigonometric formulas.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u32> for DayOfYear {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DayOfYear> for u32 {
    fn from(value: DayOfYear) -> Self {
        value.0
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

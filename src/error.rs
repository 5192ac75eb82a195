//! Error types for the disaggregation library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Invalid inputs rejected before any disaggregation runs.
///
/// Physically degenerate but valid states (polar night, sun below the horizon)
/// are never errors; they produce well-defined boundary values instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid day of year (must be between 1 and 366).
    InvalidDayOfYear {
        /// The invalid day of year provided.
        value: u32,
    },
    /// Invalid calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// Daily maximum temperature below the minimum, or a non-finite bound.
    InvalidTemperatureRange {
        /// Daily minimum temperature (°C).
        tmin: f64,
        /// Daily maximum temperature (°C).
        tmax: f64,
    },
    /// Invalid day length (must be between 0 and 24 hours).
    InvalidDayLength {
        /// The invalid day length provided.
        value: f64,
    },
    /// Invalid shortwave radiation (must be finite and non-negative).
    InvalidRadiation {
        /// The invalid radiation value provided.
        value: f64,
    },
    /// Invalid vapour pressure deficit (must be finite and non-negative).
    InvalidVaporPressureDeficit {
        /// The invalid VPD value provided.
        value: f64,
    },
    /// Invalid daily rainfall total (must be finite and non-negative).
    InvalidRainfall {
        /// The invalid rainfall total provided.
        value: f64,
    },
    /// Invalid model coefficient.
    InvalidCoefficient {
        /// Name of the coefficient.
        name: &'static str,
        /// The invalid value provided.
        value: f64,
    },
    /// Slot index or hour outside the 48 half-hour slots of a day.
    InvalidSlot {
        /// Description of the slot constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDayOfYear { value } => {
                write!(f, "invalid day of year {value} (must be between 1 and 366)")
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::InvalidTemperatureRange { tmin, tmax } => {
                write!(
                    f,
                    "invalid temperature range: tmax {tmax}°C must be finite and not below tmin {tmin}°C"
                )
            }
            Self::InvalidDayLength { value } => {
                write!(f, "invalid day length {value} h (must be between 0 and 24)")
            }
            Self::InvalidRadiation { value } => {
                write!(
                    f,
                    "invalid shortwave radiation {value} (must be finite and non-negative)"
                )
            }
            Self::InvalidVaporPressureDeficit { value } => {
                write!(
                    f,
                    "invalid vapour pressure deficit {value} kPa (must be finite and non-negative)"
                )
            }
            Self::InvalidRainfall { value } => {
                write!(
                    f,
                    "invalid rainfall {value} mm (must be finite and non-negative)"
                )
            }
            Self::InvalidCoefficient { name, value } => {
                write!(f, "invalid coefficient {name} = {value}")
            }
            Self::InvalidSlot { message } => write!(f, "invalid slot: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid day of year error.
    #[must_use]
    pub const fn invalid_day_of_year(value: u32) -> Self {
        Self::InvalidDayOfYear { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an invalid temperature range error.
    #[must_use]
    pub const fn invalid_temperature_range(tmin: f64, tmax: f64) -> Self {
        Self::InvalidTemperatureRange { tmin, tmax }
    }

    /// Creates an invalid day length error.
    #[must_use]
    pub const fn invalid_day_length(value: f64) -> Self {
        Self::InvalidDayLength { value }
    }

    /// Creates an invalid radiation error.
    #[must_use]
    pub const fn invalid_radiation(value: f64) -> Self {
        Self::InvalidRadiation { value }
    }

    /// Creates an invalid vapour pressure deficit error.
    #[must_use]
    pub const fn invalid_vpd(value: f64) -> Self {
        Self::InvalidVaporPressureDeficit { value }
    }

    /// Creates an invalid rainfall error.
    #[must_use]
    pub const fn invalid_rainfall(value: f64) -> Self {
        Self::InvalidRainfall { value }
    }

    /// Creates an invalid coefficient error.
    #[must_use]
    pub const fn invalid_coefficient(name: &'static str, value: f64) -> Self {
        Self::InvalidCoefficient { name, value }
    }

    /// Creates an invalid slot error.
    #[must_use]
    pub const fn invalid_slot(message: &'static str) -> Self {
        Self::InvalidSlot { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a day of year is between 1 and 366.
///
/// # Errors
/// Returns `InvalidDayOfYear` for values outside 1..=366.
pub fn check_day_of_year(day_of_year: u32) -> Result<()> {
    if !(1..=366).contains(&day_of_year) {
        return Err(Error::invalid_day_of_year(day_of_year));
    }
    Ok(())
}

/// Validates a daily temperature range (both finite, `tmax >= tmin`).
///
/// # Errors
/// Returns `InvalidTemperatureRange` otherwise.
pub fn check_temperature_range(tmin: f64, tmax: f64) -> Result<()> {
    if !tmin.is_finite() || !tmax.is_finite() || tmax < tmin {
        return Err(Error::invalid_temperature_range(tmin, tmax));
    }
    Ok(())
}

/// Validates a day length is between 0 and 24 hours.
///
/// # Errors
/// Returns `InvalidDayLength` for values outside 0..=24 or NaN.
pub fn check_day_length(day_length: f64) -> Result<()> {
    if !(0.0..=24.0).contains(&day_length) {
        return Err(Error::invalid_day_length(day_length));
    }
    Ok(())
}

/// Validates a shortwave radiation value (daily total or mean flux).
///
/// # Errors
/// Returns `InvalidRadiation` for negative or non-finite values.
pub fn check_radiation(radiation: f64) -> Result<()> {
    if !radiation.is_finite() || radiation < 0.0 {
        return Err(Error::invalid_radiation(radiation));
    }
    Ok(())
}

/// Validates a vapour pressure deficit reading.
///
/// # Errors
/// Returns `InvalidVaporPressureDeficit` for negative or non-finite values.
pub fn check_vpd(vpd: f64) -> Result<()> {
    if !vpd.is_finite() || vpd < 0.0 {
        return Err(Error::invalid_vpd(vpd));
    }
    Ok(())
}

/// Validates a daily rainfall total.
///
/// # Errors
/// Returns `InvalidRainfall` for negative or non-finite values.
pub fn check_rainfall(rainfall: f64) -> Result<()> {
    if !rainfall.is_finite() || rainfall < 0.0 {
        return Err(Error::invalid_rainfall(rainfall));
    }
    Ok(())
}

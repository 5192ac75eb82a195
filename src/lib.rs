//! # Diurnal Weather
//!
//! Half-hourly disaggregation of daily weather observations for ecosystem and
//! land-surface model forcing.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Given one day of observations (shortwave radiation total, minimum and
//! maximum temperature, 9am/3pm vapour pressure deficit and a rainfall total)
//! and a site, this library produces 48 half-hourly values for each variable:
//!
//! - **PAR**: daily shortwave spread over the daylight hours along the cosine of
//!   the hour angle, converted to µmol m⁻² s⁻¹ ([`par`])
//! - **Solar geometry**: elevation and zenith cosine per slot ([`solar`])
//! - **Diffuse/direct split**: Spitters et al. (1986) fractions ([`spitters`])
//! - **Temperature**: Parton & Logan (1981) or MAESTRA ([`temperature`])
//! - **VPD**: piecewise-linear interpolation of four readings ([`vpd`])
//! - **Rainfall**: stochastic assignment with an injected random source ([`rainfall`])
//!
//! [`forcing::disaggregate_day`] runs all of them for one day.
//!
//! ## Features
//!
//! - Pure functions over fixed-size series: no allocation, no I/O, no global state
//! - `no_std` support with `libm`
//! - Reproducible rainfall: the caller owns the random number generator
//! - Polar day and polar night produce well-defined values, never NaN
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable [`DayOfYear::from_date_like`](time::DayOfYear::from_date_like)
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize` for all output series and `Deserialize` for configuration
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! diurnal-weather = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! diurnal-weather = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - De Pury, D. G. G.; Farquhar, G. D. (1997). Simple scaling of photosynthesis from leaves
//!   to canopies without the errors of big-leaf models. Plant, Cell and Environment, 20, 537-557.
//! - Paltridge, G. W.; Platt, C. M. R. (1976). Radiative Processes in Meteorology and
//!   Climatology. Elsevier.
//! - Spitters, C. J. T.; Toussaint, H. A. J. M.; Goudriaan, J. (1986). Separating the diffuse
//!   and direct component of global radiation. Agricultural and Forest Meteorology, 38, 217-229.
//! - Parton, W. J.; Logan, J. A. (1981). A model for diurnal variation in soil and air
//!   temperature. Agricultural Meteorology, 23, 205-216.
//!
//! ## Quick Start
//!
//! ### One day, every variable
//! ```rust
//! use diurnal_weather::{DailyObservation, DayContext, VpdReadings};
//! use diurnal_weather::forcing::{ForcingConfig, disaggregate_day};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // London, 29 June
//! let site = DayContext::new(180, 51.5, -0.13).unwrap();
//! let vpd = VpdReadings::new(1.4, 2.3, 3.4, 1.8).unwrap();
//! let obs = DailyObservation::new(2.0, 24.0, 50.0, vpd, 20.0).unwrap();
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let day = disaggregate_day(&site, &obs, &ForcingConfig::default(), &mut rng).unwrap();
//!
//! println!("Day length: {:.2} h", day.par.day_length);
//! println!("Noon PAR: {:.0} µmol m-2 s-1", day.par.par[23]);
//! println!("Peak temperature: {:.1} °C", day.temperature.max());
//! ```
//!
//! ### Individual components
//! ```rust
//! use diurnal_weather::{DayContext, par, temperature};
//!
//! let site = DayContext::new(180, 51.5, -0.13).unwrap();
//! let profile = par::disaggregate_par(&site, 50.0).unwrap();
//!
//! let temps = temperature::maestra(2.0, 24.0, profile.day_length).unwrap();
//! assert_eq!(temps.argmin(), 7);
//! ```
//!
//! ## Time Grid
//!
//! All series hold [`STEPS_PER_DAY`] = 48 values. Slot `i` is evaluated at hour
//! `(i + 1) / 2`: slot 0 at 00:30, slot 17 at 09:00, slot 47 at 24:00. See
//! [`time::slot_hour`].
//!
//! ## Units
//!
//! - Shortwave radiation: MJ m⁻² d⁻¹ (daily total), W m⁻² (flux)
//! - PAR: µmol m⁻² s⁻¹
//! - Temperature: °C
//! - VPD: kPa
//! - Rainfall: mm

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact slot values are compared in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::time::{DayOfYear, STEPS_PER_DAY};
pub use crate::types::{DailyObservation, DayContext, Daylight, HalfHourSeries, VpdReadings};

// Disaggregation modules
pub mod forcing;
pub mod par;
pub mod rainfall;
pub mod solar;
pub mod spitters;
pub mod temperature;
pub mod vpd;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

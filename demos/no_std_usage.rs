//! Usage without chrono: day of year from calendar components and the
//! individual component functions.
//!
//! Everything called here is available with
//! `default-features = false, features = ["libm"]`.

use diurnal_weather::rainfall::disaggregate_rainfall;
use diurnal_weather::temperature::{PartonLoganCoefficients, parton_logan};
use diurnal_weather::{DayContext, DayOfYear, VpdReadings, par, solar, spitters, vpd};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("Diurnal disaggregation without chrono\n");

    // Sydney, 1 January
    let day = DayOfYear::from_ymd(2024, 1, 1).expect("valid date");
    let site = DayContext::from_day(day, -33.87, 151.21).expect("valid coordinates");

    let profile = par::disaggregate_par(&site, 30.0).expect("valid radiation");
    println!(
        "Day length: {:.2} h, peak PAR {:.0} µmol m-2 s-1 at slot {}",
        profile.day_length,
        profile.par.max(),
        profile.par.argmax()
    );

    let geometry = solar::solar_geometry(&site);
    let split = spitters::partition(day, par::daily_mean_flux(30.0), &geometry.cos_zenith)
        .expect("valid flux");
    println!(
        "Noon elevation {:.1}°, direct fraction {:.2}",
        geometry.elevation[23], split.direct[23]
    );

    let temps = parton_logan(18.0, 29.0, profile.day_length, &PartonLoganCoefficients::default())
        .expect("valid temperatures");
    println!("Temperature range {:.1} to {:.1} °C", temps.min(), temps.max());

    let readings = VpdReadings::new(1.1, 2.6, 2.2, 1.0).expect("valid VPD");
    let deficit = vpd::interpolate_vpd(&readings).expect("valid VPD");
    println!("VPD at 09:00 {:.2} kPa, 15:00 {:.2} kPa", deficit[17], deficit[29]);

    // Any seedable generator works; the same seed reproduces the series
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let rain = disaggregate_rainfall(12.5, &mut rng).expect("valid rainfall");
    let wet: Vec<usize> = rain.positive_slots().collect();
    println!("Rain {:.1} mm in slots {wet:?}", rain.sum());
}

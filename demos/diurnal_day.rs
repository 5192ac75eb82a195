//! Disaggregates one summer day in London and prints the half-hourly table.

use chrono::NaiveDate;
use diurnal_weather::forcing::{ForcingConfig, disaggregate_day};
use diurnal_weather::temperature::TemperatureModel;
use diurnal_weather::time::slot_hours;
use diurnal_weather::{DailyObservation, DayContext, DayOfYear, VpdReadings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let date = NaiveDate::from_ymd_opt(2023, 6, 29).ok_or("invalid date")?;
    let site = DayContext::from_day(DayOfYear::from_date_like(&date)?, 51.5, -0.13)?;

    // Daily observations: 2-24 °C, 50 MJ m-2 shortwave, 20 mm rain
    let vpd = VpdReadings::new(1.4, 2.3, 3.4, 1.8)?;
    let obs = DailyObservation::new(2.0, 24.0, 50.0, vpd, 20.0)?;

    let mut rng = ChaCha8Rng::seed_from_u64(2023);
    let day = disaggregate_day(&site, &obs, &ForcingConfig::default(), &mut rng)?;

    println!("Diurnal forcing for London on {date}");
    println!(
        "Day length: {:.2} h ({:?}), PAR residual: {:.4} MJ m-2",
        day.par.day_length, day.par.daylight, day.par.residual
    );
    println!();
    println!("  time    PAR  elev  direct   temp   VPD  rain");

    for (slot, hour) in slot_hours() {
        println!(
            "{:>6.1} {:>6.0} {:>5.1} {:>7.2} {:>6.1} {:>5.2} {:>5.1}",
            hour,
            day.par.par[slot],
            day.geometry.elevation[slot],
            day.partition.direct[slot],
            day.temperature[slot],
            day.vpd[slot],
            day.rainfall[slot],
        );
    }

    // Same day with the MAESTRA temperature model
    let maestra = ForcingConfig::new(TemperatureModel::Maestra);
    let alt = disaggregate_day(&site, &obs, &maestra, &mut rng)?;
    println!();
    println!(
        "Peak temperature: Parton-Logan {:.2} °C at slot {}, MAESTRA {:.2} °C at slot {}",
        day.temperature.max(),
        day.temperature.argmax(),
        alt.temperature.max(),
        alt.temperature.argmax()
    );

    Ok(())
}

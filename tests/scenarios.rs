//! End-to-end scenarios for typical and degenerate days.

use diurnal_weather::forcing::{ForcingConfig, disaggregate_day};
use diurnal_weather::temperature::{PartonLoganCoefficients, TemperatureModel, parton_logan};
use diurnal_weather::time::{slot_for_hour, slot_hour};
use diurnal_weather::{
    DailyObservation, DayContext, Daylight, Error, VpdReadings, par, rainfall,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn readings() -> VpdReadings {
    VpdReadings::new(1.4, 2.3, 3.4, 1.8).unwrap()
}

#[test]
fn test_london_midsummer_par_window() {
    let ctx = DayContext::new(180, 51.5, -0.13).unwrap();
    let profile = par::disaggregate_par(&ctx, 50.0).unwrap();

    assert!(profile.day_length > 12.0);
    let half_day = profile.day_length / 2.0;
    for slot in 0..48 {
        let from_noon = (slot_hour(slot) - 12.0).abs();
        if from_noon >= half_day {
            assert_eq!(profile.par[slot], 0.0, "slot {slot} outside daylight");
        } else {
            assert!(profile.par[slot] > 0.0, "slot {slot} inside daylight");
        }
    }
}

#[test]
fn test_parton_logan_sunrise_and_peak() {
    let t = parton_logan(2.0, 24.0, 16.0, &PartonLoganCoefficients::default()).unwrap();

    // Sunrise at 12 - 8 - 0.17 = 03:50 falls in the 04:00 slot
    let sunrise_slot = slot_for_hour(3.83).unwrap();
    assert_eq!(sunrise_slot, 7);
    assert!((t[sunrise_slot] - 2.0).abs() < 1e-9);

    // The series maximum is reached in the early afternoon, within 0.01 °C of tmax
    let peak = t.argmax();
    assert!((slot_for_hour(12.0).unwrap()..=slot_for_hour(15.0).unwrap()).contains(&peak));
    assert!((t.max() - 24.0).abs() < 0.01);
}

#[test]
fn test_rainfall_scenarios() {
    let light = rainfall::disaggregate_rainfall_seeded(1.5, 11).unwrap();
    assert_eq!(light.count_positive(), 1);
    assert_eq!(light.max(), 1.5);

    let heavy = rainfall::disaggregate_rainfall_seeded(50.0, 11).unwrap();
    for value in &heavy {
        assert!((value - 1.041_666_666_666_666_7).abs() < 1e-12);
    }

    let moderate = rainfall::disaggregate_rainfall_seeded(20.0, 11).unwrap();
    assert_eq!(moderate.sum(), 20.0);
    assert!(moderate.count_positive() <= 10);
}

#[test]
fn test_polar_night_day_is_well_defined() {
    // Tromsø in late December
    let ctx = DayContext::new(355, 69.65, 18.96).unwrap();
    let vpd = VpdReadings::new(0.05, 0.08, 0.06, 0.04).unwrap();
    let obs = DailyObservation::new(-9.0, -4.0, 0.2, vpd, 3.0).unwrap();

    for model in [TemperatureModel::default(), TemperatureModel::Maestra] {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let day = disaggregate_day(&ctx, &obs, &ForcingConfig::new(model), &mut rng).unwrap();

        assert_eq!(day.par.daylight, Daylight::PolarNight);
        assert_eq!(day.par.day_length, 0.0);
        assert_eq!(day.par.par.sum(), 0.0);
        assert_eq!(day.partition.diffuse.min(), 1.0);
        assert!(day.temperature.iter().all(|t| t.is_finite()));
        assert!(day.temperature.max() <= -4.0);
        assert!((day.rainfall.sum() - 3.0).abs() < 1e-9);
    }
}

#[test]
fn test_polar_day_is_well_defined() {
    // Svalbard at the June solstice
    let ctx = DayContext::new(172, 78.22, 15.65).unwrap();
    let vpd = VpdReadings::new(0.2, 0.35, 0.25, 0.2).unwrap();
    let obs = DailyObservation::new(1.0, 7.0, 25.0, vpd, 0.0).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let day = disaggregate_day(&ctx, &obs, &ForcingConfig::default(), &mut rng).unwrap();

    assert_eq!(day.par.daylight, Daylight::PolarDay);
    assert_eq!(day.par.par.count_positive(), 48);
    assert!(day.temperature.iter().all(|t| t.is_finite()));
    assert!(day.temperature.max() <= 7.0);
    assert_eq!(day.rainfall.count_positive(), 0);
}

#[test]
fn test_invalid_inputs_fail_fast() {
    assert_eq!(
        DayContext::new(180, 91.0, 0.0),
        Err(Error::InvalidLatitude { value: 91.0 })
    );
    assert_eq!(
        DayContext::new(180, 0.0, -181.0),
        Err(Error::InvalidLongitude { value: -181.0 })
    );
    assert_eq!(
        DayContext::new(0, 0.0, 0.0),
        Err(Error::InvalidDayOfYear { value: 0 })
    );
    assert_eq!(
        DailyObservation::new(24.0, 2.0, 50.0, readings(), 0.0),
        Err(Error::InvalidTemperatureRange {
            tmin: 24.0,
            tmax: 2.0
        })
    );
    assert_eq!(
        DailyObservation::new(2.0, 24.0, 50.0, readings(), -1.0),
        Err(Error::InvalidRainfall { value: -1.0 })
    );
}

#[path = "common/mod.rs"]
mod common;

use anyhow::Result;
use common::assert_close;
use psychro::{
    Error, Psychrometrics, UnitSystem, t_celsius_from_t_kelvin, t_fahrenheit_from_t_rankine,
    t_kelvin_from_t_celsius, t_rankine_from_t_fahrenheit,
};
use static_assertions::assert_impl_all;

assert_impl_all!(Psychrometrics: Send, Sync, Copy);
assert_impl_all!(psychro::PsychrometricState: Send, Sync, Copy);
assert_impl_all!(Error: std::error::Error, Send, Sync);

#[test]
fn uninitialized_context_reports_missing_units() {
    common::init_logging();
    let psy = Psychrometrics::default();
    assert_eq!(psy.sat_vap_pres(20.0), Err(Error::UnitSystemUndefined));
    assert_eq!(psy.dry_air_enthalpy(20.0), Err(Error::UnitSystemUndefined));
    assert_eq!(psy.standard_atm_pressure(0.0), Err(Error::UnitSystemUndefined));
    assert!(matches!(
        psy.calc_psychrometrics_from_rel_hum(20.0, 0.5, 101_325.0),
        Err(Error::UnitSystemUndefined)
    ));
    // Unit-independent relationships still work.
    assert!(psy.specific_hum_from_hum_ratio(0.01).is_ok());
}

#[test]
fn contexts_in_different_units_do_not_interfere() -> Result<()> {
    let si = Psychrometrics::new(UnitSystem::Metric);
    let ip: Psychrometrics = UnitSystem::Imperial.into();
    let from_si = si.sat_vap_pres(25.0)?;
    let from_ip = ip.sat_vap_pres(77.0)?;
    // 1 psi = 6894.757 Pa
    assert_close(from_ip * 6894.757, from_si, 1e-3, 0.0, "Psat at 25 C / 77 F");
    assert_eq!(si.unit_system()?, UnitSystem::Metric);
    assert_eq!(ip.unit_system()?, UnitSystem::Imperial);
    Ok(())
}

#[test]
fn contexts_can_be_used_from_several_threads() -> Result<()> {
    let handles: Vec<_> = UnitSystem::ALL
        .iter()
        .map(|&units| {
            let psy = Psychrometrics::new(units);
            std::thread::spawn(move || {
                let pressure = psy.standard_atm_pressure(0.0)?;
                psy.t_wet_bulb_from_rel_hum(30.0, 0.5, pressure)
            })
        })
        .collect();
    for handle in handles {
        let t_wet_bulb = handle.join().expect("worker thread panicked")?;
        assert!(t_wet_bulb < 30.0);
    }
    Ok(())
}

#[test]
fn unit_system_parses_and_displays() -> Result<()> {
    assert_eq!("IP".parse::<UnitSystem>()?, UnitSystem::Imperial);
    assert_eq!("metric".parse::<UnitSystem>()?, UnitSystem::Metric);
    assert_eq!(UnitSystem::Metric.to_string(), "SI");
    let err = "kelvin".parse::<UnitSystem>().expect_err("not a unit system");
    assert!(matches!(err, Error::InvalidInput(_)));
    Ok(())
}

#[test]
fn temperature_scale_conversions() {
    // 70 + 459.67 is not exactly representable as 529.67.
    assert_close(t_rankine_from_t_fahrenheit(70.0), 529.67, 0.0, 1e-9, "R");
    assert_close(t_fahrenheit_from_t_rankine(529.67), 70.0, 0.0, 1e-9, "F");
    assert_eq!(t_kelvin_from_t_celsius(20.0), 293.15);
    assert_close(t_celsius_from_t_kelvin(293.15), 20.0, 0.0, 1e-9, "C");
}

#[test]
fn error_messages_name_the_operation() {
    let psy = Psychrometrics::new(UnitSystem::Metric);
    let err = psy.t_dew_point_from_rel_hum(25.0, 1.5).unwrap_err();
    assert!(err.to_string().starts_with("t_dew_point_from_rel_hum:"), "{err}");
    assert_eq!(
        Psychrometrics::default().tolerance().unwrap_err().to_string(),
        "the system of units has not been defined"
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_of_units_and_state() -> Result<()> {
    assert_eq!(serde_json::to_string(&UnitSystem::Metric)?, "\"SI\"");
    let units: UnitSystem = serde_json::from_str("\"IP\"")?;
    assert_eq!(units, UnitSystem::Imperial);

    let state = Psychrometrics::new(UnitSystem::Metric)
        .calc_psychrometrics_from_rel_hum(25.0, 0.5, 101_325.0)?;
    let json = serde_json::to_value(state)?;
    assert_eq!(json["t_dry_bulb"], 25.0);
    assert_eq!(json["rel_hum"].as_f64().map(|rh| (rh - 0.5).abs() < 1e-9), Some(true));
    Ok(())
}

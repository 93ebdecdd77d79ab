#[path = "common/mod.rs"]
mod common;

use anyhow::Result;
use common::{assert_close, ip, si, sweep_grid};
use psychro::{MIN_HUM_RATIO, Psychrometrics, UnitSystem};

#[test]
fn humidity_ratio_and_vapor_pressure_invert_each_other() -> Result<()> {
    let psy = si();
    let hum_ratio = psy.hum_ratio_from_vap_pres(3169.7, 95_461.0)?;
    assert_close(hum_ratio, 0.0213603998047487, 1e-6, 0.0, "W SI");
    let vap_pres = psy.vap_pres_from_hum_ratio(hum_ratio, 95_461.0)?;
    assert_close(vap_pres, 3169.7, 0.0, 1e-4, "Pw SI");

    let psy = ip();
    let hum_ratio = psy.hum_ratio_from_vap_pres(0.45973, 14.175)?;
    assert_close(hum_ratio, 0.0208473311024865, 1e-6, 0.0, "W IP");
    let vap_pres = psy.vap_pres_from_hum_ratio(hum_ratio, 14.175)?;
    assert_close(vap_pres, 0.45973, 0.0, 1e-7, "Pw IP");
    Ok(())
}

#[test]
fn relative_humidity_conversions_agree() -> Result<()> {
    let psy = si();
    let vap_pres = psy.vap_pres_from_rel_hum(25.0, 0.8)?;
    assert_close(psy.rel_hum_from_vap_pres(25.0, vap_pres)?, 0.8, 0.0, 1e-12, "RH from Pw");

    let hum_ratio = psy.hum_ratio_from_rel_hum(25.0, 0.8, 101_325.0)?;
    assert_close(
        psy.rel_hum_from_hum_ratio(25.0, hum_ratio, 101_325.0)?,
        0.8,
        0.0,
        1e-9,
        "RH from W",
    );

    let t_dew_point = psy.t_dew_point_from_rel_hum(25.0, 0.8)?;
    assert_close(
        psy.rel_hum_from_t_dew_point(25.0, t_dew_point)?,
        0.8,
        0.0,
        1e-3,
        "RH from Tdp",
    );
    assert_close(
        psy.hum_ratio_from_t_dew_point(t_dew_point, 101_325.0)?,
        hum_ratio,
        1e-3,
        0.0,
        "W from Tdp",
    );
    Ok(())
}

#[test]
fn dry_air_is_clamped_to_the_humidity_floor() -> Result<()> {
    let psy = si();
    assert_eq!(psy.hum_ratio_from_rel_hum(20.0, 0.0, 101_325.0)?, MIN_HUM_RATIO);
    assert_eq!(psy.hum_ratio_from_vap_pres(0.0, 101_325.0)?, MIN_HUM_RATIO);
    assert!(psy.vap_pres_from_hum_ratio(0.0, 101_325.0)? > 0.0);
    Ok(())
}

#[test]
fn specific_humidity_conversions() -> Result<()> {
    let psy = si();
    let specific_hum = psy.specific_hum_from_hum_ratio(0.006)?;
    assert_close(specific_hum, 0.00596421471, 1e-6, 0.0, "q");
    assert_close(psy.hum_ratio_from_specific_hum(specific_hum)?, 0.006, 1e-9, 0.0, "W from q");
    Ok(())
}

#[test]
fn humidity_conversions_reject_invalid_inputs() {
    let psy = si();
    assert!(psy.vap_pres_from_rel_hum(25.0, 1.2).unwrap_err().is_domain());
    assert!(psy.rel_hum_from_vap_pres(25.0, -1.0).is_err());
    assert!(psy.rel_hum_from_t_dew_point(20.0, 21.0).is_err());
    assert!(psy.hum_ratio_from_vap_pres(-1.0, 101_325.0).is_err());
    assert!(psy.vap_pres_from_hum_ratio(-1e-3, 101_325.0).is_err());
    assert!(psy.specific_hum_from_hum_ratio(-1e-3).is_err());
    assert!(psy.hum_ratio_from_specific_hum(1.0).is_err());
    assert!(psy.hum_ratio_from_specific_hum(-0.1).is_err());
}

#[test]
fn relative_humidity_round_trips_across_the_domain() -> Result<()> {
    for &units in UnitSystem::ALL {
        let psy = Psychrometrics::new(units);
        let (temperatures, pressures) = sweep_grid(units);
        let mut checked = 0;
        for &pressure in &pressures {
            for &t_dry_bulb in &temperatures {
                for rh in 1..=10 {
                    let rel_hum = f64::from(rh) / 10.0;
                    if psy.vap_pres_from_rel_hum(t_dry_bulb, rel_hum)? >= pressure {
                        continue;
                    }
                    let hum_ratio = psy.hum_ratio_from_rel_hum(t_dry_bulb, rel_hum, pressure)?;
                    // Clamped humidity ratios no longer carry the input.
                    if hum_ratio <= 10.0 * MIN_HUM_RATIO {
                        continue;
                    }
                    let back = psy.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
                    assert_close(
                        back,
                        rel_hum,
                        0.0,
                        1e-9,
                        &format!("{units} RH at Tdb={t_dry_bulb} P={pressure}"),
                    );
                    checked += 1;
                }
            }
        }
        assert!(checked > 1000, "{units}: only {checked} states checked");
    }
    Ok(())
}

#[test]
fn clamped_humidity_ratio_breaks_the_round_trip_at_the_cold_end() -> Result<()> {
    let psy = si();
    let hum_ratio = psy.hum_ratio_from_rel_hum(-100.0, 0.5, 101_325.0)?;
    assert_eq!(hum_ratio, MIN_HUM_RATIO);
    let back = psy.rel_hum_from_hum_ratio(-100.0, hum_ratio, 101_325.0)?;
    assert!(back > 10.0, "RH after clamping = {back}");
    Ok(())
}

#[test]
fn humidity_conversions_reject_nan() {
    let psy = si();
    assert!(psy.vap_pres_from_hum_ratio(f64::NAN, 101_325.0).unwrap_err().is_domain());
    assert!(psy.hum_ratio_from_vap_pres(f64::NAN, 101_325.0).unwrap_err().is_domain());
    assert!(psy.rel_hum_from_vap_pres(25.0, f64::NAN).is_err());
    assert!(psy.rel_hum_from_hum_ratio(25.0, f64::NAN, 101_325.0).is_err());
    assert!(psy.specific_hum_from_hum_ratio(f64::NAN).is_err());
    assert!(psy.moist_air_enthalpy(25.0, f64::NAN).is_err());
    assert!(psy.t_wet_bulb_from_hum_ratio(25.0, f64::NAN, 101_325.0).is_err());
}

use anyhow::Result;
use psychro::{PsychrometricState, Psychrometrics, UnitSystem};

fn print_state(label: &str, state: &PsychrometricState) {
    println!("{label}");
    println!("  dry bulb            {:>12.4}", state.t_dry_bulb());
    println!("  wet bulb            {:>12.4}", state.t_wet_bulb());
    println!("  dew point           {:>12.4}", state.t_dew_point());
    println!("  humidity ratio      {:>12.6}", state.hum_ratio());
    println!("  relative humidity   {:>12.4}", state.rel_hum());
    println!("  vapor pressure      {:>12.4}", state.vap_pres());
    println!("  enthalpy            {:>12.4}", state.moist_air_enthalpy());
    println!("  specific volume     {:>12.4}", state.moist_air_volume());
    println!("  density             {:>12.4}", state.density());
    println!("  degree of saturation{:>12.4}", state.degree_of_saturation());
}

fn main() -> Result<()> {
    env_logger::init();
    println!("*** Psychrometrics demo ***");

    let si = Psychrometrics::new(UnitSystem::Metric);
    let pressure = si.standard_atm_pressure(500.0)?;
    let temperature = si.standard_atm_temperature(500.0)?;
    println!("Standard atmosphere at 500 m: {pressure:.1} Pa, {temperature:.2} C");

    let state = si.calc_psychrometrics_from_t_wet_bulb(30.0, 22.0, pressure)?;
    print_state("SI, Tdb=30 C, Twb=22 C:", &state);

    let t_dew_point = si.t_dew_point_from_rel_hum(25.0, 0.6)?;
    println!("Dew point of 25 C air at 60% RH: {t_dew_point:.3} C");

    let ip = Psychrometrics::new(UnitSystem::Imperial);
    let state = ip.calc_psychrometrics_from_rel_hum(95.0, 0.4, 14.696)?;
    print_state("IP, Tdb=95 F, RH=40%:", &state);

    let sea_level = ip.sea_level_pressure(14.2, 1000.0, 70.0)?;
    println!("Sea-level pressure seen from a 1000 ft station at 14.2 psi: {sea_level:.4} psi");

    match Psychrometrics::default().sat_vap_pres(20.0) {
        Ok(_) => println!("unexpected success on an uninitialized context"),
        Err(err) => println!("Uninitialized context: {err}"),
    }

    Ok(())
}

use anyhow::Result;
use psychro::{Psychrometrics, UnitSystem};
use std::thread;

fn main() -> Result<()> {
    env_logger::init();
    println!("*** Multithreaded psychrometrics demo ***");
    println!("Spawning workers that each own a context and resolve moist-air states.");

    let mut handles = Vec::new();
    for idx in 0..4 {
        let units = if idx % 2 == 0 {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        };
        let psy = Psychrometrics::new(units);
        handles.push(thread::spawn(move || worker(psy, idx)));
    }

    for handle in handles {
        let (idx, units, t_wet_bulb, enthalpy) = handle
            .join()
            .expect("thread panicked")
            .expect("psychrometric computation failed");
        println!("Thread #{idx} [{units}]: Twb={t_wet_bulb:.3}, h={enthalpy:.3}");
    }

    Ok(())
}

fn worker(psy: Psychrometrics, idx: usize) -> Result<(usize, UnitSystem, f64, f64)> {
    let units = psy.unit_system()?;
    let (t_dry_bulb, pressure) = match units {
        UnitSystem::Metric => (20.0 + idx as f64 * 5.0, psy.standard_atm_pressure(0.0)?),
        UnitSystem::Imperial => (68.0 + idx as f64 * 9.0, psy.standard_atm_pressure(0.0)?),
    };
    let state = psy.calc_psychrometrics_from_rel_hum(t_dry_bulb, 0.5, pressure)?;
    Ok((idx, units, state.t_wet_bulb(), state.moist_air_enthalpy()))
}

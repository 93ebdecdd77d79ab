//! Standard atmosphere, ASHRAE Handbook - Fundamentals (2017) ch. 1 eqn. 3 & 4, and the
//! sea-level / station pressure reduction.

use crate::{Psychrometrics, Result, UnitSystem};

impl Psychrometrics {
    /// Standard-atmosphere barometric pressure at `altitude` (ft \[IP\] or m \[SI\]), in
    /// psi \[IP\] or Pa \[SI\].
    pub fn standard_atm_pressure(&self, altitude: f64) -> Result<f64> {
        Ok(match self.unit_system()? {
            UnitSystem::Imperial => 14.696 * (1.0 - 6.8754e-06 * altitude).powf(5.2559),
            UnitSystem::Metric => 101325.0 * (1.0 - 2.25577e-05 * altitude).powf(5.2559),
        })
    }

    /// Standard-atmosphere dry-bulb temperature at `altitude`, in °F \[IP\] or °C \[SI\].
    pub fn standard_atm_temperature(&self, altitude: f64) -> Result<f64> {
        Ok(match self.unit_system()? {
            UnitSystem::Imperial => 59.0 - 0.00356620 * altitude,
            UnitSystem::Metric => 15.0 - 0.0065 * altitude,
        })
    }

    /// Sea-level pressure from the pressure observed at a station at `altitude`.
    ///
    /// The air column is taken as isothermal at its mid-height temperature, estimated from the
    /// station dry-bulb temperature and the standard lapse rate. Reference: Hess SL,
    /// Introduction to theoretical meteorology, Holt Rinehart and Winston, NY 1959, ch. 6.5.
    pub fn sea_level_pressure(
        &self,
        station_pressure: f64,
        altitude: f64,
        t_dry_bulb: f64,
    ) -> Result<f64> {
        let units = self.unit_system()?;
        let scale_height = match units {
            UnitSystem::Imperial => {
                let t_column = t_dry_bulb + 0.0036 * altitude / 2.0;
                53.351 * units.to_absolute(t_column)
            }
            UnitSystem::Metric => {
                let t_column = t_dry_bulb + 0.0065 * altitude / 2.0;
                287.055 * units.to_absolute(t_column) / 9.807
            }
        };
        Ok(station_pressure * (altitude / scale_height).exp())
    }

    /// Station pressure from sea-level pressure; the inverse of
    /// [`sea_level_pressure`](Self::sea_level_pressure).
    pub fn station_pressure(
        &self,
        sea_level_pressure: f64,
        altitude: f64,
        t_dry_bulb: f64,
    ) -> Result<f64> {
        Ok(sea_level_pressure / self.sea_level_pressure(1.0, altitude, t_dry_bulb)?)
    }
}

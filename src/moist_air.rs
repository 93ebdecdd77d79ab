//! Dry-air and moist-air properties, with their closed-form inverses.

use crate::{
    Psychrometrics, Result, UnitSystem,
    error::check_hum_ratio,
    units::{MIN_HUM_RATIO, R_DA_IP, R_DA_SI, VOLUME_FACTOR},
};

/// Square inches per square foot; turns psi into lbf/ft².
const IN2_PER_FT2: f64 = 144.0;

impl Psychrometrics {
    /// Dry-air enthalpy, in Btu/lb \[IP\] or J/kg \[SI\].
    pub fn dry_air_enthalpy(&self, t_dry_bulb: f64) -> Result<f64> {
        Ok(match self.unit_system()? {
            UnitSystem::Imperial => 0.240 * t_dry_bulb,
            UnitSystem::Metric => 1006.0 * t_dry_bulb,
        })
    }

    /// Dry-air density, in lb/ft³ \[IP\] or kg/m³ \[SI\].
    pub fn dry_air_density(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        Ok(1.0 / self.dry_air_volume(t_dry_bulb, pressure)?)
    }

    /// Dry-air specific volume, in ft³/lb \[IP\] or m³/kg \[SI\].
    pub fn dry_air_volume(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        let units = self.unit_system()?;
        let t = units.to_absolute(t_dry_bulb);
        Ok(match units {
            UnitSystem::Imperial => R_DA_IP * t / (IN2_PER_FT2 * pressure),
            UnitSystem::Metric => R_DA_SI * t / pressure,
        })
    }

    /// Dry-bulb temperature from moist-air enthalpy and humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`](crate::Error::Domain) if `hum_ratio` is negative.
    pub fn t_dry_bulb_from_enthalpy_and_hum_ratio(
        &self,
        moist_air_enthalpy: f64,
        hum_ratio: f64,
    ) -> Result<f64> {
        check_hum_ratio(hum_ratio, "t_dry_bulb_from_enthalpy_and_hum_ratio")?;
        let w = hum_ratio.max(MIN_HUM_RATIO);
        Ok(match self.unit_system()? {
            UnitSystem::Imperial => (moist_air_enthalpy - 1061.0 * w) / (0.240 + 0.444 * w),
            UnitSystem::Metric => {
                (moist_air_enthalpy / 1000.0 - 2501.0 * w) / (1.006 + 1.86 * w)
            }
        })
    }

    /// Humidity ratio from moist-air enthalpy and dry-bulb temperature.
    ///
    /// The result is clamped to [`MIN_HUM_RATIO`](crate::MIN_HUM_RATIO).
    pub fn hum_ratio_from_enthalpy_and_t_dry_bulb(
        &self,
        moist_air_enthalpy: f64,
        t_dry_bulb: f64,
    ) -> Result<f64> {
        let hum_ratio = match self.unit_system()? {
            UnitSystem::Imperial => {
                (moist_air_enthalpy - 0.240 * t_dry_bulb) / (1061.0 + 0.444 * t_dry_bulb)
            }
            UnitSystem::Metric => {
                (moist_air_enthalpy / 1000.0 - 1.006 * t_dry_bulb) / (2501.0 + 1.86 * t_dry_bulb)
            }
        };
        Ok(hum_ratio.max(MIN_HUM_RATIO))
    }

    /// Vapor pressure deficit, in psi \[IP\] or Pa \[SI\].
    pub fn vapor_pressure_deficit(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        check_hum_ratio(hum_ratio, "vapor_pressure_deficit")?;
        let rel_hum = self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        Ok(self.sat_vap_pres(t_dry_bulb)? * (1.0 - rel_hum))
    }

    /// Degree of saturation: humidity ratio over the saturation humidity ratio at the same
    /// temperature and pressure.
    pub fn degree_of_saturation(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        check_hum_ratio(hum_ratio, "degree_of_saturation")?;
        let w = hum_ratio.max(MIN_HUM_RATIO);
        Ok(w / self.sat_hum_ratio(t_dry_bulb, pressure)?)
    }

    /// Moist-air enthalpy, in Btu/lb \[IP\] or J/kg \[SI\] of dry air.
    pub fn moist_air_enthalpy(&self, t_dry_bulb: f64, hum_ratio: f64) -> Result<f64> {
        check_hum_ratio(hum_ratio, "moist_air_enthalpy")?;
        let w = hum_ratio.max(MIN_HUM_RATIO);
        Ok(match self.unit_system()? {
            UnitSystem::Imperial => 0.240 * t_dry_bulb + w * (1061.0 + 0.444 * t_dry_bulb),
            UnitSystem::Metric => (1.006 * t_dry_bulb + w * (2501.0 + 1.86 * t_dry_bulb)) * 1000.0,
        })
    }

    /// Moist-air specific volume, in ft³/lb \[IP\] or m³/kg \[SI\] of dry air.
    pub fn moist_air_volume(&self, t_dry_bulb: f64, hum_ratio: f64, pressure: f64) -> Result<f64> {
        check_hum_ratio(hum_ratio, "moist_air_volume")?;
        let w = hum_ratio.max(MIN_HUM_RATIO);
        Ok(self.dry_air_volume(t_dry_bulb, pressure)? * (1.0 + VOLUME_FACTOR * w))
    }

    /// Dry-bulb temperature from moist-air specific volume, humidity ratio and pressure.
    pub fn t_dry_bulb_from_moist_air_volume_and_hum_ratio(
        &self,
        moist_air_volume: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        check_hum_ratio(hum_ratio, "t_dry_bulb_from_moist_air_volume_and_hum_ratio")?;
        let w = hum_ratio.max(MIN_HUM_RATIO);
        let units = self.unit_system()?;
        let t = match units {
            UnitSystem::Imperial => {
                moist_air_volume * (IN2_PER_FT2 * pressure) / (R_DA_IP * (1.0 + VOLUME_FACTOR * w))
            }
            UnitSystem::Metric => moist_air_volume * pressure / (R_DA_SI * (1.0 + VOLUME_FACTOR * w)),
        };
        Ok(units.to_relative(t))
    }

    /// Moist-air density, in lb/ft³ \[IP\] or kg/m³ \[SI\].
    pub fn moist_air_density(&self, t_dry_bulb: f64, hum_ratio: f64, pressure: f64) -> Result<f64> {
        check_hum_ratio(hum_ratio, "moist_air_density")?;
        let w = hum_ratio.max(MIN_HUM_RATIO);
        Ok((1.0 + w) / self.moist_air_volume(t_dry_bulb, w, pressure)?)
    }
}

//! Closed-form conversions among vapor pressure, relative humidity, humidity ratio and specific
//! humidity.
//!
//! Inputs are validated strictly; outputs expressed as a humidity ratio are clamped to
//! [`MIN_HUM_RATIO`] so that later divisions and logarithms stay finite.

use crate::{
    Error, Psychrometrics, Result,
    error::{check_hum_ratio, check_rel_hum},
    units::{MIN_HUM_RATIO, MOLAR_MASS_RATIO},
};

fn check_vap_pres(vap_pres: f64, context: &'static str) -> Result<()> {
    if vap_pres.is_nan() || vap_pres < 0.0 {
        return Err(Error::domain(
            context,
            format!("partial pressure of water vapor {vap_pres} is negative or not a number"),
        ));
    }
    Ok(())
}

impl Psychrometrics {
    /// Partial pressure of water vapor from dry-bulb temperature and relative humidity, in
    /// psi \[IP\] or Pa \[SI\].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `rel_hum` is outside `[0, 1]`.
    pub fn vap_pres_from_rel_hum(&self, t_dry_bulb: f64, rel_hum: f64) -> Result<f64> {
        check_rel_hum(rel_hum, "vap_pres_from_rel_hum")?;
        Ok(rel_hum * self.sat_vap_pres(t_dry_bulb)?)
    }

    /// Relative humidity `[0, 1]` from dry-bulb temperature and vapor pressure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `vap_pres` is negative.
    pub fn rel_hum_from_vap_pres(&self, t_dry_bulb: f64, vap_pres: f64) -> Result<f64> {
        check_vap_pres(vap_pres, "rel_hum_from_vap_pres")?;
        Ok(vap_pres / self.sat_vap_pres(t_dry_bulb)?)
    }

    /// Relative humidity `[0, 1]` from dry-bulb and dew-point temperatures.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `t_dew_point` is above `t_dry_bulb`.
    pub fn rel_hum_from_t_dew_point(&self, t_dry_bulb: f64, t_dew_point: f64) -> Result<f64> {
        if t_dew_point > t_dry_bulb {
            return Err(Error::domain(
                "rel_hum_from_t_dew_point",
                "dew point temperature is above dry bulb temperature",
            ));
        }
        Ok(self.sat_vap_pres(t_dew_point)? / self.sat_vap_pres(t_dry_bulb)?)
    }

    /// Humidity ratio from vapor pressure and atmospheric pressure, in lb_H₂O/lb_Air \[IP\] or
    /// kg_H₂O/kg_Air \[SI\].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `vap_pres` is negative.
    pub fn hum_ratio_from_vap_pres(&self, vap_pres: f64, pressure: f64) -> Result<f64> {
        check_vap_pres(vap_pres, "hum_ratio_from_vap_pres")?;
        let hum_ratio = MOLAR_MASS_RATIO * vap_pres / (pressure - vap_pres);
        Ok(hum_ratio.max(MIN_HUM_RATIO))
    }

    /// Vapor pressure from humidity ratio and atmospheric pressure, in psi \[IP\] or Pa \[SI\].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `hum_ratio` is negative.
    pub fn vap_pres_from_hum_ratio(&self, hum_ratio: f64, pressure: f64) -> Result<f64> {
        check_hum_ratio(hum_ratio, "vap_pres_from_hum_ratio")?;
        let bounded_hum_ratio = hum_ratio.max(MIN_HUM_RATIO);
        Ok(pressure * bounded_hum_ratio / (MOLAR_MASS_RATIO + bounded_hum_ratio))
    }

    /// Humidity ratio from dry-bulb temperature, relative humidity and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `rel_hum` is outside `[0, 1]`.
    pub fn hum_ratio_from_rel_hum(
        &self,
        t_dry_bulb: f64,
        rel_hum: f64,
        pressure: f64,
    ) -> Result<f64> {
        let vap_pres = self.vap_pres_from_rel_hum(t_dry_bulb, rel_hum)?;
        self.hum_ratio_from_vap_pres(vap_pres, pressure)
    }

    /// Relative humidity `[0, 1]` from dry-bulb temperature, humidity ratio and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `hum_ratio` is negative.
    pub fn rel_hum_from_hum_ratio(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        let vap_pres = self.vap_pres_from_hum_ratio(hum_ratio, pressure)?;
        self.rel_hum_from_vap_pres(t_dry_bulb, vap_pres)
    }

    /// Humidity ratio from dew-point temperature and pressure.
    pub fn hum_ratio_from_t_dew_point(&self, t_dew_point: f64, pressure: f64) -> Result<f64> {
        let vap_pres = self.sat_vap_pres(t_dew_point)?;
        self.hum_ratio_from_vap_pres(vap_pres, pressure)
    }

    /// Specific humidity (mass of water per mass of moist air) from humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `hum_ratio` is negative.
    pub fn specific_hum_from_hum_ratio(&self, hum_ratio: f64) -> Result<f64> {
        check_hum_ratio(hum_ratio, "specific_hum_from_hum_ratio")?;
        let bounded_hum_ratio = hum_ratio.max(MIN_HUM_RATIO);
        Ok(bounded_hum_ratio / (1.0 + bounded_hum_ratio))
    }

    /// Humidity ratio from specific humidity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `specific_hum` is outside `[0, 1)`.
    pub fn hum_ratio_from_specific_hum(&self, specific_hum: f64) -> Result<f64> {
        if !(0.0..1.0).contains(&specific_hum) {
            return Err(Error::domain(
                "hum_ratio_from_specific_hum",
                format!("specific humidity {specific_hum} is outside range [0, 1)"),
            ));
        }
        let hum_ratio = specific_hum / (1.0 - specific_hum);
        Ok(hum_ratio.max(MIN_HUM_RATIO))
    }
}

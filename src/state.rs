//! Resolution of a complete moist-air state from dry-bulb temperature, pressure and one humidity
//! variable.

use crate::{
    Error, Psychrometrics, Result, error::check_rel_hum,
    saturation::sat_hum_ratio_from_sat_vap_pres, units::MIN_HUM_RATIO,
};

/// Snapshot of every psychrometric property of one moist-air state.
///
/// Produced by the `calc_psychrometrics_from_*` methods of [`Psychrometrics`]. Values are in the
/// unit system of the context that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PsychrometricState {
    t_dry_bulb: f64,
    t_wet_bulb: f64,
    t_dew_point: f64,
    pressure: f64,
    hum_ratio: f64,
    rel_hum: f64,
    vap_pres: f64,
    moist_air_enthalpy: f64,
    moist_air_volume: f64,
    degree_of_saturation: f64,
}

impl PsychrometricState {
    /// Dry-bulb temperature, in °F \[IP\] or °C \[SI\].
    pub fn t_dry_bulb(&self) -> f64 {
        self.t_dry_bulb
    }

    /// Wet-bulb temperature, in °F \[IP\] or °C \[SI\].
    pub fn t_wet_bulb(&self) -> f64 {
        self.t_wet_bulb
    }

    /// Dew-point temperature, in °F \[IP\] or °C \[SI\].
    pub fn t_dew_point(&self) -> f64 {
        self.t_dew_point
    }

    /// Atmospheric pressure, in psi \[IP\] or Pa \[SI\].
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Humidity ratio, in lb_H₂O/lb_Air \[IP\] or kg_H₂O/kg_Air \[SI\].
    pub fn hum_ratio(&self) -> f64 {
        self.hum_ratio
    }

    /// Relative humidity `[0, 1]`.
    pub fn rel_hum(&self) -> f64 {
        self.rel_hum
    }

    /// Partial pressure of water vapor, in psi \[IP\] or Pa \[SI\].
    pub fn vap_pres(&self) -> f64 {
        self.vap_pres
    }

    /// Moist-air enthalpy, in Btu/lb \[IP\] or J/kg \[SI\].
    pub fn moist_air_enthalpy(&self) -> f64 {
        self.moist_air_enthalpy
    }

    /// Moist-air specific volume, in ft³/lb \[IP\] or m³/kg \[SI\].
    pub fn moist_air_volume(&self) -> f64 {
        self.moist_air_volume
    }

    /// Degree of saturation.
    pub fn degree_of_saturation(&self) -> f64 {
        self.degree_of_saturation
    }

    /// Moist-air density, in lb/ft³ \[IP\] or kg/m³ \[SI\].
    pub fn density(&self) -> f64 {
        (1.0 + self.hum_ratio) / self.moist_air_volume
    }

    /// Specific humidity, mass of water per mass of moist air.
    pub fn specific_hum(&self) -> f64 {
        self.hum_ratio / (1.0 + self.hum_ratio)
    }
}

impl Psychrometrics {
    /// Resolve every property from dry-bulb temperature, wet-bulb temperature and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `t_wet_bulb` is above `t_dry_bulb`, and propagates any
    /// error of the underlying relationships.
    pub fn calc_psychrometrics_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<PsychrometricState> {
        if t_wet_bulb > t_dry_bulb {
            return Err(Error::domain(
                "calc_psychrometrics_from_t_wet_bulb",
                "wet bulb temperature is above dry bulb temperature",
            ));
        }
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        let t_dew_point = self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        self.assemble(t_dry_bulb, t_wet_bulb, t_dew_point, hum_ratio, pressure)
    }

    /// Resolve every property from dry-bulb temperature, dew-point temperature and pressure.
    ///
    /// The given dew point is the lower end of the wet-bulb bracket; no dew-point solve runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `t_dew_point` is above `t_dry_bulb`, and propagates any
    /// error of the underlying relationships.
    pub fn calc_psychrometrics_from_t_dew_point(
        &self,
        t_dry_bulb: f64,
        t_dew_point: f64,
        pressure: f64,
    ) -> Result<PsychrometricState> {
        if t_dew_point > t_dry_bulb {
            return Err(Error::domain(
                "calc_psychrometrics_from_t_dew_point",
                "dew point temperature is above dry bulb temperature",
            ));
        }
        let hum_ratio = self.hum_ratio_from_t_dew_point(t_dew_point, pressure)?;
        let t_wet_bulb =
            self.t_wet_bulb_above_dew_point(t_dry_bulb, hum_ratio, t_dew_point, pressure)?;
        self.assemble(t_dry_bulb, t_wet_bulb, t_dew_point, hum_ratio, pressure)
    }

    /// Resolve every property from dry-bulb temperature, relative humidity and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `rel_hum` is outside `[0, 1]`, and propagates any error of
    /// the underlying relationships.
    pub fn calc_psychrometrics_from_rel_hum(
        &self,
        t_dry_bulb: f64,
        rel_hum: f64,
        pressure: f64,
    ) -> Result<PsychrometricState> {
        check_rel_hum(rel_hum, "calc_psychrometrics_from_rel_hum")?;
        let hum_ratio = self.hum_ratio_from_rel_hum(t_dry_bulb, rel_hum, pressure)?;
        let t_dew_point = self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        let t_wet_bulb =
            self.t_wet_bulb_above_dew_point(t_dry_bulb, hum_ratio, t_dew_point, pressure)?;
        self.assemble(t_dry_bulb, t_wet_bulb, t_dew_point, hum_ratio, pressure)
    }

    /// Fill in the properties that follow from dry-bulb temperature, humidity ratio and
    /// pressure alone. The saturation pressure at the dry bulb is evaluated once.
    fn assemble(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        t_dew_point: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<PsychrometricState> {
        let vap_pres = self.vap_pres_from_hum_ratio(hum_ratio, pressure)?;
        let sat_vap_pres = self.sat_vap_pres(t_dry_bulb)?;
        let sat_hum_ratio = sat_hum_ratio_from_sat_vap_pres(sat_vap_pres, pressure);
        Ok(PsychrometricState {
            t_dry_bulb,
            t_wet_bulb,
            t_dew_point,
            pressure,
            hum_ratio,
            rel_hum: vap_pres / sat_vap_pres,
            vap_pres,
            moist_air_enthalpy: self.moist_air_enthalpy(t_dry_bulb, hum_ratio)?,
            moist_air_volume: self.moist_air_volume(t_dry_bulb, hum_ratio, pressure)?,
            degree_of_saturation: hum_ratio.max(MIN_HUM_RATIO) / sat_hum_ratio,
        })
    }
}

//! Dew-point temperature, obtained by inverting the saturation vapor pressure correlation.

use crate::{
    Error, Psychrometrics, Result,
    error::{check_hum_ratio, check_rel_hum},
    solver::IterativeSolver,
};

impl Psychrometrics {
    /// Dew-point temperature from dry-bulb temperature and vapor pressure, in °F \[IP\] or °C \[SI\].
    ///
    /// Solved with Newton-Raphson on the logarithm of the saturation vapor pressure, a very smooth
    /// function of temperature; convergence usually takes 3 to 5 iterations. The first guess is
    /// `t_dry_bulb`, and the result is never above it.
    ///
    /// # Errors
    ///
    /// - [`Error::Domain`] if `vap_pres` is outside the saturation pressures at the ends of the
    ///   correlation range.
    /// - [`Error::Convergence`] if the iteration cap is reached.
    pub fn t_dew_point_from_vap_pres(&self, t_dry_bulb: f64, vap_pres: f64) -> Result<f64> {
        let units = self.unit_system()?;
        let bounds = units.saturation_bounds();
        let (lower, upper) = (self.sat_vap_pres(bounds.0)?, self.sat_vap_pres(bounds.1)?);
        if !(lower..=upper).contains(&vap_pres) {
            return Err(Error::domain(
                "t_dew_point_from_vap_pres",
                format!(
                    "partial pressure of water vapor {vap_pres} is outside range of validity \
                     [{lower}, {upper}]"
                ),
            ));
        }

        let ln_vap_pres = vap_pres.ln();
        let t_dew_point = IterativeSolver::new("t_dew_point_from_vap_pres", self.tolerance()?)
            .newton_raphson(
                t_dry_bulb,
                bounds,
                |t| Ok(self.sat_vap_pres(t)?.ln() - ln_vap_pres),
                |t| self.d_ln_sat_vap_pres(t),
            )?;
        Ok(t_dew_point.min(t_dry_bulb))
    }

    /// Vapor pressure from dew-point temperature, in psi \[IP\] or Pa \[SI\].
    pub fn vap_pres_from_t_dew_point(&self, t_dew_point: f64) -> Result<f64> {
        self.sat_vap_pres(t_dew_point)
    }

    /// Dew-point temperature from dry-bulb temperature and relative humidity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `rel_hum` is outside `[0, 1]`.
    pub fn t_dew_point_from_rel_hum(&self, t_dry_bulb: f64, rel_hum: f64) -> Result<f64> {
        check_rel_hum(rel_hum, "t_dew_point_from_rel_hum")?;
        let vap_pres = self.vap_pres_from_rel_hum(t_dry_bulb, rel_hum)?;
        self.t_dew_point_from_vap_pres(t_dry_bulb, vap_pres)
    }

    /// Dew-point temperature from dry-bulb temperature, humidity ratio and pressure.
    pub fn t_dew_point_from_hum_ratio(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        check_hum_ratio(hum_ratio, "t_dew_point_from_hum_ratio")?;
        let vap_pres = self.vap_pres_from_hum_ratio(hum_ratio, pressure)?;
        self.t_dew_point_from_vap_pres(t_dry_bulb, vap_pres)
    }

    /// Dew-point temperature from dry-bulb temperature, wet-bulb temperature and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `t_wet_bulb` is above `t_dry_bulb`.
    pub fn t_dew_point_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<f64> {
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }
}

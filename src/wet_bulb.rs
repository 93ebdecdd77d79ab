//! Wet-bulb temperature and its relation to humidity ratio.
//!
//! The forward relation (ASHRAE Handbook - Fundamentals (2017) ch. 1 eqn. 33 & 35) gives the
//! humidity ratio for a candidate wet-bulb temperature. It is monotonic but has no closed-form
//! inverse, so the wet-bulb temperature is found by bisection between the dew point and the
//! dry-bulb temperature.

use crate::{
    Error, Psychrometrics, Result, UnitSystem,
    error::{check_hum_ratio, check_rel_hum},
    solver::IterativeSolver,
    units::MIN_HUM_RATIO,
};

impl Psychrometrics {
    /// Humidity ratio from dry-bulb temperature, wet-bulb temperature and pressure, in
    /// lb_H₂O/lb_Air \[IP\] or kg_H₂O/kg_Air \[SI\].
    ///
    /// Above the freezing point the wet bulb is covered by liquid water, below it by ice. The
    /// result is clamped to [`MIN_HUM_RATIO`](crate::MIN_HUM_RATIO).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `t_wet_bulb` is above `t_dry_bulb`.
    pub fn hum_ratio_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<f64> {
        if t_wet_bulb > t_dry_bulb {
            return Err(Error::domain(
                "hum_ratio_from_t_wet_bulb",
                "wet bulb temperature is above dry bulb temperature",
            ));
        }
        let units = self.unit_system()?;
        let ws_star = self.sat_hum_ratio(t_wet_bulb, pressure)?;
        let (t, twb) = (t_dry_bulb, t_wet_bulb);
        let liquid = twb >= units.freezing_point();
        let hum_ratio = match (units, liquid) {
            (UnitSystem::Imperial, true) => {
                ((1093.0 - 0.556 * twb) * ws_star - 0.240 * (t - twb))
                    / (1093.0 + 0.444 * t - twb)
            }
            (UnitSystem::Imperial, false) => {
                ((1220.0 - 0.04 * twb) * ws_star - 0.240 * (t - twb))
                    / (1220.0 + 0.444 * t - 0.48 * twb)
            }
            (UnitSystem::Metric, true) => {
                ((2501.0 - 2.326 * twb) * ws_star - 1.006 * (t - twb))
                    / (2501.0 + 1.86 * t - 4.186 * twb)
            }
            (UnitSystem::Metric, false) => {
                ((2830.0 - 0.24 * twb) * ws_star - 1.006 * (t - twb))
                    / (2830.0 + 1.86 * t - 2.1 * twb)
            }
        };
        Ok(hum_ratio.max(MIN_HUM_RATIO))
    }

    /// Wet-bulb temperature from dry-bulb temperature, humidity ratio and pressure, in
    /// °F \[IP\] or °C \[SI\].
    ///
    /// `hum_ratio` is clamped to [`MIN_HUM_RATIO`](crate::MIN_HUM_RATIO) first. The bracket is
    /// fixed once, from the dew point of that humidity ratio up to `t_dry_bulb`.
    ///
    /// # Errors
    ///
    /// - [`Error::Domain`] if `hum_ratio` is negative.
    /// - [`Error::Convergence`] if the iteration cap is reached.
    pub fn t_wet_bulb_from_hum_ratio(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        check_hum_ratio(hum_ratio, "t_wet_bulb_from_hum_ratio")?;
        let bounded_hum_ratio = hum_ratio.max(MIN_HUM_RATIO);
        let t_dew_point = self.t_dew_point_from_hum_ratio(t_dry_bulb, bounded_hum_ratio, pressure)?;
        self.t_wet_bulb_above_dew_point(t_dry_bulb, bounded_hum_ratio, t_dew_point, pressure)
    }

    /// Bisection for the wet-bulb temperature over `[t_dew_point, t_dry_bulb]`.
    ///
    /// `hum_ratio` must already be clamped, and `t_dew_point` must not lie above the wet bulb
    /// of that humidity ratio.
    pub(crate) fn t_wet_bulb_above_dew_point(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        t_dew_point: f64,
        pressure: f64,
    ) -> Result<f64> {
        IterativeSolver::new("t_wet_bulb_from_hum_ratio", self.tolerance()?).bisect(
            t_dew_point,
            t_dry_bulb,
            hum_ratio,
            |t_wet_bulb| self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure),
        )
    }

    /// Wet-bulb temperature from dry-bulb temperature, dew-point temperature and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `t_dew_point` is above `t_dry_bulb`.
    pub fn t_wet_bulb_from_t_dew_point(
        &self,
        t_dry_bulb: f64,
        t_dew_point: f64,
        pressure: f64,
    ) -> Result<f64> {
        if t_dew_point > t_dry_bulb {
            return Err(Error::domain(
                "t_wet_bulb_from_t_dew_point",
                "dew point temperature is above dry bulb temperature",
            ));
        }
        let hum_ratio = self.hum_ratio_from_t_dew_point(t_dew_point, pressure)?;
        self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }

    /// Wet-bulb temperature from dry-bulb temperature, relative humidity and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `rel_hum` is outside `[0, 1]`.
    pub fn t_wet_bulb_from_rel_hum(
        &self,
        t_dry_bulb: f64,
        rel_hum: f64,
        pressure: f64,
    ) -> Result<f64> {
        check_rel_hum(rel_hum, "t_wet_bulb_from_rel_hum")?;
        let hum_ratio = self.hum_ratio_from_rel_hum(t_dry_bulb, rel_hum, pressure)?;
        self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }

    /// Relative humidity from dry-bulb temperature, wet-bulb temperature and pressure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `t_wet_bulb` is above `t_dry_bulb`.
    pub fn rel_hum_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<f64> {
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }
}

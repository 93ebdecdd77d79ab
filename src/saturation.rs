//! Saturation vapor pressure of water and the saturated-air properties derived from it.
//!
//! The correlation is ASHRAE Handbook - Fundamentals (2017) ch. 1 eqn. 5 & 6. ASHRAE splits the
//! two branches at the freezing point, which leaves a small discontinuity; splitting at the triple
//! point of water instead makes the curve continuous, and the Newton-Raphson dew-point inversion
//! relies on that around 0 °C / 32 °F.

use crate::{
    Error, Psychrometrics, Result,
    units::{MIN_HUM_RATIO, MOLAR_MASS_RATIO},
};

impl Psychrometrics {
    /// Vapor pressure of saturated air, in psi \[IP\] or Pa \[SI\].
    ///
    /// Valid over -148 °F to 392 °F \[IP\] or -100 °C to 200 °C \[SI\].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] when `t_dry_bulb` is outside the range of validity and
    /// [`Error::UnitSystemUndefined`] on an uninitialized context.
    pub fn sat_vap_pres(&self, t_dry_bulb: f64) -> Result<f64> {
        let units = self.unit_system()?;
        let (lower, upper) = units.saturation_bounds();
        if !(lower..=upper).contains(&t_dry_bulb) {
            return Err(Error::domain(
                "sat_vap_pres",
                format!("dry bulb temperature {t_dry_bulb} is outside range [{lower}, {upper}]"),
            ));
        }
        let coeffs = units.saturation_coefficients(t_dry_bulb);
        let t = units.to_absolute(t_dry_bulb);
        let [c_inv, c0, c1, c2, c3, c4] = coeffs.c;
        let ln_pws = c_inv / t
            + c0
            + t * (c1 + t * (c2 + t * (c3 + t * c4)))
            + coeffs.ln_coeff * t.ln();
        Ok(ln_pws.exp())
    }

    /// Derivative of `ln(sat_vap_pres)` with respect to dry-bulb temperature.
    ///
    /// No range check; only the dew-point solver calls this, on temperatures it has already
    /// clamped into the valid range.
    pub(crate) fn d_ln_sat_vap_pres(&self, t_dry_bulb: f64) -> Result<f64> {
        let units = self.unit_system()?;
        let coeffs = units.saturation_coefficients(t_dry_bulb);
        let t = units.to_absolute(t_dry_bulb);
        let [c_inv, _, c1, c2, c3, c4] = coeffs.c;
        Ok(-c_inv / (t * t)
            + c1
            + t * (2.0 * c2 + t * (3.0 * c3 + t * 4.0 * c4))
            + coeffs.ln_coeff / t)
    }

    /// Humidity ratio of saturated air, in lb_H₂O/lb_Air \[IP\] or kg_H₂O/kg_Air \[SI\].
    ///
    /// Clamped to [`MIN_HUM_RATIO`](crate::MIN_HUM_RATIO), which also covers temperatures where the
    /// saturation pressure exceeds `pressure`.
    pub fn sat_hum_ratio(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        Ok(sat_hum_ratio_from_sat_vap_pres(self.sat_vap_pres(t_dry_bulb)?, pressure))
    }

    /// Enthalpy of saturated air, in Btu/lb \[IP\] or J/kg \[SI\].
    pub fn sat_air_enthalpy(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        let sat_hum_ratio = self.sat_hum_ratio(t_dry_bulb, pressure)?;
        self.moist_air_enthalpy(t_dry_bulb, sat_hum_ratio)
    }
}

/// Clamped humidity ratio of air whose vapor pressure is `sat_vap_pres`.
pub(crate) fn sat_hum_ratio_from_sat_vap_pres(sat_vap_pres: f64, pressure: f64) -> f64 {
    let sat_hum_ratio = MOLAR_MASS_RATIO * sat_vap_pres / (pressure - sat_vap_pres);
    sat_hum_ratio.max(MIN_HUM_RATIO)
}

#[cfg(test)]
mod tests {
    use crate::{Psychrometrics, UnitSystem};

    #[test]
    fn derivative_matches_finite_difference() {
        for &units in UnitSystem::ALL {
            let psy = Psychrometrics::new(units);
            let (lower, upper) = units.saturation_bounds();
            let h = 1e-4;
            let mut t = lower + 1.0;
            while t < upper - 1.0 {
                // Skip the branch switch, where the one-sided slopes differ slightly.
                if (t - units.triple_point()).abs() > 2.0 * h {
                    let numeric = ((psy.sat_vap_pres(t + h).unwrap()).ln()
                        - (psy.sat_vap_pres(t - h).unwrap()).ln())
                        / (2.0 * h);
                    let analytic = psy.d_ln_sat_vap_pres(t).unwrap();
                    assert!(
                        (numeric - analytic).abs() <= 1e-5 * analytic.abs(),
                        "{units}: slope mismatch at {t}: numeric={numeric}, analytic={analytic}"
                    );
                }
                t += 7.3;
            }
        }
    }

    #[test]
    fn branches_meet_at_triple_point() {
        for &units in UnitSystem::ALL {
            let psy = Psychrometrics::new(units);
            let tp = units.triple_point();
            let below = psy.sat_vap_pres(tp).unwrap();
            let above = psy.sat_vap_pres(tp + 1e-9).unwrap();
            assert!(
                (above - below).abs() <= 1e-3 * below,
                "{units}: jump at triple point {below} -> {above}"
            );
        }
    }

    #[test]
    fn out_of_range_is_domain_error() {
        let psy = Psychrometrics::new(UnitSystem::Metric);
        assert!(psy.sat_vap_pres(-100.5).unwrap_err().is_domain());
        assert!(psy.sat_vap_pres(200.5).unwrap_err().is_domain());
        assert!(psy.sat_vap_pres(200.0).is_ok());
    }
}

use std::str::FromStr;

use crate::{
    Error, t_celsius_from_t_kelvin, t_fahrenheit_from_t_rankine, t_kelvin_from_t_celsius,
    t_rankine_from_t_fahrenheit,
};

/// Minimum humidity ratio accepted or returned by any function, in lb_H₂O/lb_Air or kg_H₂O/kg_Air.
pub const MIN_HUM_RATIO: f64 = 1e-7;

/// Maximum number of iterations of either iterative solver.
pub const MAX_ITER_COUNT: usize = 100;

/// Ratio of the molar masses of water vapor and dry air.
pub(crate) const MOLAR_MASS_RATIO: f64 = 0.621945;

/// `1 / MOLAR_MASS_RATIO`, used in the moist-air volume.
pub(crate) const VOLUME_FACTOR: f64 = 1.607858;

/// Gas constant of dry air in ft·lbf/lb_da/°R.
pub(crate) const R_DA_IP: f64 = 53.350;

/// Gas constant of dry air in J/kg_da/K.
pub(crate) const R_DA_SI: f64 = 287.042;

/// The two systems of units every relationship is expressed in.
///
/// All temperatures, pressures and energies passed to or returned from a
/// [`Psychrometrics`](crate::Psychrometrics) context are relative to its unit system:
///
/// | Quantity | `Imperial` (IP) | `Metric` (SI) |
/// |---|---|---|
/// | Temperature | °F | °C |
/// | Pressure | psi | Pa |
/// | Humidity ratio | lb_H₂O/lb_Air | kg_H₂O/kg_Air |
/// | Enthalpy | Btu/lb | J/kg |
/// | Specific volume | ft³/lb | m³/kg |
/// | Density | lb/ft³ | kg/m³ |
/// | Altitude | ft | m |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitSystem {
    /// Inch-pound units.
    #[cfg_attr(feature = "serde", serde(rename = "IP", alias = "Imperial"))]
    Imperial,
    /// International System of units.
    #[cfg_attr(feature = "serde", serde(rename = "SI", alias = "Metric"))]
    Metric,
}

/// Coefficients of `ln(Psat) = c[0]/T + c[1] + c[2]·T + c[3]·T² + c[4]·T³ + c[5]·T⁴ + ln_coeff·ln(T)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SaturationCoefficients {
    pub(crate) c: [f64; 6],
    pub(crate) ln_coeff: f64,
}

const SAT_ICE_IP: SaturationCoefficients = SaturationCoefficients {
    c: [
        -1.0214165E+04,
        -4.8932428,
        -5.3765794E-03,
        1.9202377E-07,
        3.5575832E-10,
        -9.0344688E-14,
    ],
    ln_coeff: 4.1635019,
};

const SAT_LIQUID_IP: SaturationCoefficients = SaturationCoefficients {
    c: [
        -1.0440397E+04,
        -1.1294650E+01,
        -2.7022355E-02,
        1.2890360E-05,
        -2.4780681E-09,
        0.0,
    ],
    ln_coeff: 6.5459673,
};

const SAT_ICE_SI: SaturationCoefficients = SaturationCoefficients {
    c: [
        -5.6745359E+03,
        6.3925247,
        -9.677843E-03,
        6.2215701E-07,
        2.0747825E-09,
        -9.484024E-13,
    ],
    ln_coeff: 4.1635019,
};

const SAT_LIQUID_SI: SaturationCoefficients = SaturationCoefficients {
    c: [
        -5.8002206E+03,
        1.3914993,
        -4.8640239E-02,
        4.1764768E-05,
        -1.4452093E-08,
        0.0,
    ],
    ln_coeff: 6.5459673,
};

impl UnitSystem {
    /// Both unit systems in declaration order.
    pub const ALL: &'static [UnitSystem] = &[UnitSystem::Imperial, UnitSystem::Metric];

    /// Convergence tolerance of the iterative solvers, in degrees of this system.
    ///
    /// 0.001 K expressed in the system's temperature unit.
    #[inline]
    pub fn tolerance(self) -> f64 {
        match self {
            Self::Imperial => 0.001 * 9.0 / 5.0,
            Self::Metric => 0.001,
        }
    }

    /// Range of dry-bulb temperature over which the saturation correlation is valid.
    #[inline]
    pub fn saturation_bounds(self) -> (f64, f64) {
        match self {
            Self::Imperial => (-148.0, 392.0),
            Self::Metric => (-100.0, 200.0),
        }
    }

    /// Triple point of water, where the saturation correlation switches branches.
    #[inline]
    pub fn triple_point(self) -> f64 {
        match self {
            Self::Imperial => 32.018,
            Self::Metric => 0.01,
        }
    }

    /// Freezing point of water, where the wet-bulb relation switches branches.
    #[inline]
    pub fn freezing_point(self) -> f64 {
        match self {
            Self::Imperial => 32.0,
            Self::Metric => 0.0,
        }
    }

    /// Convert a relative temperature (°F or °C) to absolute (°R or K).
    #[inline]
    pub fn to_absolute(self, t: f64) -> f64 {
        match self {
            Self::Imperial => t_rankine_from_t_fahrenheit(t),
            Self::Metric => t_kelvin_from_t_celsius(t),
        }
    }

    /// Convert an absolute temperature (°R or K) to relative (°F or °C).
    #[inline]
    pub fn to_relative(self, t: f64) -> f64 {
        match self {
            Self::Imperial => t_fahrenheit_from_t_rankine(t),
            Self::Metric => t_celsius_from_t_kelvin(t),
        }
    }

    /// Short token used when displaying or parsing (`"IP"` or `"SI"`).
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Imperial => "IP",
            Self::Metric => "SI",
        }
    }

    pub(crate) fn saturation_coefficients(self, t_dry_bulb: f64) -> &'static SaturationCoefficients {
        let below_triple_point = t_dry_bulb <= self.triple_point();
        match (self, below_triple_point) {
            (Self::Imperial, true) => &SAT_ICE_IP,
            (Self::Imperial, false) => &SAT_LIQUID_IP,
            (Self::Metric, true) => &SAT_ICE_SI,
            (Self::Metric, false) => &SAT_LIQUID_SI,
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("ip") || s.eq_ignore_ascii_case("imperial") => {
                Ok(Self::Imperial)
            }
            s if s.eq_ignore_ascii_case("si") || s.eq_ignore_ascii_case("metric") => {
                Ok(Self::Metric)
            }
            other => Err(Error::InvalidInput(format!(
                "unknown unit system `{other}`, expected `IP` or `SI`"
            ))),
        }
    }
}

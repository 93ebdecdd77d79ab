//! Psychrometric properties of moist air in SI and IP units.
//!
//! The relationships follow the 2017 ASHRAE Handbook - Fundamentals, ch. 1. Given dry-bulb
//! temperature, atmospheric pressure and any one humidity variable (wet-bulb temperature, dew-point
//! temperature, relative humidity, humidity ratio, vapor pressure...), the crate resolves the
//! others, plus enthalpy, specific volume, density and degree of saturation, and provides the
//! standard atmosphere.
//!
//! Every relationship lives on a caller-owned [`Psychrometrics`] context carrying the active
//! [`UnitSystem`]; there is no global state.
//!
//! ```rust
//! use psychro::{Psychrometrics, UnitSystem};
//!
//! # fn main() -> psychro::Result<()> {
//! let psy = Psychrometrics::new(UnitSystem::Metric);
//! let state = psy.calc_psychrometrics_from_t_wet_bulb(40.0, 20.0, 101_325.0)?;
//! assert!((state.hum_ratio() - 0.0064).abs() < 1e-4);
//! assert!(state.t_dew_point() <= state.t_wet_bulb());
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

mod atmosphere;
mod context;
mod dew_point;
mod error;
mod humidity;
mod moist_air;
mod saturation;
mod solver;
mod state;
mod units;
mod wet_bulb;

pub use context::Psychrometrics;
pub use error::{Error, Result};
pub use state::PsychrometricState;
pub use units::{MAX_ITER_COUNT, MIN_HUM_RATIO, UnitSystem};

/// Zero degree Fahrenheit expressed as degree Rankine.
pub const ZERO_FAHRENHEIT_AS_RANKINE: f64 = 459.67;

/// Zero degree Celsius expressed as Kelvin.
pub const ZERO_CELSIUS_AS_KELVIN: f64 = 273.15;

/// Degree Fahrenheit to degree Rankine.
#[inline]
pub fn t_rankine_from_t_fahrenheit(t_f: f64) -> f64 {
    t_f + ZERO_FAHRENHEIT_AS_RANKINE
}

/// Degree Rankine to degree Fahrenheit.
#[inline]
pub fn t_fahrenheit_from_t_rankine(t_r: f64) -> f64 {
    t_r - ZERO_FAHRENHEIT_AS_RANKINE
}

/// Degree Celsius to Kelvin.
#[inline]
pub fn t_kelvin_from_t_celsius(t_c: f64) -> f64 {
    t_c + ZERO_CELSIUS_AS_KELVIN
}

/// Kelvin to degree Celsius.
#[inline]
pub fn t_celsius_from_t_kelvin(t_k: f64) -> f64 {
    t_k - ZERO_CELSIUS_AS_KELVIN
}

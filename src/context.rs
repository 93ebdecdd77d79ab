use crate::{Error, Result, UnitSystem};

/// Caller-owned computation context for psychrometric relationships.
///
/// `Psychrometrics` carries the active [`UnitSystem`] and the solver tolerance derived from it.
/// Every relationship in this crate is a method on the context, so two contexts configured with
/// different unit systems never interfere with each other.
///
/// Typical workflow:
/// - Construct a context with [`Psychrometrics::new`], or start from
///   [`Psychrometrics::default`] and call [`set_unit_system`](Self::set_unit_system) later.
/// - Call individual relationships such as
///   [`t_dew_point_from_rel_hum`](Self::t_dew_point_from_rel_hum), or resolve a whole state with
///   one of the `calc_psychrometrics_from_*` methods.
///
/// A default context has no unit system; every unit-dependent method on it returns
/// [`Error::UnitSystemUndefined`].
///
/// # Threading
///
/// The context is a small `Copy` value. Give each thread its own copy instead of sharing one
/// behind a lock.
///
/// # Examples
///
/// ```rust
/// use psychro::{Psychrometrics, UnitSystem};
///
/// # fn main() -> psychro::Result<()> {
/// let psy = Psychrometrics::new(UnitSystem::Metric);
/// let t_dew_point = psy.t_dew_point_from_rel_hum(25.0, 0.80)?;
/// assert!((t_dew_point - 21.31).abs() < 0.01);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Psychrometrics {
    units: Option<UnitSystem>,
    tolerance: Option<f64>,
}

impl Psychrometrics {
    /// Create a context bound to `units`.
    pub fn new(units: UnitSystem) -> Self {
        let mut context = Self::default();
        context.set_unit_system(units);
        context
    }

    /// Select the unit system and recompute the solver tolerance.
    pub fn set_unit_system(&mut self, units: UnitSystem) {
        self.units = Some(units);
        self.tolerance = Some(units.tolerance());
    }

    /// Active unit system.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnitSystemUndefined`] if no unit system has been selected.
    #[inline]
    pub fn unit_system(&self) -> Result<UnitSystem> {
        self.units.ok_or(Error::UnitSystemUndefined)
    }

    /// Convergence tolerance of the iterative solvers, in degrees of the active unit system.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnitSystemUndefined`] if no unit system has been selected.
    #[inline]
    pub fn tolerance(&self) -> Result<f64> {
        self.tolerance.ok_or(Error::UnitSystemUndefined)
    }

    /// `true` when the context works in inch-pound units.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnitSystemUndefined`] if no unit system has been selected.
    #[inline]
    pub fn is_ip(&self) -> Result<bool> {
        Ok(self.unit_system()? == UnitSystem::Imperial)
    }
}

impl From<UnitSystem> for Psychrometrics {
    fn from(units: UnitSystem) -> Self {
        Self::new(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_is_uninitialized() {
        let psy = Psychrometrics::default();
        assert_eq!(psy.unit_system(), Err(Error::UnitSystemUndefined));
        assert_eq!(psy.tolerance(), Err(Error::UnitSystemUndefined));
    }

    #[test]
    fn switching_units_recomputes_tolerance() {
        let mut psy = Psychrometrics::new(UnitSystem::Metric);
        assert_eq!(psy.tolerance(), Ok(0.001));
        psy.set_unit_system(UnitSystem::Imperial);
        assert_eq!(psy.unit_system(), Ok(UnitSystem::Imperial));
        assert_eq!(psy.tolerance(), Ok(UnitSystem::Imperial.tolerance()));
        assert_eq!(psy.is_ip(), Ok(true));
    }
}

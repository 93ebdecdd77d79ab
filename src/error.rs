use thiserror::Error;

/// Result type used throughout the `psychro` crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can arise while resolving psychrometric properties.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// An input lies outside its physical or correlation range.
    #[error("{context}: {message}")]
    Domain {
        /// Operation that rejected the input.
        context: &'static str,
        /// What was out of range.
        message: String,
    },

    /// An iterative solver hit its iteration cap without converging.
    #[error("convergence not reached in {solver} after {iterations} iterations")]
    Convergence {
        /// Operation whose solver gave up.
        solver: &'static str,
        /// Iterations spent.
        iterations: usize,
    },

    /// A unit-dependent operation was requested before a unit system was chosen.
    #[error("the system of units has not been defined")]
    UnitSystemUndefined,

    /// The caller provided input that could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn domain(context: &'static str, message: impl Into<String>) -> Self {
        Self::Domain {
            context,
            message: message.into(),
        }
    }

    /// `true` for [`Error::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    /// `true` for [`Error::Convergence`].
    pub fn is_convergence(&self) -> bool {
        matches!(self, Self::Convergence { .. })
    }
}

/// Rejects a negative or NaN humidity ratio before it reaches a formula.
pub(crate) fn check_hum_ratio(hum_ratio: f64, context: &'static str) -> Result<()> {
    if hum_ratio.is_nan() || hum_ratio < 0.0 {
        return Err(Error::domain(
            context,
            format!("humidity ratio {hum_ratio} is negative or not a number"),
        ));
    }
    Ok(())
}

/// Rejects a relative humidity outside `[0, 1]`.
pub(crate) fn check_rel_hum(rel_hum: f64, context: &'static str) -> Result<()> {
    if !(0.0..=1.0).contains(&rel_hum) {
        return Err(Error::domain(
            context,
            format!("relative humidity {rel_hum} is outside range [0, 1]"),
        ));
    }
    Ok(())
}

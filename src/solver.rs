//! Bounded iterative root finding shared by the dew-point and wet-bulb inversions.
//!
//! Both solvers stop on a step (or bracket width) no larger than the context tolerance and give
//! up with [`Error::Convergence`] after [`MAX_ITER_COUNT`] iterations.

use log::{debug, trace, warn};

use crate::{Error, Result, units::MAX_ITER_COUNT};

#[derive(Clone, Copy, Debug)]
pub(crate) struct IterativeSolver {
    name: &'static str,
    tolerance: f64,
    max_iterations: usize,
}

impl IterativeSolver {
    pub(crate) fn new(name: &'static str, tolerance: f64) -> Self {
        Self {
            name,
            tolerance,
            max_iterations: MAX_ITER_COUNT,
        }
    }

    /// Newton-Raphson iteration from `initial`.
    ///
    /// `residual(x)` is the function whose root is sought and `derivative(x)` its slope. Every new
    /// iterate is clamped into `bounds` before the convergence test.
    pub(crate) fn newton_raphson<F, D>(
        &self,
        initial: f64,
        bounds: (f64, f64),
        mut residual: F,
        mut derivative: D,
    ) -> Result<f64>
    where
        F: FnMut(f64) -> Result<f64>,
        D: FnMut(f64) -> Result<f64>,
    {
        let (lower, upper) = bounds;
        let mut x = initial;
        for iteration in 1..=self.max_iterations {
            let previous = x;
            let step = residual(previous)? / derivative(previous)?;
            x = (previous - step).max(lower).min(upper);
            trace!(target: "psychro::solver", "{}: iteration {iteration}, x = {x}", self.name);
            if (x - previous).abs() <= self.tolerance {
                debug!(
                    target: "psychro::solver",
                    "{}: converged to {x} after {iteration} iterations",
                    self.name
                );
                return Ok(x);
            }
        }
        Err(self.exhausted())
    }

    /// Bisection of `[lower, upper]` for the point where `forward` crosses `target`.
    ///
    /// `forward` must be increasing over the bracket. Returns the midpoint of the final bracket.
    pub(crate) fn bisect<F>(&self, lower: f64, upper: f64, target: f64, mut forward: F) -> Result<f64>
    where
        F: FnMut(f64) -> Result<f64>,
    {
        let (mut lower, mut upper) = (lower, upper);
        let mut mid = (lower + upper) / 2.0;
        let mut iterations = 0;
        while upper - lower > self.tolerance {
            if iterations == self.max_iterations {
                return Err(self.exhausted());
            }
            iterations += 1;
            if forward(mid)? > target {
                upper = mid;
            } else {
                lower = mid;
            }
            mid = (lower + upper) / 2.0;
            trace!(
                target: "psychro::solver",
                "{}: iteration {iterations}, bracket [{lower}, {upper}]",
                self.name
            );
        }
        debug!(
            target: "psychro::solver",
            "{}: converged to {mid} after {iterations} iterations",
            self.name
        );
        Ok(mid)
    }

    fn exhausted(&self) -> Error {
        warn!(
            target: "psychro::solver",
            "{}: no convergence within {} iterations",
            self.name, self.max_iterations
        );
        Error::Convergence {
            solver: self.name,
            iterations: self.max_iterations,
        }
    }
}

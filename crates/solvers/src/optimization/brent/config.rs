use crate::optimization::tolerance::{self, MIN_TOLERANCE};

/// Configuration for Brent refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Relative tolerance on the abscissa, strictly between 0 and 1.
    pub tolerance: f64,
    /// Absolute floor on the abscissa tolerance, for minima at or near zero.
    pub x_abs_tol: f64,
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: MIN_TOLERANCE,
            x_abs_tol: 1e-12,
            max_iters: 200,
        }
    }
}

impl Config {
    /// Validates the tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is outside `(0, 1)` or `x_abs_tol` is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        tolerance::validate(self.tolerance)?;
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err("x_abs_tol must be finite and non-negative");
        }
        Ok(())
    }

    /// Returns the abscissa tolerance around `x`.
    pub(super) fn x_tol(&self, x: f64) -> f64 {
        (x.abs() * self.tolerance)
            .max(self.x_abs_tol)
            .max(f64::MIN_POSITIVE)
    }

    /// Returns the value tolerance around `value`.
    pub(super) fn f_tol(&self, value: f64) -> f64 {
        (value.abs() * self.tolerance).max(f64::MIN_POSITIVE)
    }
}

/// Configuration for the bracket finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of extrapolation steps before giving up.
    pub max_iters: usize,
    /// Largest parabolic jump, as a multiple of the last step.
    pub max_step: f64,
    /// How many times a step into a NaN region is halved before giving up.
    pub max_halvings: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 500,
            max_step: 100.0,
            max_halvings: 64,
        }
    }
}

impl Config {
    /// Validates the step limits.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_step` is not a finite value above one, or if
    /// either iteration limit is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.max_step.is_finite() || self.max_step <= 1.0 {
            return Err("max_step must be finite and greater than 1");
        }
        if self.max_iters == 0 {
            return Err("max_iters must be positive");
        }
        if self.max_halvings == 0 {
            return Err("max_halvings must be positive");
        }
        Ok(())
    }
}

use crate::optimization::{line_search, tolerance};

/// Configuration for conjugate gradient minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Convergence tolerance for both the decrease and the `gamma` test.
    pub tolerance: f64,
    pub max_iters: usize,
    pub line_search: line_search::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iters: 200,
            line_search: line_search::Config::default(),
        }
    }
}

impl Config {
    /// Validates the tolerance and the line search settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is outside `(0, 1)` or the line search
    /// config is invalid.
    pub fn validate(&self) -> Result<(), &'static str> {
        tolerance::validate(self.tolerance)?;
        self.line_search.validate()
    }
}

use crate::optimization::{bracket, brent};

/// Configuration for a line search.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    pub bracket: bracket::Config,
    pub brent: brent::Config,
}

impl Config {
    /// Validates the bracket and refinement settings.
    ///
    /// # Errors
    ///
    /// Returns the first problem found in either nested config.
    pub fn validate(&self) -> Result<(), &'static str> {
        self.bracket.validate()?;
        self.brent.validate()
    }
}

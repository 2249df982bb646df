use thiserror::Error;

use crate::optimization::line_search;

/// Errors that can occur during Powell's method.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("cannot minimize over a zero-dimensional domain")]
    EmptyDomain,

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("objective is not finite at the starting point: {value}")]
    NonFiniteStart { value: f64 },

    #[error("line search failed: {0}")]
    LineSearch(#[from] line_search::Error),
}

impl Error {
    /// Returns true if a line search found the objective poorly conditioned.
    #[must_use]
    pub fn is_poorly_conditioned(&self) -> bool {
        matches!(self, Self::LineSearch(error) if error.is_poorly_conditioned())
    }
}

use descent_core::PointError;
use thiserror::Error;

use crate::optimization::line_search;

/// Errors that can occur during conjugate gradient minimization.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("cannot minimize over a zero-dimensional domain")]
    EmptyDomain,

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("objective is not finite at the starting point: {value}")]
    NonFiniteStart { value: f64 },

    #[error("objective returned a bad gradient: {0}")]
    Point(#[from] PointError),

    #[error("line search failed: {0}")]
    LineSearch(#[from] line_search::Error),
}

use descent_core::PointError;
use thiserror::Error;

use crate::optimization::{bracket, brent};

/// Errors that can occur during a line search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("point has dimension {point} but direction has dimension {direction}")]
    DimensionMismatch { point: usize, direction: usize },

    #[error("direction is too short to define a line: magnitude {magnitude}")]
    DegenerateDirection { magnitude: f64 },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("bracket search failed: {0}")]
    Bracket(#[from] bracket::Error),

    #[error("refinement failed: {0}")]
    Refine(#[from] brent::Error),

    #[error("objective returned a bad gradient: {0}")]
    Point(#[from] PointError),
}

impl Error {
    /// Returns true if the objective has no usable minimum along the line.
    #[must_use]
    pub fn is_poorly_conditioned(&self) -> bool {
        matches!(self, Self::Bracket(error) if error.is_poorly_conditioned())
    }

    /// Returns true if the direction was too short to search along.
    #[must_use]
    pub fn is_degenerate_direction(&self) -> bool {
        matches!(self, Self::DegenerateDirection { .. })
    }
}

use descent_core::Sample;

use crate::optimization::bracket::{Bracket, BracketError};

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of Brent refinement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<P> {
    /// Final solver status.
    pub status: Status,

    /// The point with the smallest observed value.
    pub point: P,

    /// Left end of the final bracket.
    pub left: P,

    /// Right end of the final bracket.
    pub right: P,

    /// Number of objective evaluations.
    pub iters: usize,
}

impl<P: Sample> Solution<P> {
    /// Returns the abscissa of the minimum.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.point.x()
    }

    /// Returns the value at the minimum.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.point.value()
    }

    /// Returns the final bracket, which can seed another refinement.
    ///
    /// # Errors
    ///
    /// Returns an error if an end of the bracket ties with the minimum.
    pub fn bracket(&self) -> Result<Bracket<P>, BracketError> {
        Bracket::new(self.left, self.point, self.right)
    }
}

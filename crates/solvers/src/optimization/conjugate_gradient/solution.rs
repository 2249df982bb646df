use descent_core::{VectorPoint, VectorSpace};

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of conjugate gradient minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<V> {
    /// Final solver status.
    pub status: Status,

    /// Final point, with its value and gradient.
    pub point: VectorPoint<V>,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl<V: VectorSpace> Solution<V> {
    pub(super) fn new(status: Status, point: VectorPoint<V>, iters: usize) -> Self {
        Self {
            status,
            point,
            iters,
        }
    }

    /// Returns the position of the minimum.
    #[must_use]
    pub fn x(&self) -> &V {
        self.point.x()
    }

    /// Returns the objective value at the minimum.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.point.value()
    }
}

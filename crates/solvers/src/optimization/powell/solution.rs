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

/// The result of Powell's method.
///
/// The minimizing position is left in the caller's buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Objective value at the final position.
    pub value: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(status: Status, value: f64, iters: usize) -> Self {
        Self {
            status,
            value,
            iters,
        }
    }
}

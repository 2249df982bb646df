use descent_core::VectorPoint;

/// Event emitted by the conjugate gradient solver after each line search.
#[derive(Debug)]
pub struct Event<'a, V> {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// The point reached by this iteration's line search.
    pub point: &'a VectorPoint<V>,

    /// Decrease in the objective over this iteration, never negative.
    pub decrease: f64,

    /// Weight of the previous direction in the next one.
    pub gamma: f64,
}

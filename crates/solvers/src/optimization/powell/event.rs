/// Event emitted by Powell's method at the end of each iteration.
#[derive(Debug)]
pub struct Event<'a, V> {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Position after this iteration's line searches.
    pub x: &'a V,

    /// Objective value at `x`.
    pub value: f64,

    /// Objective value at the start of the iteration.
    pub previous_value: f64,

    /// Whether the direction set returns to the coordinate axes next iteration.
    pub reset: bool,
}

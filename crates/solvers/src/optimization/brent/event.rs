/// How the step to the latest trial point was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Jump to the vertex of the parabola through the best three points.
    Parabolic,
    /// Golden-section step into the larger side of the bracket.
    Golden,
    /// Smallest step the tolerance allows.
    Minimal,
    /// Secant extrapolation of the derivative to zero.
    Secant,
    /// Bisection of one side of the bracket.
    Bisection,
}

/// Event emitted by the Brent refiner after each evaluation.
///
/// `best` is the best point after the evaluation has been taken into
/// account, and `bracket` is the updated interval known to contain the
/// minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<P> {
    /// Iteration number, starting at 1.
    pub iter: usize,
    pub step: Step,
    /// The newly evaluated point.
    pub point: P,
    pub best: P,
    pub bracket: [f64; 2],
}

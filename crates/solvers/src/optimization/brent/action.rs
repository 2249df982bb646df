/// Actions an observer can take during Brent refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best point found so far.
    StopEarly,
}

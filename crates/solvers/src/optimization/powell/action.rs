/// Actions an observer can take during Powell's method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early, leaving the current position in place.
    StopEarly,
}

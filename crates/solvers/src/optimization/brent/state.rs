use descent_core::Sample;

use crate::optimization::bracket::Bracket;

use super::{Config, Solution, Status, propose::Proposal};

/// Fraction of a sub-interval covered by a golden-section step: `2 - φ`.
pub(super) const GOLDEN_SECTION: f64 = 0.381_966_011_250_105;

/// Working set of one Brent refinement.
#[derive(Debug, Clone, Copy)]
pub(super) struct State<P> {
    left: P,
    right: P,
    /// Best point so far.
    inner: P,
    /// Point with the second-lowest value.
    second: P,
    /// Previous value of `second`.
    previous: P,
    last_step: f64,
    step_before_last: f64,
}

impl<P: Sample> State<P> {
    /// Starts from a bracket, using its ends as the runners-up.
    pub(super) fn new(bracket: &Bracket<P>) -> Self {
        let (left, inner, right) = (bracket.left(), bracket.inner(), bracket.right());
        let (second, previous) = if left.value() <= right.value() {
            (left, right)
        } else {
            (right, left)
        };
        let step_before_last = larger_side(left.x(), inner.x(), right.x());

        Self {
            left,
            right,
            inner,
            second,
            previous,
            last_step: GOLDEN_SECTION * step_before_last,
            step_before_last,
        }
    }

    pub(super) fn left(&self) -> P {
        self.left
    }

    pub(super) fn right(&self) -> P {
        self.right
    }

    pub(super) fn inner(&self) -> P {
        self.inner
    }

    pub(super) fn second(&self) -> P {
        self.second
    }

    pub(super) fn previous(&self) -> P {
        self.previous
    }

    pub(super) fn last_step(&self) -> f64 {
        self.last_step
    }

    pub(super) fn step_before_last(&self) -> f64 {
        self.step_before_last
    }

    pub(super) fn width(&self) -> f64 {
        self.right.x() - self.left.x()
    }

    /// Returns true if `x` lies strictly inside the bracket.
    pub(super) fn contains(&self, x: f64) -> bool {
        self.left.x() < x && x < self.right.x()
    }

    /// Returns true once the bracket is narrower than twice the tolerance.
    pub(super) fn is_converged(&self, config: &Config) -> bool {
        self.width() <= 2.0 * config.x_tol(self.inner.x())
    }

    /// Signed distance from the best point to the far end of the larger side.
    pub(super) fn larger_side(&self) -> f64 {
        larger_side(self.left.x(), self.inner.x(), self.right.x())
    }

    /// Records the proposal and folds the evaluated point into the state.
    pub(super) fn apply(&mut self, proposal: &Proposal, point: P) {
        self.step_before_last = proposal.step_before_last;
        self.last_step = proposal.step;

        let x = self.inner;
        if point.value() <= x.value() {
            if point.x() >= x.x() {
                self.left = x;
            } else {
                self.right = x;
            }
            self.previous = self.second;
            self.second = x;
            self.inner = point;
        } else {
            if point.x() < x.x() {
                self.left = point;
            } else {
                self.right = point;
            }

            let second_is_inner = self.second.x() == x.x();
            if point.value() <= self.second.value() || second_is_inner {
                self.previous = self.second;
                self.second = point;
            } else if point.value() <= self.previous.value()
                || self.previous.x() == x.x()
                || self.previous.x() == self.second.x()
            {
                self.previous = point;
            }
        }
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<P> {
        Solution {
            status,
            point: self.inner,
            left: self.left,
            right: self.right,
            iters,
        }
    }
}

fn larger_side(left: f64, inner: f64, right: f64) -> f64 {
    if inner - left >= right - inner {
        left - inner
    } else {
        right - inner
    }
}

use descent_core::{GradientPoint, Point, Sample};

use super::{
    Config, Step,
    state::{GOLDEN_SECTION, State},
};

/// The next step from the best point, and the bookkeeping that goes with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Proposal {
    pub(super) step: f64,
    pub(super) kind: Step,
    /// Value the state records as the step before last once this step is taken.
    pub(super) step_before_last: f64,
    /// Stop, converged, if the trial point turns out worse than the best.
    pub(super) converges_if_worse: bool,
}

impl Proposal {
    pub(super) fn new(step: f64, kind: Step, step_before_last: f64) -> Self {
        Self {
            step,
            kind,
            step_before_last,
            converges_if_worse: false,
        }
    }
}

/// Chooses the next trial step for a given kind of sample.
pub(super) trait Refine: Sample {
    fn propose(state: &State<Self>, config: &Config) -> Proposal;
}

impl Refine for Point {
    fn propose(state: &State<Self>, config: &Config) -> Proposal {
        let x_tol = config.x_tol(state.inner().x);
        let limit = 0.5 * state.step_before_last().abs();

        if state.step_before_last().abs() > x_tol {
            let step = parabolic_step(state);
            let accepted = step.is_finite()
                && step.abs() <= limit
                && state.contains(state.inner().x + step);
            if accepted {
                let proposal = Proposal::new(step, Step::Parabolic, state.last_step());
                return at_least_minimal(state, proposal, x_tol);
            }
        }

        let side = state.larger_side();
        at_least_minimal(
            state,
            Proposal::new(GOLDEN_SECTION * side, Step::Golden, side),
            x_tol,
        )
    }
}

impl Refine for GradientPoint {
    fn propose(state: &State<Self>, config: &Config) -> Proposal {
        let inner = state.inner();
        let x_tol = config.x_tol(inner.x);
        let limit = 0.5 * state.step_before_last().abs();

        if state.step_before_last().abs() > x_tol {
            let valid = |step: f64| {
                step.is_finite()
                    && step * inner.derivative <= 0.0
                    && step.abs() <= limit
                    && state.contains(inner.x + step)
            };
            let first = secant_step(&inner, &state.second());
            let second = secant_step(&inner, &state.previous());

            let chosen = match (valid(first), valid(second)) {
                (true, true) => {
                    let step = if first.abs() < second.abs() { first } else { second };
                    if step.abs() < x_tol {
                        return Proposal {
                            step: minimal_step(state, x_tol),
                            kind: Step::Minimal,
                            step_before_last: state.last_step(),
                            converges_if_worse: true,
                        };
                    }
                    Some(step)
                }
                (true, false) => Some(first),
                (false, true) => Some(second),
                (false, false) => None,
            };

            if let Some(step) = chosen {
                return Proposal::new(nudge(state, step, x_tol), Step::Secant, state.last_step());
            }
        }

        // Bisect the downhill side, or the larger side where the slope is negligible.
        let f_tol = config.f_tol(inner.value);
        let side = if inner.derivative.abs() < f_tol / x_tol {
            state.larger_side()
        } else if inner.derivative >= 0.0 {
            state.left().x - inner.x
        } else {
            state.right().x - inner.x
        };
        Proposal::new(nudge(state, 0.5 * side, x_tol), Step::Bisection, side)
    }
}

/// Step to the vertex of the parabola through the best point and runners-up.
fn parabolic_step(state: &State<Point>) -> f64 {
    let (x, w, v) = (state.inner(), state.second(), state.previous());
    let r = (x.x - w.x) * (x.value - v.value);
    let q = (x.x - v.x) * (x.value - w.value);
    let p = (x.x - v.x) * q - (x.x - w.x) * r;
    -p / (2.0 * (q - r))
}

/// Step to where the secant through two derivatives crosses zero.
fn secant_step(inner: &GradientPoint, other: &GradientPoint) -> f64 {
    (other.x - inner.x) * inner.derivative / (inner.derivative - other.derivative)
}

/// Smallest allowed step into the larger side.
fn minimal_step<P: Sample>(state: &State<P>, x_tol: f64) -> f64 {
    let side = state.larger_side();
    x_tol.min(0.9 * side.abs()).copysign(side)
}

/// Replaces a step below the tolerance by a minimal step into the larger side.
fn at_least_minimal<P: Sample>(state: &State<P>, proposal: Proposal, x_tol: f64) -> Proposal {
    if proposal.step.abs() >= x_tol {
        return proposal;
    }
    Proposal {
        step: minimal_step(state, x_tol),
        kind: Step::Minimal,
        ..proposal
    }
}

/// Raises a step below the tolerance to `x_tol`, keeping its direction.
fn nudge<P: Sample>(state: &State<P>, step: f64, x_tol: f64) -> f64 {
    if step.abs() >= x_tol {
        return step;
    }
    let room = if step.is_sign_negative() {
        state.inner().x() - state.left().x()
    } else {
        state.right().x() - state.inner().x()
    };
    x_tol.min(0.9 * room).copysign(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::optimization::bracket::Bracket;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn parabolic_step_hits_vertex_of_exact_parabola() {
        let bracket = Bracket::new(
            Point::new(-1.0, 1.0),
            Point::new(0.25, 0.0625),
            Point::new(2.0, 4.0),
        )
        .expect("valid bracket");
        let state = State::new(&bracket);

        let proposal = Point::propose(&state, &config());

        assert_eq!(proposal.kind, Step::Parabolic);
        assert_relative_eq!(proposal.step, -0.25, epsilon = 1e-12);
        assert!(!proposal.converges_if_worse);
    }

    #[test]
    fn falls_back_to_golden_after_small_steps() {
        let bracket = Bracket::new(
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(3.0, 2.0),
        )
        .expect("valid bracket");
        let mut state = State::new(&bracket);
        state.apply(&Proposal::new(1.0, Step::Parabolic, 0.01), Point::new(2.0, 0.5));

        let proposal = Point::propose(&state, &config());

        assert_eq!(proposal.kind, Step::Golden);
        assert_relative_eq!(proposal.step, -GOLDEN_SECTION);
        assert_relative_eq!(proposal.step_before_last, -1.0);
    }

    #[test]
    fn secant_step_finds_zero_of_linear_derivative() {
        let f = |x: f64| GradientPoint::new(x, (x - 0.5).powi(2), 2.0 * (x - 0.5));
        let bracket = Bracket::new(f(-1.0), f(0.0), f(2.0)).expect("valid bracket");
        let state = State::new(&bracket);

        let proposal = GradientPoint::propose(&state, &config());

        assert_eq!(proposal.kind, Step::Secant);
        assert_relative_eq!(proposal.step, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_derivative_proposes_minimal_step() {
        let f = |x: f64| GradientPoint::new(x, x * x, 2.0 * x);
        let bracket = Bracket::new(f(-1.0), f(0.0), f(2.0)).expect("valid bracket");
        let state = State::new(&bracket);

        let proposal = GradientPoint::propose(&state, &config());

        assert_eq!(proposal.kind, Step::Minimal);
        assert!(proposal.converges_if_worse);
        assert!(proposal.step > 0.0);
        assert!(proposal.step <= config().x_tol(0.0));
    }

    #[test]
    fn uphill_secant_steps_fall_back_to_bisection() {
        // Derivatives disagree with the values, so secant steps point uphill.
        let bracket = Bracket::new(
            GradientPoint::new(-1.0, 1.0, 1.0),
            GradientPoint::new(0.0, 0.0, 1.0),
            GradientPoint::new(1.0, 1.0, 2.0),
        )
        .expect("valid bracket");
        let state = State::new(&bracket);

        let proposal = GradientPoint::propose(&state, &config());

        assert_eq!(proposal.kind, Step::Bisection);
        assert_relative_eq!(proposal.step, -0.5);
    }
}

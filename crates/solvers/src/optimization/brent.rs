//! Brent's method for refining a bracketed one-dimensional minimum.
//!
//! # Algorithm
//!
//! The refiner keeps the bracket `(left, right)`, the best point found so far
//! and the two runner-up points. Each iteration proposes a step from the best
//! point and evaluates there:
//!
//! - Without derivatives, the step jumps to the vertex of the parabola
//!   through the best point and the runners-up, falling back to a
//!   golden-section step when the parabola is untrustworthy.
//! - With derivatives, the step is a secant extrapolation of the derivative
//!   toward zero, falling back to bisection of the downhill side.
//!
//! Interpolated steps are only accepted when they land strictly inside the
//! bracket and are at most half the step before last, so slow progress
//! forces the robust fallback.
//!
//! # Convergence
//!
//! The search converges when the bracket is narrower than twice
//! `max(|x| * tolerance, x_abs_tol, f64::MIN_POSITIVE)`. The test runs before
//! each evaluation, so a bracket that is already converged costs no
//! evaluations at all.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation. Observers can return
//! [`Action::StopEarly`] to halt with the best point found so far.

mod action;
mod config;
mod error;
mod event;
mod propose;
mod search;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::{Event, Step};
pub use solution::{Solution, Status};

use descent_core::{GradientPoint, Observer, Point, Scalar1D, Scalar1DWithGradient};

use crate::optimization::{
    bracket::Bracket,
    probe::{Derivatives, Values},
};

use search::search;

/// Refines a bracketed minimum using parabolic interpolation.
///
/// # Errors
///
/// Returns an error if the config is invalid.
pub fn minimize<F, Obs>(
    f: &F,
    bracket: &Bracket<Point>,
    config: &Config,
    observer: Obs,
) -> Result<Solution<Point>, Error>
where
    F: Scalar1D,
    Obs: Observer<Event<Point>, Action>,
{
    search(&Values(f), bracket, config, observer)
}

/// Refines a bracketed minimum without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the config is invalid.
pub fn minimize_unobserved<F: Scalar1D>(
    f: &F,
    bracket: &Bracket<Point>,
    config: &Config,
) -> Result<Solution<Point>, Error> {
    minimize(f, bracket, config, ())
}

/// Refines a bracketed minimum using secant steps on the derivative.
///
/// # Errors
///
/// Returns an error if the config is invalid.
pub fn minimize_with_derivative<F, Obs>(
    f: &F,
    bracket: &Bracket<GradientPoint>,
    config: &Config,
    observer: Obs,
) -> Result<Solution<GradientPoint>, Error>
where
    F: Scalar1DWithGradient,
    Obs: Observer<Event<GradientPoint>, Action>,
{
    search(&Derivatives(f), bracket, config, observer)
}

/// Refines a bracketed minimum using derivatives, without observer support.
///
/// This is a convenience wrapper around [`minimize_with_derivative`] that
/// uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the config is invalid.
pub fn minimize_with_derivative_unobserved<F: Scalar1DWithGradient>(
    f: &F,
    bracket: &Bracket<GradientPoint>,
    config: &Config,
) -> Result<Solution<GradientPoint>, Error> {
    minimize_with_derivative(f, bracket, config, ())
}

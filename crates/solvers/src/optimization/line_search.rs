//! Minimization along a line through a multi-dimensional domain.
//!
//! A line search restricts an N-dimensional objective to the line
//! `x + w * direction` and minimizes the resulting function of the scalar
//! step `w`. The minimum is first bracketed starting from `w = 0` and
//! `w = 1`, then refined with Brent's method.
//!
//! The gradient-aware variant projects the gradient onto the direction, so
//! the refinement can use secant steps on the directional derivative.

mod config;
mod error;
mod projection;


pub use config::Config;
pub use error::Error;

use descent_core::{ScalarND, ScalarNDWithGradient, VectorPoint, VectorSpace};
use tracing::trace;

use crate::optimization::{bracket, brent};

use projection::Projection;

/// The minimum found along a line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMinimum<V> {
    /// Multiple of the direction from the start to the minimum.
    pub step: f64,
    /// Position of the minimum.
    pub x: V,
    /// Objective value at the minimum.
    pub value: f64,
}

/// Minimizes `f` along the line through `x` in `direction`.
///
/// # Errors
///
/// Returns an error if the direction is unusable, the config is invalid, or
/// no minimum can be bracketed along the line.
pub fn minimize<V, F>(
    f: &F,
    x: &V,
    direction: &V,
    config: &Config,
) -> Result<LineMinimum<V>, Error>
where
    V: VectorSpace,
    F: ScalarND<V>,
{
    check_direction(x, direction)?;
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let line = Projection::new(f, x, direction);
    let bracket = bracket::find(&line, 0.0, 1.0, &config.bracket)?;
    let solution = brent::minimize_unobserved(&line, &bracket, &config.brent)?;

    let step = solution.x();
    trace!(step, value = solution.value(), iters = solution.iters, "line minimum");

    Ok(LineMinimum {
        step,
        x: V::point_on_line(x, direction, step),
        value: solution.value(),
    })
}

/// Minimizes `f` along a line, updating the caller's buffers.
///
/// On success `x` moves to the minimum and `direction` is scaled to the
/// displacement actually taken. Both are left untouched on error.
///
/// # Errors
///
/// Returns the same errors as [`minimize`].
pub fn minimize_in_place<V, F>(
    f: &F,
    x: &mut V,
    direction: &mut V,
    config: &Config,
) -> Result<f64, Error>
where
    V: VectorSpace,
    F: ScalarND<V>,
{
    let minimum = minimize(f, x, direction, config)?;

    *direction = direction.scale(minimum.step);
    *x = minimum.x;
    Ok(minimum.value)
}

/// Minimizes `f` along the line through `start` in `direction`, using the
/// directional derivative.
///
/// The returned point carries the gradient evaluated at the minimum.
///
/// # Errors
///
/// Returns an error if the direction is unusable, the config is invalid, no
/// minimum can be bracketed along the line, or the objective returns a
/// gradient of the wrong dimension.
pub fn minimize_with_gradient<V, F>(
    f: &F,
    start: &VectorPoint<V>,
    direction: &V,
    config: &Config,
) -> Result<VectorPoint<V>, Error>
where
    V: VectorSpace,
    F: ScalarNDWithGradient<V>,
{
    check_direction(start.x(), direction)?;
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let line = Projection::new(f, start.x(), direction);
    let bracket = bracket::find_with_derivative(&line, 0.0, 1.0, &config.bracket)?;
    let solution = brent::minimize_with_derivative_unobserved(&line, &bracket, &config.brent)?;

    let step = solution.x();
    trace!(step, value = solution.value(), iters = solution.iters, "line minimum");

    let x = V::point_on_line(start.x(), direction, step);
    let (value, gradient) = f.value_and_gradient(&x);
    Ok(VectorPoint::new(x, value, gradient)?)
}

/// Rejects directions that cannot define a line through `x`.
fn check_direction<V: VectorSpace>(x: &V, direction: &V) -> Result<(), Error> {
    if x.dimension() != direction.dimension() {
        return Err(Error::DimensionMismatch {
            point: x.dimension(),
            direction: direction.dimension(),
        });
    }

    let magnitude = direction.magnitude();
    let floor = f64::EPSILON * x.magnitude().max(1.0);
    if magnitude.is_finite() && magnitude > floor {
        Ok(())
    } else {
        Err(Error::DegenerateDirection { magnitude })
    }
}
